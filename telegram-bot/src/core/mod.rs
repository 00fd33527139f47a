//! Core types and traits: Handler, Bot, Message, HandlerResponse, error.
//! Transport-agnostic; the telegram module adapts teloxide to these.

pub mod bot;
pub mod error;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use types::{
    Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User,
};
