//! # Telegram bot
//!
//! Telegram front end for the prop analyzer. Incoming messages are converted to core
//! [`Message`]s and run through a [`HandlerChain`]: logging, optional allowlist, bot commands
//! (`/start`, `/help`, `/sports`, `/props`) and prop analysis of plain text.
//! [`TeloxideBotRunner`] implements [`propbot_core::TelegramBotRunner`] on top of teloxide.

pub mod chain;
pub mod config;
pub mod core;
pub mod handlers;
pub mod replies;
pub mod runner;
pub mod telegram;

pub use core::{
    Bot, BotError, Chat, Handler, HandlerError, HandlerResponse, Message, Result,
    ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;
pub use config::TelegramConfig;
pub use handlers::{AuthHandler, CommandHandler, LoggingHandler, PropHandler};
pub use runner::{build_handler_chain, TeloxideBotRunner};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
