//! Error types for the bot.
//!
//! [`BotError`] is the top-level error; [`HandlerError`] is used for handler failures.

use propbot_core::CollaboratorError;
use thiserror::Error;

/// Top-level error for the bot (transport, handler, analysis, config, IO).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Unauthorized access")]
    Unauthorized,
}

/// Result type for bot operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;

impl From<BotError> for CollaboratorError {
    fn from(err: BotError) -> Self {
        match err {
            BotError::Collaborator(inner) => inner,
            BotError::Config(msg) => CollaboratorError::Config(msg),
            BotError::Io(e) => CollaboratorError::Io(e),
            other => CollaboratorError::Bot(other.to_string()),
        }
    }
}
