//! Handlers that make up the bot's chain: logging, allowlist, commands, prop analysis.

mod command;
mod logging;
mod prop;

pub use command::CommandHandler;
pub use logging::{AuthHandler, LoggingHandler};
pub use prop::PropHandler;
