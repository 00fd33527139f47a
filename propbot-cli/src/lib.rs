//! # propbot-cli
//!
//! Mode dispatcher for the prop bot: argument parsing, startup config, the interactive loop,
//! the one-shot / report / sample modes, and the setup runner behind `propbot-setup`.

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod interactive;
pub mod render;
pub mod request;
pub mod samples;
pub mod setup;

pub use cli::{Cli, ModeArg};
pub use config::AppConfig;
pub use dispatcher::{finish, report_error, Dispatcher};
pub use error::{ArgumentError, DispatchError, SetupError};
pub use interactive::{run_interactive, LineCommand};
pub use request::{InvocationRequest, Mode};
pub use setup::{SetupFailure, SetupRunner, SetupStep};
