//! Error types for the collaborators.
//!
//! [`CollaboratorError`] covers every failure raised inside a delegated handler (analyzer,
//! report generator, bot runner). The dispatcher prints it and exits non-zero.

use thiserror::Error;

/// Failure inside an analyzer, report generator or bot runner.
#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for collaborator operations; uses [`CollaboratorError`].
pub type Result<T> = std::result::Result<T, CollaboratorError>;
