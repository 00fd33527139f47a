//! Error taxonomy of the CLI: argument errors, setup errors, and the dispatcher's union of
//! argument and collaborator errors.

use propbot_core::CollaboratorError;
use thiserror::Error;

/// Exit status for a usage error (clap's convention).
pub const EXIT_USAGE: u8 = 2;
/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// The command line does not follow the grammar. Displays with usage guidance.
///
/// `--help` and `--version` also surface as this type so that nothing runs after them;
/// [`ArgumentError::is_informational`] tells them apart.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ArgumentError(#[from] clap::Error);

impl ArgumentError {
    /// True for `--help` / `--version` output, which exits 0.
    pub fn is_informational(&self) -> bool {
        matches!(
            self.0.kind(),
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
        )
    }

    pub fn kind(&self) -> clap::error::ErrorKind {
        self.0.kind()
    }

    /// Prints to stdout for help/version and to stderr otherwise.
    pub fn print(&self) -> std::io::Result<()> {
        self.0.print()
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_informational() {
            0
        } else {
            EXIT_USAGE
        }
    }
}

/// Failure of one setup step.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("required tool '{tool}' not found on PATH: {guidance}")]
    MissingDependency { tool: String, guidance: String },

    #[error("{0}")]
    StepFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Anything the dispatcher can fail with.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

impl DispatchError {
    pub fn exit_code(&self) -> u8 {
        match self {
            DispatchError::Argument(e) => e.exit_code(),
            DispatchError::Collaborator(_) => EXIT_FAILURE,
        }
    }
}

impl From<std::io::Error> for DispatchError {
    fn from(err: std::io::Error) -> Self {
        DispatchError::Collaborator(CollaboratorError::Io(err))
    }
}
