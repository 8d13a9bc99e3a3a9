//! Error types for starting the application.

use thiserror::Error;

/// Result type for startup.
pub type StartupResult<T> = Result<T, StartupError>;

/// Errors that can occur before or while bringing up the window.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The required text argument was not given.
    #[error("missing required argument <TEXT>: the text to display")]
    MissingArgument,

    /// The GUI toolkit could not start (no display, no GL context, ...).
    #[error("GUI toolkit error: {0}")]
    Toolkit(String),
}

impl StartupError {
    /// Process exit code for this error.
    ///
    /// Usage errors use `2`, the same code clap uses for bad arguments.
    pub fn exit_code(&self) -> u8 {
        match self {
            StartupError::MissingArgument => 2,
            StartupError::Toolkit(_) => 1,
        }
    }

    pub fn toolkit(message: impl Into<String>) -> Self {
        Self::Toolkit(message.into())
    }
}
