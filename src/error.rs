//! Error types for generate-subcommand.
//!
//! Uses thiserror for derive macros and keeps messages user-actionable.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for generate-subcommand.
///
/// Each variant maps to an exit code. Interactive validation failures are not
/// represented here; they are recovered by prompting again.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A flag value does not have the shape of an identifier.
    #[error("invalid -{flag} value '{value}': must start with a letter followed by letters or digits")]
    InvalidFlag { flag: &'static str, value: String },

    /// Input ended while a required answer was still missing.
    #[error("input closed before {0} was provided")]
    InputClosed(&'static str),

    /// Reading input or writing prompts failed.
    #[error("terminal I/O failed: {0}")]
    Prompt(#[from] std::io::Error),

    /// The template could not be compiled or executed.
    #[error("failed to render template: {0}")]
    Render(#[from] minijinja::Error),

    /// The rendered output could not be written.
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenerateError::InvalidFlag { .. } => exit_codes::USER_ERROR,
            GenerateError::InputClosed(_) => exit_codes::USER_ERROR,
            GenerateError::Prompt(_) => exit_codes::IO_FAILURE,
            GenerateError::Render(_) => exit_codes::IO_FAILURE,
            GenerateError::Write { .. } => exit_codes::IO_FAILURE,
        }
    }

    /// Wrap an I/O error raised while writing `path`.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for generate-subcommand operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
