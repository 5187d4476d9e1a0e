//! Error handling for avcreate.
//! Defines the error type and result alias used by every stage of scaffolding.

use std::io;
use thiserror::Error;

/// Errors that abort a scaffolding run.
///
/// Rejected answers and files that already exist are not errors: the first
/// is handled by re-prompting, the second by skipping the catalog entry.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem failure while creating a directory, writing or copying a file
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Filesystem failure while emitting one catalog entry
    #[error("Failed to emit '{path}': {source}.")]
    EmitError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The prompt widget failed to render a question or read an answer
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// The bundled package metadata is unreadable or incomplete
    #[error("Metadata error: {0}.")]
    MetadataError(String),

    /// An answer record does not match the questions it claims to answer
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Preloaded answers are neither JSON nor YAML
    #[error("Failed to parse answers: {0}.")]
    AnswersParseError(String),

    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::PromptError(err.to_string())
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to report
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1. Files
/// written before the failure are left in place.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
