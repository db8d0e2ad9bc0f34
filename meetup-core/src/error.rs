//! Error types for meetup operations.

use thiserror::Error;

/// Errors that can occur while resolving, parsing or storing a meetup.
#[derive(Error, Debug)]
pub enum MeetupError {
    #[error("Invalid date '{0}'. Expected yyyy-mm-dd.")]
    InvalidDate(String),

    #[error("Invalid time format: '{0}'. Expected format like '6:30pm' or '10:00am'.")]
    InvalidTimeFormat(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for meetup operations.
pub type MeetupResult<T> = Result<T, MeetupError>;
