//! Error types for seatplan calendar operations.

use thiserror::Error;

/// Errors that can occur outside the (infallible) encoders: configuration,
/// validation of existing documents, and saving files.
#[derive(Error, Debug)]
pub enum SeatplanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid ICS date-time '{0}': expected YYYYMMDDTHHMMSSZ")]
    InvalidDateTime(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Invalid ICS document: {0}")]
    IcsInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not save file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Invalid file name '{0}': must be a plain name without directories")]
    InvalidFilename(String),
}

/// Result type alias for seatplan operations.
pub type SeatplanResult<T> = Result<T, SeatplanError>;
