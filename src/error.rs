//! Error types for qualcsv

use thiserror::Error;

/// Errors raised at the I/O and configuration boundaries.
///
/// Tokenizing a line never fails; malformed quoting produces best-effort
/// fields instead of an error.
#[derive(Error, Debug)]
pub enum CsvError {
    /// Input could not be opened or read
    #[error("Read error: {0}")]
    ReadError(String),

    /// Output could not be created or written
    #[error("Write error: {0}")]
    WriteError(String),

    /// Delimiter/qualifier combination that cannot be tokenized
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CsvError>;
