//! Data loading errors
//!
//! Both variants are fatal at startup: the table is built eagerly and
//! fully, so a source that cannot be fetched or a row that cannot be
//! coerced aborts the process before the server binds.

use thiserror::Error;

/// Errors produced while loading the population table
#[derive(Error, Debug)]
pub enum DataError {
    /// The CSV source could not be fetched or read
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    /// A row failed type coercion or violated the table contract
    #[error("malformed record at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },
}

impl From<reqwest::Error> for DataError {
    fn from(e: reqwest::Error) -> Self {
        DataError::Unavailable(e.to_string())
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Unavailable(e.to_string())
    }
}

/// Result type for data loading operations
pub type DataResult<T> = Result<T, DataError>;
