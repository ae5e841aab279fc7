//! Company source port
//!
//! Defines where the list of company names comes from.

use std::path::PathBuf;

use thiserror::Error;

/// Errors while reading the company list
#[derive(Debug, Error)]
pub enum SourceError {
    /// The input does not exist
    #[error("input not found: {0}")]
    NotFound(PathBuf),

    /// The input exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Input location
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Ordered list of raw company names
#[cfg_attr(test, mockall::automock)]
pub trait CompanySource {
    /// Read all names in input order, trailing whitespace stripped
    fn load(&self) -> Result<Vec<String>, SourceError>;

    /// Human-readable location for logs
    fn describe(&self) -> String;
}
