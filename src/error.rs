//! Error types for coinwatch

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when talking to the price API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network request failed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider returned a non-success HTTP status
    #[error("API error: HTTP {status}")]
    Api { status: u16 },

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Fatal application errors
///
/// Recoverable conditions (unknown symbol, unknown target currency, missing
/// ticker) are reported inline and never reach this type. Anything here
/// terminates the process with a non-zero exit code.
#[derive(Debug, Error)]
pub enum AppError {
    /// HTTP request did not complete successfully
    #[error("HTTP request did not complete successfully: {0}")]
    Fetch(#[from] ClientError),

    /// Symbol file could not be read
    #[error("Could not load specified symbol file {path:?}")]
    SymbolFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Timestamp from the API could not be parsed
    #[error("Could not parse time string from API: {0}")]
    Timestamp(#[from] chrono::ParseError),

    /// --all and update mode are mutually exclusive
    #[error("Cannot yield all listings in update mode")]
    AllInUpdateMode,
}

impl AppError {
    /// Creates a SymbolFile error
    pub fn symbol_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SymbolFile {
            path: path.into(),
            source,
        }
    }
}
