//! Error types for folio-client

use thiserror::Error;

/// Result type alias for folio-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up a source
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
