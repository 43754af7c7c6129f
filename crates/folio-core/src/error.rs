//! Error types for folio-core

use thiserror::Error;

/// Result type alias for folio-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while obtaining a project catalogue.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Transport failure or non-success response from a source
    #[error("Failed to fetch projects: {message}")]
    Fetch {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O error while reading a local catalogue
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload has no `projects` array
    #[error("Invalid projects data format.")]
    InvalidFormat,

    /// Payload is not valid JSON or does not match the project shape
    #[error("Invalid projects data format: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// Creates a fetch error with a message.
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Error::Fetch {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a fetch error with a message and source error.
    pub fn fetch_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Fetch {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
