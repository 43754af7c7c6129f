//! Error types for folio-cli

use std::path::Path;

use thiserror::Error;

/// Result type alias for folio-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop the CLI.
///
/// Catalogue and card problems are not here: they end up on the page.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-client
    #[error("Client error: {0}")]
    Client(#[from] folio_client::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error on a specific path
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being read or written
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an I/O error tagged with the path involved.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
