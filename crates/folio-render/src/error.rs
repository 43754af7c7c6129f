//! Error types for folio-render

use thiserror::Error;

/// Result type alias for folio-render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort rendering of the project list.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A URL uses a scheme that must not reach the page
    #[error("Refusing {field} URL with unsupported scheme: {url}")]
    UnsafeUrl {
        /// Project field holding the URL
        field: String,
        /// The offending URL
        url: String,
    },

    /// An absolute URL the URL parser rejects
    #[error("Refusing malformed {field} URL {url}: {reason}")]
    InvalidUrl {
        /// Project field holding the URL
        field: String,
        /// The offending URL
        url: String,
        /// Parser message
        reason: String,
    },

    /// A card template could not build a card
    #[error("Card template error: {message}")]
    Template {
        /// What went wrong
        message: String,
    },
}

impl Error {
    /// Creates a new template error.
    pub fn template<S: Into<String>>(message: S) -> Self {
        Error::Template {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsafe_url_display() {
        let err = Error::UnsafeUrl {
            field: "GitHub link".to_string(),
            url: "javascript:void(0)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Refusing GitHub link URL with unsupported scheme: javascript:void(0)"
        );
    }

    #[test]
    fn test_template_error_display() {
        assert_eq!(
            Error::template("boom").to_string(),
            "Card template error: boom"
        );
    }

    #[test]
    fn test_invalid_url_display() {
        let err = Error::InvalidUrl {
            field: "image".to_string(),
            url: "https://exa mple.com".to_string(),
            reason: "invalid domain character".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Refusing malformed image URL https://exa mple.com: invalid domain character"
        );
    }
}
