//! # folio-client
//!
//! Concrete [`ProjectSource`](folio_core::ProjectSource)s for Folio:
//! - [`HttpSource`]: a catalogue served over HTTP(S)
//! - [`FileSource`]: a catalogue on the local filesystem
//!
//! [`source_for`] picks one from a location string.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod file;
pub mod http;

use std::path::Path;

use folio_core::ProjectSource;

pub use error::{Error, Result};
pub use file::FileSource;
pub use http::HttpSource;

/// Whether `location` is an HTTP(S) URL rather than a path.
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Build a source for `location`.
///
/// URLs become an [`HttpSource`]; anything else is a file path, resolved
/// against `base_dir` when relative.
pub fn source_for(location: &str, base_dir: Option<&Path>) -> Result<Box<dyn ProjectSource>> {
    if is_remote(location) {
        return Ok(Box::new(HttpSource::new(location.trim())?));
    }

    let path = Path::new(location);
    let path = match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    };
    Ok(Box::new(FileSource::new(path)))
}
