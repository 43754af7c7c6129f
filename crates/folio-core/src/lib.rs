//! Folio Core — project model, payload decoding, and the source seam.
//!
//! This crate has no internal Folio dependencies. Rendering lives in
//! `folio-render`, concrete sources in `folio-client`.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`model`]: `Project` / `SubEntry` and tolerant payload decoding
//! - [`source`]: The [`ProjectSource`] trait and the degrading loader

#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod source;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use model::{Project, SubEntry, decode_projects, non_empty};
pub use source::{ProjectSource, load_projects};

/// Relative location of the project catalogue when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "content/data/projects.json";
