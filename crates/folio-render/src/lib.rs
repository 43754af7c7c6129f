//! Card markup and project list rendering for Folio.
//!
//! Projects are turned into a tree of markup [`Element`]s by a
//! [`CardTemplate`], appended to an explicit [`Container`], and serialized
//! to HTML only at the edge.
//!
//! # Modules
//!
//! - [`markup`]: Node builder and HTML serializer
//! - [`styles`]: Tag-to-badge style table
//! - [`links`]: Link labelling and URL scheme checks
//! - [`diagnostics`]: Missing-field warnings
//! - [`card`]: Card templates
//! - [`container`]: Output container
//! - [`renderer`]: The project renderer and its state

#![forbid(unsafe_code)]

pub mod card;
pub mod container;
pub mod diagnostics;
pub mod error;
pub mod links;
pub mod markup;
pub mod renderer;
pub mod styles;

// Re-export key types at crate root for convenience
pub use card::{CardTemplate, StandardCard};
pub use container::Container;
pub use diagnostics::{Diagnostics, Field, MissingField};
pub use error::{Error, Result};
pub use links::LinkClassifier;
pub use markup::{Element, Node};
pub use renderer::{Intro, ProjectRenderer, RenderReport, RenderState};
pub use styles::TagStyles;
