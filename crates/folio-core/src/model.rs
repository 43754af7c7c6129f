//! Project catalogue model.
//!
//! The catalogue is a JSON document of the shape `{ "projects": [ ... ] }`.
//! Every project field is optional on the wire; accessors apply the
//! display fallbacks so callers never deal with empty strings.
//!
//! # Example
//!
//! ```rust
//! use folio_core::decode_projects;
//!
//! let json = r#"{"projects": [{"title": "Atlas", "tags": ["Rust"]}]}"#;
//! let projects = decode_projects(json).unwrap();
//! assert_eq!(projects[0].title(), "Atlas");
//! assert_eq!(projects[0].description(), "No description available.");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Title used when a project or sub entry has none.
pub const UNTITLED: &str = "Untitled";

/// Description used when a project has none.
pub const NO_DESCRIPTION: &str = "No description available.";

/// One portfolio entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Display title
    #[serde(default)]
    pub title: Option<String>,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// Image URL
    #[serde(default)]
    pub img: Option<String>,
    /// Technology tags, in display order
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Live or project URL
    #[serde(default)]
    pub link: Option<String>,
    /// Source repository URL
    #[serde(default)]
    pub github: Option<String>,
    /// Nested notes
    #[serde(default)]
    pub sub_content: Option<Vec<SubEntry>>,
}

/// A nested note attached to a [`Project`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubEntry {
    /// Note title
    #[serde(default)]
    pub title: String,
    /// Note body
    #[serde(default)]
    pub description: String,
    /// Source repository URL for this note
    #[serde(default)]
    pub github: Option<String>,
}

/// Treat an empty string the same as a missing value.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Project {
    /// Title, or `"Untitled"`.
    pub fn title(&self) -> &str {
        non_empty(&self.title).unwrap_or(UNTITLED)
    }

    /// Description, or `"No description available."`.
    pub fn description(&self) -> &str {
        non_empty(&self.description).unwrap_or(NO_DESCRIPTION)
    }

    /// Image URL, if present and non-empty.
    pub fn img(&self) -> Option<&str> {
        non_empty(&self.img)
    }

    /// Project link, if present and non-empty.
    pub fn link(&self) -> Option<&str> {
        non_empty(&self.link)
    }

    /// Repository link, if present and non-empty.
    pub fn github(&self) -> Option<&str> {
        non_empty(&self.github)
    }

    /// Tags in input order (empty when absent).
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Sub entries in input order (empty when absent).
    pub fn sub_entries(&self) -> &[SubEntry] {
        self.sub_content.as_deref().unwrap_or_default()
    }
}

impl SubEntry {
    /// Title, or `"Untitled"`.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Repository link, if present and non-empty.
    pub fn github(&self) -> Option<&str> {
        non_empty(&self.github)
    }
}

/// Decode a catalogue payload into its projects.
///
/// The payload must be an object whose `projects` field is an array of
/// project objects. Anything else is an error:
///
/// - Invalid JSON, or items that do not fit the project shape: [`Error::Parse`]
/// - Non-object root, or `projects` missing, `null` or not an array:
///   [`Error::InvalidFormat`]
pub fn decode_projects(text: &str) -> Result<Vec<Project>> {
    let value: Value = serde_json::from_str(text)?;

    let Value::Object(mut root) = value else {
        return Err(Error::InvalidFormat);
    };

    match root.remove("projects") {
        Some(items @ Value::Array(_)) => Ok(serde_json::from_value(items)?),
        _ => Err(Error::InvalidFormat),
    }
}

// ============================================================================
// Tests
// ============================================================================
