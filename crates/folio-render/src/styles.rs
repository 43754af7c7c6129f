//! Tag-to-style lookup table for badges.

use std::collections::HashMap;

/// Built-in tag categories.
const DEFAULT_STYLES: &[(&str, &str)] = &[
    ("HTML", "html"),
    ("CSS", "css"),
    ("JavaScript", "js"),
    ("TypeScript", "ts"),
    ("PHP", "php"),
    ("Python", "python"),
    ("Ruby", "ruby"),
    ("Bootstrap", "bootstrap"),
    ("API", "api"),
    ("RPG Maker XP", "rpgmakerxp"),
];

/// Maps a tag name to its badge style category.
///
/// Lookups are exact and case-sensitive. Unknown tags map to the empty
/// category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagStyles {
    styles: HashMap<String, String>,
}

impl TagStyles {
    /// An empty table; every tag maps to the empty category.
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Add or replace entries.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (tag, style) in overrides {
            self.styles.insert(tag.into(), style.into());
        }
        self
    }

    /// Style category for `tag`, or `""` when unknown.
    pub fn style_for(&self, tag: &str) -> &str {
        self.styles.get(tag).map(String::as_str).unwrap_or("")
    }

    /// Number of known tags.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for TagStyles {
    fn default() -> Self {
        Self::empty().with_overrides(DEFAULT_STYLES.iter().copied())
    }
}
