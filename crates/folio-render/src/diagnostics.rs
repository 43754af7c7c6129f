//! Data-quality warnings collected while building cards.
//!
//! Missing optional fields never stop rendering. Each one is logged at
//! warn level and recorded so callers (and tests) can inspect them.

use std::fmt;

/// Optional project fields whose absence is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `img`
    Image,
    /// `subContent`
    SubContent,
    /// `link`
    ProjectLink,
    /// `github`, on a project or a sub entry
    GithubLink,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::SubContent => write!(f, "subcontent"),
            Self::ProjectLink => write!(f, "project link"),
            Self::GithubLink => write!(f, "GitHub link"),
        }
    }
}

/// A missing optional field on a named project or sub entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    /// Display title of the project or sub entry
    pub project: String,
    /// The missing field
    pub field: Field,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Project \"{}\" is missing a {}.", self.project, self.field)
    }
}

/// Collector for [`MissingField`] warnings.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    warnings: Vec<MissingField>,
}

impl Diagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log and record a missing field.
    pub fn missing(&mut self, project: &str, field: Field) {
        let warning = MissingField {
            project: project.to_string(),
            field,
        };
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Recorded warnings, in the order they were raised.
    pub fn warnings(&self) -> &[MissingField] {
        &self.warnings
    }

    /// Number of warnings for a given field.
    pub fn count(&self, field: Field) -> usize {
        self.warnings.iter().filter(|w| w.field == field).count()
    }

    /// Take ownership of the recorded warnings.
    pub fn into_warnings(self) -> Vec<MissingField> {
        self.warnings
    }
}
