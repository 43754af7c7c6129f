//! Folio configuration file.
//!
//! ```toml
//! source = "content/data/projects.json"
//!
//! [container]
//! id = "projects-container"
//! class = "row"
//!
//! [intro]
//! enabled = true
//!
//! [links]
//! hosting_patterns = ["github.io", "netlify.app"]
//!
//! [tag_styles]
//! Rust = "rust"
//! ```
//!
//! Every key is optional; omitted keys take the defaults shown by
//! `folio config init`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use folio_core::DEFAULT_SOURCE;
use folio_render::container::{DEFAULT_CONTAINER_CLASS, DEFAULT_CONTAINER_ID};
use folio_render::links::DEFAULT_HOSTING_PATTERN;
use folio_render::{Container, Intro, LinkClassifier, ProjectRenderer, StandardCard, TagStyles};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Name used for the config directory and file.
pub const PROJECT_NAME: &str = "folio";

/// File name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Catalogue location: URL or file path
    pub source: String,
    /// Output file; stdout when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Output container element
    pub container: ContainerConfig,
    /// Optional header above the cards
    pub intro: IntroConfig,
    /// Link labelling
    pub links: LinksConfig,
    /// Extra or replacement tag styles
    pub tag_styles: BTreeMap<String, String>,
}

/// `[container]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Element id
    pub id: String,
    /// Element class
    pub class: String,
}

/// `[intro]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    /// Emit the header
    pub enabled: bool,
    /// Header heading
    pub heading: String,
    /// Header paragraph
    pub text: String,
}

/// `[links]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Hosts (and their subdomains) whose links are labelled "Live Demo"
    pub hosting_patterns: Vec<String>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            output: None,
            container: ContainerConfig::default(),
            intro: IntroConfig::default(),
            links: LinksConfig::default(),
            tag_styles: BTreeMap::new(),
        }
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_CONTAINER_ID.to_string(),
            class: DEFAULT_CONTAINER_CLASS.to_string(),
        }
    }
}

impl Default for IntroConfig {
    fn default() -> Self {
        let intro = Intro::default();
        Self {
            enabled: false,
            heading: intro.heading,
            text: intro.text,
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            hosting_patterns: vec![DEFAULT_HOSTING_PATTERN.to_string()],
        }
    }
}

impl FolioConfig {
    /// Default config file location in the user config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join(CONFIG_FILE_NAME))
    }

    /// Explicit path if given, otherwise the default location.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, a missing default file
    /// yields the defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            log::debug!("No config directory on this platform; using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(Error::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            log::debug!("No config at {}; using defaults", path.display());
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Write this configuration to `path`, creating parent directories.
    ///
    /// An existing file is only replaced when `force` is set.
    pub fn save(&self, path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            return Err(Error::config(format!(
                "Config file already exists at {}. Use --force to overwrite.",
                path.display()
            )));
        }
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| Error::io_with_path(e, dir))?;
        }
        std::fs::write(path, self.to_toml_string()?).map_err(|e| Error::io_with_path(e, path))
    }

    /// An empty output container as configured.
    pub fn container(&self) -> Container {
        Container::new(self.container.id.as_str(), self.container.class.as_str())
    }

    /// A renderer with the configured styles, link rules, and intro.
    pub fn renderer(&self) -> ProjectRenderer<StandardCard> {
        let styles = TagStyles::default().with_overrides(self.tag_styles.clone());
        let links = LinkClassifier::new(self.links.hosting_patterns.iter().cloned());
        let renderer = ProjectRenderer::new(StandardCard::new(styles, links));

        if self.intro.enabled {
            renderer.with_intro(Intro {
                heading: self.intro.heading.clone(),
                text: self.intro.text.clone(),
            })
        } else {
            renderer
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
