//! Common test sources and fixtures for rendering tests.

use async_trait::async_trait;
use folio_core::{Error, Project, ProjectSource, Result};
use folio_render::{Container, Element};

/// Source that always returns the same payload.
pub struct PayloadSource(pub String);

impl PayloadSource {
    pub fn new(payload: &str) -> Self {
        Self(payload.to_string())
    }
}

#[async_trait]
impl ProjectSource for PayloadSource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn fetch(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Source that answers like a missing file on a web server.
pub struct NotFoundSource;

#[async_trait]
impl ProjectSource for NotFoundSource {
    fn describe(&self) -> String {
        "https://example.com/data/projects.json".to_string()
    }

    async fn fetch(&self) -> Result<String> {
        Err(Error::fetch("404 Not Found"))
    }
}

/// A catalogue with one fully populated and one bare project.
pub const CATALOGUE: &str = r#"{
    "projects": [
        {
            "title": "Weather Board",
            "description": "Forecasts from a public API.",
            "img": "img/weather.png",
            "tags": ["HTML", "Rust"],
            "link": "https://someone.github.io/weather",
            "github": "https://github.com/someone/weather",
            "subContent": [
                {"title": "Plugin", "description": "Map overlay.", "github": "https://github.com/someone/plugin"}
            ]
        },
        {
            "title": "Shop",
            "link": "https://example.com"
        }
    ]
}"#;

pub fn project(title: &str) -> Project {
    Project {
        title: Some(title.to_string()),
        ..Project::default()
    }
}

/// Card elements in the container, skipping any header or panel.
pub fn cards(container: &Container) -> Vec<&Element> {
    container
        .elements()
        .filter(|e| e.has_class("col-md-6"))
        .collect()
}
