//! The catalogue source seam and the degrading loader.
//!
//! A [`ProjectSource`] only knows how to produce the raw payload text.
//! [`load_projects`] owns the failure policy: whatever goes wrong while
//! fetching or decoding, the caller gets a (possibly empty) list.

use async_trait::async_trait;

use crate::Result;
use crate::model::{Project, decode_projects};

/// Somewhere a project catalogue can be fetched from.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Short description used in log messages (a URL or a path).
    fn describe(&self) -> String;

    /// Fetch the raw catalogue payload.
    async fn fetch(&self) -> Result<String>;
}

/// Fetch and decode the catalogue, degrading every failure to an empty list.
///
/// Transport errors, non-success responses and malformed payloads are
/// logged at warn level and never propagated.
pub async fn load_projects(source: &dyn ProjectSource) -> Vec<Project> {
    log::debug!("Loading projects from {}", source.describe());

    let fetched = match source.fetch().await {
        Ok(text) => decode_projects(&text),
        Err(e) => Err(e),
    };

    match fetched {
        Ok(projects) => {
            log::info!(
                "Loaded {} project(s) from {}",
                projects.len(),
                source.describe()
            );
            projects
        }
        Err(e) => {
            log::warn!("Error fetching projects: {e}");
            Vec::new()
        }
    }
}
