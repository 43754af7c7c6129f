//! Catalogue on the local filesystem.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::ProjectSource;

/// Reads the catalogue from a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProjectSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> folio_core::Result<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}
