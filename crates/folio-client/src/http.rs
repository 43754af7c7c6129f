//! Catalogue served over HTTP(S).

use async_trait::async_trait;
use folio_core::{Error as CoreError, ProjectSource};

use crate::Result;

/// User agent sent with catalogue requests.
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Fetches the catalogue with a GET request.
///
/// There is no retry and no timeout beyond the client's defaults; the
/// request runs to completion or failure.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source for `url` with a default client.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(url, client))
    }

    /// Create a source for `url` using an existing client.
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    /// The catalogue URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProjectSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> folio_core::Result<String> {
        let response = self
            .client
            .get(self.url.as_str())
            .send()
            .await
            .map_err(|e| {
                CoreError::fetch_with_source(format!("request to {} failed", self.url), e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::fetch(status.to_string()));
        }

        response
            .text()
            .await
            .map_err(|e| CoreError::fetch_with_source("could not read response body", e))
    }
}
