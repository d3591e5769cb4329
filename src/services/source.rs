//! Remote source fetching.
//!
//! The `source` query parameter points at an image to download instead
//! of reading the request body. The client is built once at startup with
//! explicit timeouts and a bounded redirect policy; `fetch` blocks and
//! must be called from a blocking context.

use thiserror::Error;

use crate::models::FetchConfig;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The remote returned a non-success status.
    #[error("Download from {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// Transport failure, including connect and read timeouts.
    #[error("Download from {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

pub struct SourceFetcher {
    client: reqwest::blocking::Client,
}

impl SourceFetcher {
    pub fn new(config: &FetchConfig) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;
        Ok(Self { client })
    }

    /// GET the source URL and return the response body. Non-2xx statuses
    /// and transport errors both fail the request; nothing is retried.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(url = %url, "Fetching source image");

        let response = self.client.get(url).send().map_err(|e| FetchError::Network {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Source fetch returned an error status");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|e| FetchError::Network {
            url: url.to_string(),
            source: e,
        })?;

        tracing::debug!(url = %url, bytes = body.len(), "Source image fetched");
        Ok(body.to_vec())
    }
}
