//! Icon download.
//!
//! `IconFetcher` is the seam the converter downloads through; `HttpFetcher`
//! is the reqwest-backed implementation. One GET per icon, no retry.

use std::time::Duration;

use async_trait::async_trait;

use crate::types::{IconError, IconResult, SignatureError, SignatureResult};

/// Retrieves the raw bytes behind an icon URL.
#[async_trait]
pub trait IconFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> IconResult<Vec<u8>>;
}

/// HTTP fetcher backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a client. Without a timeout a stalled request blocks the build.
    pub fn new(timeout: Option<Duration>) -> SignatureResult<Self> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| SignatureError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl IconFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> IconResult<Vec<u8>> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(IconError::Status(status.as_u16()));
        }

        let body = resp.bytes().await?;
        tracing::debug!("Fetched {} bytes from {url}", body.len());
        Ok(body.to_vec())
    }
}
