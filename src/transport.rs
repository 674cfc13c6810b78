// src/transport.rs

//! Transport layer for fetching the feed.
//!
//! The pipeline depends only on a `(status, body)` pair or a transport
//! failure, so the HTTP client sits behind a small trait. Tests substitute
//! a stub transport to exercise every branch of the error taxonomy
//! without a network.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::FeedConfig;
use crate::error::Result;

/// A raw feed response: HTTP status code and body bytes.
#[derive(Debug, Clone)]
pub struct FeedResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs one GET of the feed URL.
#[async_trait]
pub trait FeedTransport: Send + Sync {
    /// Fetch the document at `url`.
    ///
    /// Returns `Err` only when no response was obtained at all; a response
    /// with an error status is still an `Ok` value carrying that status.
    async fn get(&self, url: &str) -> Result<FeedResponse>;
}

/// reqwest-backed transport.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a configured HTTP client.
    ///
    /// The client timeout is the only deadline the pipeline has.
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedTransport for HttpTransport {
    async fn get(&self, url: &str) -> Result<FeedResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(FeedResponse { status, body })
    }
}
