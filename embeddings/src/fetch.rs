//! HTTP fetch capability used to reach the embedding provider.
//!
//! The client never talks to the network directly; it hands a [`FetchRequest`]
//! to whatever [`Fetcher`] the host injected. Connection pooling, timeouts and
//! credentials all live on the fetcher side.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// An outbound JSON POST.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    /// Absolute URL of the endpoint.
    pub url: String,

    /// Request headers, in the order they should be sent.
    pub headers: Vec<(String, String)>,

    /// JSON request body.
    pub body: Value,
}

impl FetchRequest {
    /// Create a request with no headers.
    pub fn new(url: impl Into<String>, body: Value) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            body,
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and parsed body of a provider response.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,

    /// Parsed JSON body, or `Value::Null` when the payload is empty or not JSON.
    pub body: Value,
}

impl FetchResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }
}

/// Capability to perform a single HTTP POST.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Send the request and return the status plus parsed body.
    ///
    /// Only transport failures are errors; any HTTP status is a response.
    async fn post_json(&self, request: FetchRequest) -> Result<FetchResponse>;
}

/// [`Fetcher`] backed by a pooled `reqwest` client.
pub struct ReqwestFetcher {
    /// HTTP client.
    client: reqwest::Client,

    /// Bearer token supplied by the host.
    api_key: Option<String>,
}

impl ReqwestFetcher {
    /// Create a fetcher with reqwest's default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: None,
        }
    }

    /// Create a fetcher whose requests give up after `timeout`.
    pub fn new_with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: None,
        })
    }

    /// Set the bearer token sent with every request.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    async fn post_json(&self, request: FetchRequest) -> Result<FetchResponse> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.json(&request.body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        debug!("POST {} returned {status} ({} bytes)", request.url, text.len());

        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Ok(FetchResponse { status, body })
    }
}
