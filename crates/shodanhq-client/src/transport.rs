//! Raw HTTP transport.
//!
//! [`ShodanClient`](crate::ShodanClient) never talks to reqwest directly; it
//! goes through a [`Transport`], so tests can swap in an in-memory double.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use shodanhq_core::{Result, ShodanError};
use std::time::Duration;

/// Status and body of a completed GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body decoded as UTF-8
    pub body: String,
}

impl RawResponse {
    /// Create a response
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for a 2xx status
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Issues GET requests on behalf of the client
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and return its status and body.
    ///
    /// Non-2xx statuses are not errors at this level; only failures to
    /// complete the exchange are.
    async fn get(&self, url: &str) -> Result<RawResponse>;
}

/// Default [`Transport`] backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
    timeout: Duration,
}

impl HttpTransport {
    /// Build a transport with the given timeout and User-Agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .gzip(true)
            .build()
            .map_err(|e| ShodanError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, timeout })
    }

    fn map_error(&self, err: &reqwest::Error) -> ShodanError {
        if err.is_timeout() {
            ShodanError::Timeout(self.timeout.as_secs())
        } else if err.is_connect() {
            ShodanError::Connection(err.to_string())
        } else {
            ShodanError::Http(err.to_string())
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_error(&e))?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| self.map_error(&e))?;
        let body = String::from_utf8(bytes.to_vec())
            .map_err(|e| ShodanError::Http(format!("response body is not UTF-8: {e}")))?;

        Ok(RawResponse { status, body })
    }
}
