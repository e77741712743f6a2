//! Main Shodan API client implementation.

use crate::config::{RateLimitConfig, RetryConfig};
use crate::transport::{HttpTransport, RawResponse, Transport};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use serde_json::Value;
use shodanhq_core::{parse_record, RawRecord, Result, ShodanError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The legacy Shodan API base URL
pub const DEFAULT_BASE_URL: &str = "http://beta.shodanhq.com/api/";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

type Limiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Main Shodan API client
#[derive(Clone)]
pub struct ShodanClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    api_key: String,
    base_url: String,
    retry_config: RetryConfig,
    rate_limiter: Option<Limiter>,
}

impl std::fmt::Debug for ShodanClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShodanClient")
            .field("base_url", &self.inner.base_url)
            .field("retry_config", &self.inner.retry_config)
            .field("rate_limited", &self.inner.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

impl ShodanClient {
    /// Create a new client with the given API key using default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ShodanClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> ShodanClientBuilder {
        ShodanClientBuilder::new(api_key)
    }

    /// Base URL requests are issued against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Call an API function and return the decoded top-level record.
    ///
    /// A record carrying an `error` key is turned into
    /// [`ShodanError::Remote`] before anything else is looked at.
    pub(crate) async fn send_request(
        &self,
        api_func: &str,
        args: &[(&str, &str)],
    ) -> Result<RawRecord> {
        let url = self.build_url(api_func, args);
        debug!(api = api_func, ?args, "GET request");

        let response = self.get_with_retry(&url).await?;
        debug!(api = api_func, status = response.status, "response received");

        decode_response(response)
    }

    async fn get_with_retry(&self, url: &str) -> Result<RawResponse> {
        let retry = &self.inner.retry_config;
        let mut attempt = 0;

        loop {
            if let Some(limiter) = &self.inner.rate_limiter {
                limiter.until_ready().await;
            }

            match self.inner.transport.get(url).await {
                Err(e) if e.is_retryable() && attempt < retry.max_retries => {
                    let backoff = retry.backoff_for(attempt);
                    warn!(error = %e, attempt, ?backoff, "transport failure, retrying");
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    /// Build `{base_url}{api_func}?{args}&key={api_key}`
    fn build_url(&self, api_func: &str, args: &[(&str, &str)]) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in args {
            query.append_pair(key, value);
        }
        query.append_pair("key", &self.inner.api_key);

        format!("{}{}?{}", self.inner.base_url, api_func, query.finish())
    }
}

fn decode_response(response: RawResponse) -> Result<RawRecord> {
    let success = response.is_success();

    match parse_record(&response.body) {
        Ok(record) if record.contains_key("error") => Err(remote_error(&record["error"])),
        Ok(record) if success => Ok(record),
        Err(e) if success => Err(e),
        _ => Err(ShodanError::Api {
            code: response.status,
            message: response.body,
        }),
    }
}

fn remote_error(value: &Value) -> ShodanError {
    let message = value
        .as_str()
        .map_or_else(|| value.to_string(), String::from);
    ShodanError::Remote(message)
}

/// Builder for configuring a [`ShodanClient`]
pub struct ShodanClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    retry_config: RetryConfig,
    rate_limit: Option<RateLimitConfig>,
    transport: Option<Arc<dyn Transport>>,
}

impl ShodanClientBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("shodanhq-rust/{}", env!("CARGO_PKG_VERSION")),
            retry_config: RetryConfig::default(),
            rate_limit: None,
            transport: None,
        }
    }

    /// Set the base URL (useful for testing). A trailing `/` is added if missing.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set retry configuration
    #[must_use]
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Throttle outgoing requests
    #[must_use]
    pub fn rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.rate_limit = Some(config);
        self
    }

    /// Use a custom transport instead of the default reqwest one.
    /// `timeout` and `user_agent` are ignored in that case.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ShodanClient> {
        if self.api_key.trim().is_empty() {
            return Err(ShodanError::Config("API key must not be empty".to_string()));
        }

        let mut base_url = self.base_url;
        url::Url::parse(&base_url)
            .map_err(|e| ShodanError::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(self.timeout, &self.user_agent)?),
        };

        let rate_limiter = self.rate_limit.map(|config| {
            let quota = Quota::per_second(config.requests_per_second)
                .allow_burst(config.burst_size);
            RateLimiter::direct(quota)
        });

        Ok(ShodanClient {
            inner: Arc::new(ClientInner {
                transport,
                api_key: self.api_key,
                base_url,
                retry_config: self.retry_config,
                rate_limiter,
            }),
        })
    }
}
