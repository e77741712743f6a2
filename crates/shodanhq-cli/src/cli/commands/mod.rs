//! Command implementations.

pub mod config;
pub mod host;
pub mod search;

use std::path::PathBuf;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Shodan API key
    pub api_key: Option<String>,

    /// API base URL override
    pub base_url: Option<String>,

    /// Output format
    pub output_format: OutputFormat,

    /// Configuration file in use
    pub config_path: PathBuf,
}

impl Context {
    /// Get the API key, returning an error if not set.
    pub fn require_api_key(&self) -> anyhow::Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "API key required.\n\n\
                     Set it with one of:\n  \
                     1. --api-key <KEY>\n  \
                     2. SHODAN_API_KEY environment variable\n  \
                     3. shodanhq config set api_key <KEY>"
                )
            })
    }

    /// Create a Shodan client with the configured API key and base URL.
    pub fn client(&self) -> anyhow::Result<shodanhq::ShodanClient> {
        let key = self.require_api_key()?;
        let mut builder = shodanhq::ShodanClient::builder(key);
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url);
        }
        Ok(builder.build()?)
    }
}
