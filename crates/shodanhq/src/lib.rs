//! Rust client for the Shodan host search API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use shodanhq::ShodanClient;
//!
//! #[tokio::main]
//! async fn main() -> shodanhq::Result<()> {
//!     let client = ShodanClient::new("your-api-key")?;
//!
//!     // Everything known about one host
//!     let host = client.lookup_host_str("217.140.75.46").await?;
//!     println!("Hostnames: {:?}", host.hostnames);
//!     for banner in &host.banners {
//!         println!("{} ({}): {}", banner.port, banner.date_string(), banner.banner);
//!     }
//!
//!     // One page of search results
//!     let results = client.search("apache country:DE").limit(10).send().await?;
//!     println!("Total: {} results", results.total);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/shodanhq/0.3.0")]

// Re-export core types
pub use shodanhq_core::*;

// Re-export client
pub use shodanhq_client::{
    HttpTransport, RateLimitConfig, RawResponse, RetryConfig, SearchRequestBuilder,
    ShodanClient, ShodanClientBuilder, Transport, DEFAULT_BASE_URL, DEFAULT_LIMIT,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
