//! HTTP client for the Shodan host search API.
//!
//! This crate provides the main [`ShodanClient`], which fetches raw records
//! through a [`Transport`] and maps them with `shodanhq-core`.

#![doc(html_root_url = "https://docs.rs/shodanhq-client/0.3.0")]

mod client;
mod config;
pub mod api;
pub mod transport;

pub use api::{SearchRequestBuilder, DEFAULT_LIMIT};
pub use client::{ShodanClient, ShodanClientBuilder, DEFAULT_BASE_URL};
pub use config::*;
pub use shodanhq_core::{Result, ShodanError};
pub use transport::{HttpTransport, RawResponse, Transport};
