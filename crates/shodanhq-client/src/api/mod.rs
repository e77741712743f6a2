//! API endpoint modules.
//!
//! The legacy API exposes two functions, `host` and `search`; both are
//! implemented as methods on [`ShodanClient`](crate::ShodanClient).

mod host;
mod search;

pub use search::{SearchRequestBuilder, DEFAULT_LIMIT};
