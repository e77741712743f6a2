//! Core types and response mapping for the Shodan host search API.
//!
//! This crate turns the loosely-typed JSON returned by the service into
//! strongly-typed values:
//!
//! - **Raw records**: [`RawRecord`] plus the checked accessors in [`RecordExt`]
//! - **Types**: [`Host`], [`ServiceBanner`], [`HostLocation`], [`SearchResult`]
//! - **Errors**: [`ShodanError`] covering remote, mapping and transport failures
//!
//! Mapping is synchronous and pure; it performs no I/O and no logging.
//!
//! # Example
//!
//! ```rust
//! use shodanhq_core::{parse_record, Host, HostShape};
//!
//! let record = parse_record(r#"{
//!     "ip": "192.0.2.10",
//!     "hostnames": [],
//!     "port": 22,
//!     "updated": "14.06.2012",
//!     "data": "SSH-2.0-OpenSSH_5.9"
//! }"#)?;
//!
//! let host = Host::from_record(&record, HostShape::Simple)?;
//! assert_eq!(host.ports(), vec![22]);
//! # Ok::<(), shodanhq_core::ShodanError>(())
//! ```

#![doc(html_root_url = "https://docs.rs/shodanhq-core/0.3.0")]

mod error;
pub mod raw;
pub mod types;

pub use error::{Result, ShodanError};
pub use raw::{as_record, parse_record, RawRecord, RecordExt};
pub use types::*;
