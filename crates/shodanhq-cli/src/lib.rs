//! # shodanhq-cli
//!
//! Command-line interface for the Shodan host search API.
//!
//! ## Features
//!
//! - **Host lookup**: every banner the service recorded for one address
//! - **Search**: paged host search with `--offset` / `--limit`
//! - **Multiple output formats**: Pretty tables, JSON, CSV, YAML
//! - **Persistent configuration**: API key and defaults in a TOML file

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
