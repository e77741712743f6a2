//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Command-line interface for the Shodan host search API
///
/// Look up the banners recorded for an IP address, or search for hosts
/// matching a query.
#[derive(Parser, Debug)]
#[command(name = "shodanhq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Shodan API key (or set SHODAN_API_KEY env var)
    #[arg(short = 'k', long, env = "SHODAN_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Use this configuration file instead of the default location
    #[arg(long, env = "SHODANHQ_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up the banners recorded for an IP address
    Host(HostArgs),

    /// Search for hosts matching a query
    Search(SearchArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Host command
// ============================================================================

#[derive(Args, Debug)]
pub struct HostArgs {
    /// IP address to look up
    pub ip: String,
}

// ============================================================================
// Search command
// ============================================================================

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (e.g., "apache country:DE port:80")
    pub query: String,

    /// Starting position of the result cursor
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Number of hosts to return (max. 100)
    #[arg(short, long, default_value_t = shodanhq::DEFAULT_LIMIT)]
    pub limit: u32,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (api_key, output_format, base_url)
        key: String,
        /// Value to set
        value: String,
    },

    /// Print the configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_defaults() {
        let cli = Cli::try_parse_from(["shodanhq", "search", "apache"]).unwrap();
        let Commands::Search(args) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(args.query, "apache");
        assert_eq!(args.offset, 0);
        assert_eq!(args.limit, 50);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "shodanhq", "host", "8.8.8.8", "--output", "json", "-k", "abc",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.api_key.as_deref(), Some("abc"));
    }
}
