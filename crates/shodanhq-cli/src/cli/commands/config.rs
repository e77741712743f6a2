//! `shodanhq config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::{self, OutputFormat};

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(ctx, &key, &value),
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let mut config = Config::load(&ctx.config_path)?;

    // Never print the full key
    config.api_key = config.masked_api_key();

    match ctx.output_format {
        OutputFormat::Json | OutputFormat::Yaml => {
            output::print_structured(&config, ctx.output_format)?;
        }
        _ => {
            println!("{}", "Current Configuration:".bold());
            println!();

            let api_display = config
                .api_key
                .unwrap_or_else(|| "(not set)".dimmed().to_string());
            println!("  {} {}", "api_key:".bold(), api_display);

            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );

            let base_url = config
                .base_url
                .unwrap_or_else(|| format!("{} (default)", shodanhq::DEFAULT_BASE_URL));
            println!("  {} {}", "base_url:".bold(), base_url);
        }
    }

    Ok(())
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load(&ctx.config_path)?;

    match key {
        "api_key" => {
            config.api_key = Some(value.to_string());
            println!("{} API key set.", "Success:".green().bold());
        }
        "output_format" | "output" => {
            config.output_format = Some(value.parse()?);
            println!("{} Output format set to {}.", "Success:".green().bold(), value.cyan());
        }
        "base_url" => {
            config.base_url = Some(value.to_string());
            println!("{} Base URL set to {}.", "Success:".green().bold(), value.cyan());
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 api_key          - Your Shodan API key\n  \
                 output_format    - Default output format (pretty/json/csv/yaml)\n  \
                 base_url         - API base URL",
                key
            );
        }
    }

    config.save(&ctx.config_path)?;

    Ok(())
}
