//! `shodanhq host` - Look up the banners recorded for an IP address.

use anyhow::Result;
use colored::Colorize;
use shodanhq::Host;
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::cli::args::HostArgs;
use crate::output::{self, OutputFormat};

#[derive(Tabled)]
struct BannerRow {
    #[tabled(rename = "Port")]
    port: i64,
    #[tabled(rename = "Seen")]
    seen: String,
    #[tabled(rename = "Banner")]
    banner: String,
}

pub async fn execute(ctx: Context, args: HostArgs) -> Result<()> {
    let client = ctx.client()?;
    let host = client.lookup_host_str(&args.ip).await?;

    match ctx.output_format {
        OutputFormat::Json | OutputFormat::Yaml => {
            output::print_structured(&host, ctx.output_format)?;
        }
        OutputFormat::Csv => {
            let hosts = [host];
            output::write_csv(std::io::stdout().lock(), &output::banner_rows(&hosts))?;
        }
        OutputFormat::Pretty => print_host_pretty(&host),
    }

    Ok(())
}

fn print_host_pretty(host: &Host) {
    // Header
    println!("{} {}", "Host:".bold(), host.ip.to_string().cyan().bold());
    println!();

    // Hostnames
    if !host.hostnames.is_empty() {
        println!("  {} {}", "Hostnames:".bold(), host.hostnames.join(", "));
    }

    // Location
    let location = output::location_label(&host.location);
    if !location.is_empty() {
        println!("  {} {}", "Location:".bold(), location);
    }

    // Banners table
    if host.banners.is_empty() {
        println!();
        println!("{}", "No banners recorded for this host.".dimmed());
        return;
    }

    println!();
    println!("{}", "Banners:".bold().underline());

    let rows: Vec<BannerRow> = host
        .banners
        .iter()
        .map(|b| BannerRow {
            port: b.port,
            seen: b.date_string(),
            banner: output::banner_preview(&b.banner, 60),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
}
