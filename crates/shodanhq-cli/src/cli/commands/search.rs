//! `shodanhq search` - Search for hosts matching a query.

use anyhow::Result;
use colored::Colorize;
use shodanhq::SearchResult;
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::cli::args::SearchArgs;
use crate::output::{self, OutputFormat};

#[derive(Tabled)]
struct SearchRow {
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Port")]
    port: String,
    #[tabled(rename = "Updated")]
    updated: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Banner")]
    banner: String,
}

pub async fn execute(ctx: Context, args: SearchArgs) -> Result<()> {
    let client = ctx.client()?;

    let results = client
        .search(&args.query)
        .offset(args.offset)
        .limit(args.limit)
        .send()
        .await?;

    match ctx.output_format {
        OutputFormat::Json | OutputFormat::Yaml => {
            output::print_structured(&results, ctx.output_format)?;
        }
        OutputFormat::Csv => {
            output::write_csv(std::io::stdout().lock(), &output::banner_rows(&results.hosts))?;
        }
        OutputFormat::Pretty => print_search_pretty(&results, &args),
    }

    Ok(())
}

fn print_search_pretty(results: &SearchResult, args: &SearchArgs) {
    // Header
    println!("{} {}", "Total Results:".bold(), results.total.to_string().cyan());
    println!("{} {}", "Query:".bold(), args.query.dimmed());
    println!();

    if results.is_empty() {
        println!("{}", "No hosts on this page.".dimmed());
        return;
    }

    println!("{}", "Results:".bold().underline());

    // Search matches carry a single banner each
    let rows: Vec<SearchRow> = results
        .hosts
        .iter()
        .map(|host| {
            let first = host.banners.first();
            SearchRow {
                ip: host.ip.to_string(),
                port: first.map(|b| b.port.to_string()).unwrap_or_default(),
                updated: first.map(|b| b.date_string()).unwrap_or_default(),
                location: output::location_label(&host.location),
                banner: first
                    .map(|b| output::banner_preview(&b.banner, 40))
                    .unwrap_or_default(),
            }
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");

    // Paging tip
    let next = u64::from(args.offset) + results.len() as u64;
    if results.total > next {
        println!();
        println!(
            "{}",
            format!(
                "Showing {}-{} of {}. Use --offset {next} to see more.",
                u64::from(args.offset) + 1,
                next,
                results.total
            )
            .dimmed()
        );
    }
}
