//! Output formatting for different formats.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use shodanhq::{Host, HostLocation};
use std::io::Write;
use std::str::FromStr;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed tables with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output, one row per banner
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Print any serializable value as JSON or YAML.
pub fn print_structured<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        _ => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

/// One CSV line: a single banner and the host it was seen on
#[derive(Debug, Serialize)]
pub struct BannerRow<'a> {
    pub ip: String,
    pub hostnames: String,
    pub port: i64,
    pub timestamp: String,
    pub country_code: &'a str,
    pub city: &'a str,
    pub banner: &'a str,
}

/// Flatten hosts into one row per banner
pub fn banner_rows(hosts: &[Host]) -> Vec<BannerRow<'_>> {
    hosts
        .iter()
        .flat_map(|host| {
            host.banners.iter().map(move |banner| BannerRow {
                ip: host.ip.to_string(),
                hostnames: host.hostnames.join(";"),
                port: banner.port,
                timestamp: banner.date_string(),
                country_code: host.location.country_code.as_deref().unwrap_or(""),
                city: host.location.city.as_deref().unwrap_or(""),
                banner: &banner.banner,
            })
        })
        .collect()
}

/// Write banner rows as CSV; the header precedes the first row
pub fn write_csv<W: Write>(writer: W, rows: &[BannerRow<'_>]) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// First non-blank line of a banner, cut to `max` characters
pub fn banner_preview(banner: &str, max: usize) -> String {
    let line = banner
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");

    if line.chars().count() > max {
        let cut: String = line.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        line.to_string()
    }
}

/// "City, Country (lat, lon)" with whatever parts are known
pub fn location_label(location: &HostLocation) -> String {
    let place = [location.city.as_deref(), location.country_name.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    match (place.is_empty(), location.coordinates()) {
        (true, None) => String::new(),
        (true, Some((lat, lon))) => format!("({lat:.4}, {lon:.4})"),
        (false, None) => place,
        (false, Some((lat, lon))) => format!("{place} ({lat:.4}, {lon:.4})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shodanhq::{parse_record, HostShape};

    fn sample_host() -> Host {
        let record = parse_record(
            r#"{"ip": "192.0.2.1", "hostnames": ["a.example", "b.example"],
                "city": "Lyon", "country_name": "France",
                "data": [
                    {"port": 80, "banner": "HTTP/1.0 200 OK\r\nServer: x, y", "timestamp": "03.04.2012"},
                    {"port": 25, "banner": "220 mail", "timestamp": "04.04.2012"}
                ]}"#,
        )
        .unwrap();
        Host::from_record(&record, HostShape::Full).unwrap()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert_eq!("YML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_banner_preview() {
        assert_eq!(banner_preview("\r\n  SSH-2.0-OpenSSH\r\nmore", 40), "SSH-2.0-OpenSSH");
        assert_eq!(banner_preview("abcdefghij", 8), "abcde...");
        assert_eq!(banner_preview("", 8), "");
    }

    #[test]
    fn test_location_label() {
        let mut loc = HostLocation {
            city: Some("Lyon".into()),
            country_name: Some("France".into()),
            ..HostLocation::default()
        };
        assert_eq!(location_label(&loc), "Lyon, France");

        loc.latitude = 45.75;
        loc.longitude = 4.85;
        assert_eq!(location_label(&loc), "Lyon, France (45.7500, 4.8500)");

        assert_eq!(location_label(&HostLocation::default()), "");
    }

    #[test]
    fn test_csv_quotes_banners() {
        let hosts = vec![sample_host()];
        let rows = banner_rows(&hosts);
        assert_eq!(rows.len(), 2);

        let mut out = Vec::new();
        write_csv(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("ip,hostnames,port,timestamp,country_code,city,banner")
        );
        assert!(text.contains("\"HTTP/1.0 200 OK\r\nServer: x, y\""));
        assert!(text.contains("192.0.2.1,a.example;b.example,25,04.04.2012,,Lyon,220 mail"));
    }
}
