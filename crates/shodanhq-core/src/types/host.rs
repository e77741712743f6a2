use super::{HostLocation, ServiceBanner};
use crate::raw::{as_record, RawRecord, RecordExt};
use crate::{Result, ShodanError};
use serde::Serialize;
use serde_json::Value;
use std::net::IpAddr;

/// Which endpoint encoding a [`Host`] was built from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostShape {
    /// Direct lookup: `data` is a list of dated banner records
    #[default]
    Full,
    /// Search match: `data` is one banner, `port` and `updated` are siblings
    Simple,
}

/// A host and everything the service has observed on it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Host {
    /// IP address
    pub ip: IpAddr,

    /// Hostnames, in the order the service reported them
    pub hostnames: Vec<String>,

    /// Banners, in the order the service reported them
    pub banners: Vec<ServiceBanner>,

    /// Geographic location
    pub location: HostLocation,

    /// Encoding the record was declared to use by the caller
    pub shape: HostShape,
}

impl Host {
    /// Map a host record.
    ///
    /// `shape` only tags the result. Banners are decoded according to the
    /// actual JSON type of `data`, so a tag and payload that disagree still
    /// produce a host.
    pub fn from_record(record: &RawRecord, shape: HostShape) -> Result<Self> {
        let ip = parse_ip(record.text("ip")?)?;

        let hostnames = record
            .list("hostnames")?
            .iter()
            .enumerate()
            .map(|(i, name)| {
                name.as_str()
                    .map(String::from)
                    .ok_or_else(|| ShodanError::MalformedRecord {
                        field: format!("hostnames[{i}]"),
                        reason: "is not text".to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let banners = BannerData::classify(record)?.into_banners(record)?;
        let location = HostLocation::from_record(record)?;

        Ok(Self {
            ip,
            hostnames,
            banners,
            location,
            shape,
        })
    }

    /// Returns true if this host came from a search result
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.shape == HostShape::Simple
    }

    /// Ports with an observed banner, in banner order
    #[must_use]
    pub fn ports(&self) -> Vec<i64> {
        self.banners.iter().map(|b| b.port).collect()
    }

    /// First banner observed on `port`
    #[must_use]
    pub fn banner_for_port(&self, port: i64) -> Option<&ServiceBanner> {
        self.banners.iter().find(|b| b.port == port)
    }
}

fn parse_ip(value: &str) -> Result<IpAddr> {
    value.parse().map_err(|_| ShodanError::MalformedRecord {
        field: "ip".to_string(),
        reason: format!("is not a valid IP address: {value:?}"),
    })
}

/// The two encodings of a host's `data` field
enum BannerData<'a> {
    /// One record per banner, each with its own port and timestamp
    Entries(&'a [Value]),
    /// A single banner whose port and date sit on the host record
    Single(&'a str),
}

impl<'a> BannerData<'a> {
    fn classify(record: &'a RawRecord) -> Result<Self> {
        match record.field("data") {
            Some(Value::Array(items)) => Ok(Self::Entries(items)),
            Some(Value::String(text)) => Ok(Self::Single(text)),
            Some(_) => Err(ShodanError::MalformedRecord {
                field: "data".to_string(),
                reason: "is neither a list nor text".to_string(),
            }),
            None => Err(ShodanError::missing("data")),
        }
    }

    fn into_banners(self, record: &RawRecord) -> Result<Vec<ServiceBanner>> {
        match self {
            Self::Entries(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let path = format!("data[{i}]");
                    let entry = as_record(item, &path)?;
                    ServiceBanner::from_record(entry).map_err(|e| e.within(&path))
                })
                .collect(),
            Self::Single(text) => Ok(vec![ServiceBanner::new(
                record.integer("port")?,
                text,
                record.text("updated")?,
            )?]),
        }
    }
}
