use super::{Host, HostShape};
use crate::raw::{as_record, RawRecord, RecordExt};
use crate::{Result, ShodanError};
use serde::Serialize;

/// One page of results from the `search` endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Total number of matches known to the service, across all pages
    pub total: u64,

    /// Hosts on this page, in the order returned
    pub hosts: Vec<Host>,
}

impl SearchResult {
    /// Map a search response. Every match is decoded as a simple-shape host
    /// and a single bad match fails the whole result.
    pub fn from_record(record: &RawRecord) -> Result<Self> {
        let total = record.integer("total")?;
        let total = u64::try_from(total).map_err(|_| ShodanError::MalformedRecord {
            field: "total".to_string(),
            reason: format!("is negative: {total}"),
        })?;

        let hosts = record
            .list("matches")?
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let path = format!("matches[{i}]");
                let entry = as_record(item, &path)?;
                Host::from_record(entry, HostShape::Simple).map_err(|e| e.within(&path))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { total, hosts })
    }

    /// Returns true if there are no results on this page
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Returns the number of hosts on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    /// Returns true if the service knows of more matches than were returned
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.total > self.hosts.len() as u64
    }
}

impl TryFrom<&RawRecord> for SearchResult {
    type Error = ShodanError;

    fn try_from(record: &RawRecord) -> Result<Self> {
        Self::from_record(record)
    }
}
