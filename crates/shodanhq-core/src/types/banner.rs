use crate::raw::{RawRecord, RecordExt};
use crate::{Result, ShodanError};
use chrono::NaiveDate;
use serde::Serialize;

/// Wire format of banner timestamps
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A service response captured on one port
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceBanner {
    /// Port number; not range-checked
    pub port: i64,

    /// Raw protocol response
    pub banner: String,

    /// Day the banner was collected
    pub timestamp: NaiveDate,
}

impl ServiceBanner {
    /// Create a banner from its port, text and a `dd.mm.yyyy` date.
    pub fn new(port: i64, banner: impl Into<String>, date: &str) -> Result<Self> {
        Ok(Self {
            port,
            banner: banner.into(),
            timestamp: parse_date(date)?,
        })
    }

    /// Map one element of a full-shape `data` list.
    pub(crate) fn from_record(record: &RawRecord) -> Result<Self> {
        Self::new(
            record.integer("port")?,
            record.text("banner")?,
            record.text("timestamp")?,
        )
    }

    /// The timestamp rendered back in wire format
    #[must_use]
    pub fn date_string(&self) -> String {
        self.timestamp.format(DATE_FORMAT).to_string()
    }
}

/// Parse a strict `dd.mm.yyyy` calendar date.
///
/// chrono alone accepts unpadded fields, so the shape is checked first.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(ShodanError::MalformedDate(value.to_string()));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ShodanError::MalformedDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date("05.11.2012").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2012, 11, 5).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_impossible_day() {
        assert!(matches!(
            parse_date("31.02.2020"),
            Err(ShodanError::MalformedDate(s)) if s == "31.02.2020"
        ));
    }

    #[test]
    fn test_parse_date_is_strict() {
        for bad in [
            "5.11.2012",
            "05.11.12",
            "2012-11-05",
            "05/11/2012",
            "05.11.2012 ",
            "",
            "aa.bb.cccc",
        ] {
            assert!(
                matches!(parse_date(bad), Err(ShodanError::MalformedDate(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_new_banner() {
        let banner = ServiceBanner::new(21, "220 FTP ready", "01.03.2011").unwrap();
        assert_eq!(banner.port, 21);
        assert_eq!(banner.banner, "220 FTP ready");
        assert_eq!(banner.date_string(), "01.03.2011");
    }

    #[test]
    fn test_out_of_range_port_is_kept() {
        let banner = ServiceBanner::new(70000, "", "01.01.2010").unwrap();
        assert_eq!(banner.port, 70000);
    }
}
