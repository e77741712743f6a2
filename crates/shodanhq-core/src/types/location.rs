use crate::raw::{RawRecord, RecordExt};
use crate::{Result, ShodanError};
use serde::Serialize;

/// Geographic location of a host
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HostLocation {
    /// Two-letter country code (ISO 3166-1 alpha-2)
    pub country_code: Option<String>,

    /// Full country name
    pub country_name: Option<String>,

    /// City name
    pub city: Option<String>,

    /// Latitude coordinate, 0.0 when unknown
    pub latitude: f64,

    /// Longitude coordinate, 0.0 when unknown
    pub longitude: f64,
}

impl HostLocation {
    /// Extract the location fields that live at the top level of a host record.
    ///
    /// Every field is optional. `latitude` and `longitude` always come as a
    /// pair, so a record carrying only `latitude` is malformed.
    pub fn from_record(record: &RawRecord) -> Result<Self> {
        let (latitude, longitude) = if record.has("latitude") {
            if !record.has("longitude") {
                return Err(ShodanError::MalformedRecord {
                    field: "longitude".to_string(),
                    reason: "is missing while `latitude` is present".to_string(),
                });
            }
            (record.number("latitude")?, record.number("longitude")?)
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            country_code: record.opt_text("country_code")?.map(String::from),
            country_name: record.opt_text("country_name")?.map(String::from),
            city: record.opt_text("city")?.map(String::from),
            latitude,
            longitude,
        })
    }

    /// Returns true if both coordinates are non-zero.
    ///
    /// Zero doubles as "unknown", so a host sitting exactly on the equator
    /// or the prime meridian reports no coordinates. This is a known
    /// approximation inherited from the service's encoding.
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }

    /// Returns the coordinates as a tuple if available
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.has_coordinates()
            .then_some((self.latitude, self.longitude))
    }
}
