//! Checked access to undecoded JSON records.
//!
//! Every response from the service is first decoded into a [`RawRecord`]
//! and then mapped into the domain types. The [`RecordExt`] accessors
//! replace ad-hoc casts: each one either returns the value in the
//! requested shape or a [`ShodanError::MalformedRecord`] naming the field.

use crate::{Result, ShodanError};
use serde_json::{Map, Value};

/// An untyped JSON object as returned by the service
pub type RawRecord = Map<String, Value>;

/// Decode a response body into a [`RawRecord`].
///
/// The body must be a JSON object; arrays and scalars are rejected.
pub fn parse_record(body: &str) -> Result<RawRecord> {
    match serde_json::from_str(body)? {
        Value::Object(map) => Ok(map),
        _ => Err(ShodanError::wrong_type("<root>", "an object")),
    }
}

/// Interpret a JSON value as a nested record.
pub fn as_record<'a>(value: &'a Value, field: &str) -> Result<&'a RawRecord> {
    value
        .as_object()
        .ok_or_else(|| ShodanError::wrong_type(field, "an object"))
}

/// Fallible, typed field extraction on a [`RawRecord`].
///
/// `null` is treated the same as an absent key.
pub trait RecordExt {
    /// The value under `key`, or `None` if absent or null
    fn field(&self, key: &str) -> Option<&Value>;

    /// Required text field
    fn text(&self, key: &str) -> Result<&str> {
        let value = self.field(key).ok_or_else(|| ShodanError::missing(key))?;
        value
            .as_str()
            .ok_or_else(|| ShodanError::wrong_type(key, "text"))
    }

    /// Optional text field; present values must still be text
    fn opt_text(&self, key: &str) -> Result<Option<&str>> {
        self.field(key)
            .map(|v| v.as_str().ok_or_else(|| ShodanError::wrong_type(key, "text")))
            .transpose()
    }

    /// Required integer field
    fn integer(&self, key: &str) -> Result<i64> {
        let value = self.field(key).ok_or_else(|| ShodanError::missing(key))?;
        value
            .as_i64()
            .ok_or_else(|| ShodanError::wrong_type(key, "an integer"))
    }

    /// Required numeric field, integer or floating point
    fn number(&self, key: &str) -> Result<f64> {
        let value = self.field(key).ok_or_else(|| ShodanError::missing(key))?;
        value
            .as_f64()
            .ok_or_else(|| ShodanError::wrong_type(key, "a number"))
    }

    /// Required list field
    fn list(&self, key: &str) -> Result<&[Value]> {
        let value = self.field(key).ok_or_else(|| ShodanError::missing(key))?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| ShodanError::wrong_type(key, "a list"))
    }

    /// Returns true if `key` is present and not null
    fn has(&self, key: &str) -> bool {
        self.field(key).is_some()
    }
}

impl RecordExt for RawRecord {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_null())
    }
}
