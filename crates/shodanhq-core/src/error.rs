use thiserror::Error;

/// Result type alias for Shodan operations
pub type Result<T> = std::result::Result<T, ShodanError>;

/// Errors that can occur when querying the Shodan API or mapping its responses
#[derive(Error, Debug)]
pub enum ShodanError {
    /// The service reported a failure inside the response envelope
    #[error("remote error: {0}")]
    Remote(String),

    /// A field was missing or had the wrong shape while mapping a record
    #[error("malformed record: field `{field}` {reason}")]
    MalformedRecord {
        /// Name of the offending field
        field: String,
        /// What was wrong with it
        reason: String,
    },

    /// A timestamp did not match `dd.mm.yyyy`
    #[error("malformed date: {0:?} (expected dd.mm.yyyy)")]
    MalformedDate(String),

    /// Non-success HTTP status without an `error` payload
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Response body
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Response body was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid IP address format
    #[error("invalid IP address: {0}")]
    InvalidIp(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ShodanError {
    pub(crate) fn missing(field: &str) -> Self {
        Self::MalformedRecord {
            field: field.to_string(),
            reason: "is missing".to_string(),
        }
    }

    pub(crate) fn wrong_type(field: &str, expected: &str) -> Self {
        Self::MalformedRecord {
            field: field.to_string(),
            reason: format!("is not {expected}"),
        }
    }

    /// Qualify the field of a mapping error with the path of its parent.
    #[must_use]
    pub fn within(self, parent: &str) -> Self {
        match self {
            Self::MalformedRecord { field, reason } => Self::MalformedRecord {
                field: format!("{parent}.{field}"),
                reason,
            },
            other => other,
        }
    }

    /// Returns true if the error is a transport failure worth retrying
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Connection(_))
    }

    /// Returns true if the service itself reported the failure
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Returns true if a response could not be mapped into the domain model
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. } | Self::MalformedDate(_) | Self::Json(_)
        )
    }

    /// Returns the HTTP status code if this is an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
