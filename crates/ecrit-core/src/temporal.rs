//! # Temporal Types — Offset-Preserving Timestamps
//!
//! Defines `Timestamp`, the absolute instant a symbolic period boundary
//! resolves to.
//!
//! Date constants are authored in Kyiv local time with an explicit offset
//! (`2020-12-04T00:00:00+02:00`). The timeline shows the value as written,
//! so the offset is kept rather than normalised to `Z`. Equality and
//! ordering are by instant: `2020-12-04T00:00:00+02:00` equals
//! `2020-12-03T22:00:00Z`.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// An absolute instant carrying the UTC offset it was authored with.
///
/// # Construction
///
/// - [`Timestamp::parse()`]: from an RFC 3339 string with any offset.
/// - [`Timestamp::from_utc()`]: from a `DateTime<Utc>`, rendered with `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// Parse a timestamp from an RFC 3339 / ISO 8601 string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Timestamp`] if the string is not valid RFC 3339
    /// (a bare date such as `2020-12-04` is rejected).
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        DateTime::parse_from_rfc3339(s)
            .map(Self)
            .map_err(|e| CoreError::Timestamp {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt.fixed_offset())
    }

    /// Access the inner offset-aware datetime.
    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// The same instant expressed in UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Render as RFC 3339 with the authored offset, seconds precision
    /// (e.g. `2020-12-04T00:00:00+02:00`). A zero offset renders as `Z`.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}
