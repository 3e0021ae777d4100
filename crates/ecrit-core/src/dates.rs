//! # Date-Constant Resolver
//!
//! Period boundaries in procedure documents are written as symbolic names
//! (`RELEASE_ECRITERIA_ARTICLE_17`) rather than literal dates. This module
//! holds the table mapping those names to absolute timestamps and the pure
//! lookup that turns a boundary into a [`ResolvedDate`].
//!
//! ## Process-Wide Table
//!
//! The table is static configuration. [`DateConstants::install()`] sets it
//! once at startup; every later call to [`DateConstants::global()`] reads
//! the same table. Without an install, the built-in table is used.
//!
//! Resolution never fails. A missing name is `Unbounded`, a name that is not
//! in the table is `Unknown`. Callers that want a diagnostic log it at their
//! own boundary.

use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::CoreError;
use crate::temporal::Timestamp;

/// Built-in symbolic date constants.
pub const BUILTIN_DATE_CONSTANTS: &[(&str, &str)] = &[
    ("RELEASE_ECRITERIA_ARTICLE_17", "2020-12-04T00:00:00+02:00"),
    ("CRITERIA_ARTICLE_16_REQUIRED", "2024-12-03T00:00:00+02:00"),
];

static INSTALLED: OnceLock<DateConstants> = OnceLock::new();

/// Outcome of resolving a period boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ResolvedDate {
    /// The name is in the table.
    At(Timestamp),
    /// The name is not in the table.
    Unknown(String),
    /// No name was given: beginning of time for a start, still in force for
    /// an end.
    Unbounded,
}

impl ResolvedDate {
    /// Returns the timestamp if the boundary resolved to one.
    pub fn timestamp(&self) -> Option<&Timestamp> {
        match self {
            Self::At(ts) => Some(ts),
            Self::Unknown(_) | Self::Unbounded => None,
        }
    }

    /// Whether the name was given but is missing from the table.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

/// Mapping of symbolic boundary names to absolute timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateConstants {
    table: IndexMap<String, Timestamp>,
}

impl DateConstants {
    /// The built-in table.
    pub fn builtin() -> Self {
        let table = BUILTIN_DATE_CONSTANTS
            .iter()
            .filter_map(|(name, value)| {
                Timestamp::parse(value)
                    .ok()
                    .map(|ts| ((*name).to_string(), ts))
            })
            .collect();
        Self { table }
    }

    /// Build a table from name/value pairs as they appear in configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Timestamp`] for the first value that is not
    /// valid RFC 3339, and [`CoreError::Config`] for an empty name.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = IndexMap::new();
        for (name, value) in pairs {
            if name.is_empty() {
                return Err(CoreError::Config(
                    "date constant name must not be empty".to_string(),
                ));
            }
            table.insert(name.to_string(), Timestamp::parse(value)?);
        }
        Ok(Self { table })
    }

    /// Install `constants` as the process-wide table.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`] if a table was already installed or
    /// [`DateConstants::global()`] has already been read.
    pub fn install(constants: DateConstants) -> Result<(), CoreError> {
        INSTALLED
            .set(constants)
            .map_err(|_| CoreError::Config("date constants already installed".to_string()))
    }

    /// The process-wide table. Falls back to (and pins) the built-in table
    /// if nothing was installed.
    pub fn global() -> &'static DateConstants {
        INSTALLED.get_or_init(Self::builtin)
    }

    /// Look up a single name.
    pub fn get(&self, name: &str) -> Option<&Timestamp> {
        self.table.get(name)
    }

    /// Resolve an optional symbolic name.
    ///
    /// An empty name is treated the same as an absent one.
    pub fn resolve(&self, name: Option<&str>) -> ResolvedDate {
        match name {
            None | Some("") => ResolvedDate::Unbounded,
            Some(name) => match self.table.get(name) {
                Some(ts) => ResolvedDate::At(*ts),
                None => ResolvedDate::Unknown(name.to_string()),
            },
        }
    }

    /// Number of constants in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate over `(name, timestamp)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Timestamp)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contains_all_constants() {
        let constants = DateConstants::builtin();
        assert_eq!(constants.len(), BUILTIN_DATE_CONSTANTS.len());
        assert_eq!(
            constants
                .get("RELEASE_ECRITERIA_ARTICLE_17")
                .map(Timestamp::to_iso8601)
                .as_deref(),
            Some("2020-12-04T00:00:00+02:00")
        );
    }

    #[test]
    fn test_resolve_known_name() {
        let constants = DateConstants::builtin();
        let resolved = constants.resolve(Some("CRITERIA_ARTICLE_16_REQUIRED"));
        let expected = Timestamp::parse("2024-12-03T00:00:00+02:00").unwrap();
        assert_eq!(resolved, ResolvedDate::At(expected));
        assert_eq!(resolved.timestamp(), Some(&expected));
    }

    #[test]
    fn test_resolve_unknown_name_is_sentinel() {
        let constants = DateConstants::builtin();
        let resolved = constants.resolve(Some("NOT_A_CONSTANT"));
        assert_eq!(resolved, ResolvedDate::Unknown("NOT_A_CONSTANT".to_string()));
        assert!(resolved.is_unknown());
        assert!(resolved.timestamp().is_none());
    }

    #[test]
    fn test_resolve_absent_is_unbounded() {
        let constants = DateConstants::builtin();
        assert_eq!(constants.resolve(None), ResolvedDate::Unbounded);
        assert_eq!(constants.resolve(Some("")), ResolvedDate::Unbounded);
    }

    #[test]
    fn test_empty_table_resolves_everything_unknown() {
        let constants = DateConstants::default();
        assert!(constants.is_empty());
        assert!(constants.resolve(Some("RELEASE_ECRITERIA_ARTICLE_17")).is_unknown());
    }

    #[test]
    fn test_from_pairs_rejects_bad_timestamp() {
        let err = DateConstants::from_pairs([("BROKEN", "2020-12-04")]).unwrap_err();
        assert!(matches!(err, CoreError::Timestamp { .. }));
    }

    #[test]
    fn test_from_pairs_rejects_empty_name() {
        let err = DateConstants::from_pairs([("", "2020-12-04T00:00:00Z")]).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_from_pairs_keeps_order() {
        let constants = DateConstants::from_pairs([
            ("B", "2021-01-01T00:00:00Z"),
            ("A", "2020-01-01T00:00:00Z"),
        ])
        .unwrap();
        let names: Vec<&str> = constants.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_global_is_stable() {
        let first = DateConstants::global() as *const DateConstants;
        let second = DateConstants::global() as *const DateConstants;
        assert_eq!(first, second);
        assert!(DateConstants::install(DateConstants::default()).is_err());
    }

    #[test]
    fn test_resolved_date_serializes_tagged() {
        let json = serde_json::to_value(ResolvedDate::Unknown("X".into())).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "unknown", "value": "X"}));
        let json = serde_json::to_value(ResolvedDate::Unbounded).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "unbounded"}));
    }
}
