//! # Periods and File Records
//!
//! A [`FileRecord`] is the ordered period sequence of one procedure file.
//! Each [`Period`] maps criteria to the rule list in force during it.
//!
//! ## Current Period
//!
//! [`FileRecord::current()`] picks the first period without an end boundary.
//! If every period is closed, the last listed period is used instead; an
//! empty file has no current period. Position in the sequence does not
//! matter for the first rule, only for the fallback.

use ecrit_core::{CriterionId, DateConstants, FileId, ResolvedDate, RuleId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::document::{RawBounds, RawPeriod};

/// A symbolic period boundary, or its absence.
///
/// An empty name in the source document counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub struct DateRef(Option<String>);

impl DateRef {
    /// An absent boundary.
    pub fn unbounded() -> Self {
        Self(None)
    }

    /// A boundary naming a date constant.
    pub fn named(name: impl Into<String>) -> Self {
        Self::from(Some(name.into()))
    }

    /// The symbolic name, if present.
    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Whether the boundary is absent.
    pub fn is_unbounded(&self) -> bool {
        self.0.is_none()
    }

    /// Resolve against a date table.
    pub fn resolve(&self, constants: &DateConstants) -> ResolvedDate {
        constants.resolve(self.name())
    }
}

impl From<Option<String>> for DateRef {
    fn from(value: Option<String>) -> Self {
        Self(value.filter(|name| !name.is_empty()))
    }
}

impl From<DateRef> for Option<String> {
    fn from(value: DateRef) -> Self {
        value.0
    }
}

/// Start/end boundary pair of a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodBounds {
    /// Start boundary; unbounded means beginning of time.
    #[serde(rename = "start_date")]
    pub start: DateRef,
    /// End boundary; unbounded means still in force.
    #[serde(rename = "end_date")]
    pub end: DateRef,
}

impl PeriodBounds {
    /// Build from start/end names.
    pub fn new(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: DateRef::from(start.map(str::to_string)),
            end: DateRef::from(end.map(str::to_string)),
        }
    }

    /// Whether the period is still in force (no end boundary).
    pub fn is_open(&self) -> bool {
        self.end.is_unbounded()
    }
}

impl From<RawBounds> for PeriodBounds {
    fn from(raw: RawBounds) -> Self {
        Self {
            start: DateRef::from(raw.start_date),
            end: DateRef::from(raw.end_date),
        }
    }
}

/// A span during which one fixed set of criteria and rules is in force.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Period boundaries.
    #[serde(rename = "period")]
    pub bounds: PeriodBounds,
    /// Criterion → rule list, in document order.
    pub criteria: IndexMap<CriterionId, Vec<RuleId>>,
}

impl Period {
    /// Number of criteria active in this period.
    pub fn rule_count(&self) -> usize {
        self.criteria.len()
    }

    /// Rules cited for `criterion` in this period.
    pub fn rules_for(&self, criterion: &str) -> Option<&[RuleId]> {
        self.criteria.get(criterion).map(Vec::as_slice)
    }
}

impl From<RawPeriod> for Period {
    fn from(raw: RawPeriod) -> Self {
        let criteria = raw
            .criteria
            .into_iter()
            .map(|(criterion, entry)| {
                let rules = entry.rules.into_iter().map(RuleId::from).collect();
                (CriterionId::from(criterion), rules)
            })
            .collect();
        Self {
            bounds: raw.period.into(),
            criteria,
        }
    }
}

/// The period sequence of one procedure file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// File name.
    pub name: FileId,
    /// Periods in source order, assumed chronological.
    pub periods: Vec<Period>,
}

impl FileRecord {
    /// Build a record from raw periods without reordering them.
    pub fn from_raw(name: FileId, raw: Vec<RawPeriod>) -> Self {
        Self {
            name,
            periods: raw.into_iter().map(Period::from).collect(),
        }
    }

    /// The period presently in force.
    pub fn current(&self) -> Option<&Period> {
        self.current_position().map(|idx| &self.periods[idx])
    }

    /// Zero-based position of [`FileRecord::current()`] in the sequence.
    pub fn current_position(&self) -> Option<usize> {
        self.periods
            .iter()
            .position(|p| p.bounds.is_open())
            .or_else(|| self.periods.len().checked_sub(1))
    }

    /// Whether the file defines no periods at all.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(end: Option<&str>, criteria: &[(&str, &[&str])]) -> Period {
        Period {
            bounds: PeriodBounds::new(None, end),
            criteria: criteria
                .iter()
                .map(|(c, rules)| {
                    (
                        CriterionId::from(*c),
                        rules.iter().map(|r| RuleId::from(*r)).collect(),
                    )
                })
                .collect(),
        }
    }

    fn record(periods: Vec<Period>) -> FileRecord {
        FileRecord {
            name: FileId::new("test"),
            periods,
        }
    }

    #[test]
    fn test_current_prefers_open_period_regardless_of_position() {
        let file = record(vec![
            period(Some("A"), &[("c1", &["r1"])]),
            period(None, &[("c2", &["r2"])]),
            period(Some("B"), &[("c3", &["r3"])]),
        ]);
        assert_eq!(file.current_position(), Some(1));
        assert!(file.current().unwrap().criteria.contains_key("c2"));
    }

    #[test]
    fn test_current_falls_back_to_last_period() {
        let file = record(vec![
            period(Some("A"), &[("c1", &["r1"])]),
            period(Some("B"), &[("c2", &["r2"])]),
        ]);
        assert_eq!(file.current_position(), Some(1));
    }

    #[test]
    fn test_current_picks_first_of_several_open_periods() {
        let file = record(vec![period(None, &[]), period(None, &[("c", &["r"])])]);
        assert_eq!(file.current_position(), Some(0));
    }

    #[test]
    fn test_current_of_empty_file_is_none() {
        let file = record(vec![]);
        assert!(file.is_empty());
        assert!(file.current().is_none());
    }

    #[test]
    fn test_empty_end_name_counts_as_open() {
        let bounds = PeriodBounds::new(Some("A"), Some(""));
        assert!(bounds.is_open());
        assert_eq!(bounds.end, DateRef::unbounded());
    }

    #[test]
    fn test_date_ref_deserialize_normalizes_empty_name() {
        let bounds: PeriodBounds =
            serde_json::from_str(r#"{"start_date": "A", "end_date": ""}"#).unwrap();
        assert!(bounds.is_open());
        assert_eq!(bounds.start.name(), Some("A"));
    }

    #[test]
    fn test_date_ref_resolution() {
        let constants = DateConstants::builtin();
        assert_eq!(DateRef::unbounded().resolve(&constants), ResolvedDate::Unbounded);
        assert!(DateRef::named("NOPE").resolve(&constants).is_unknown());
        assert!(DateRef::named("RELEASE_ECRITERIA_ARTICLE_17")
            .resolve(&constants)
            .timestamp()
            .is_some());
    }

    #[test]
    fn test_from_raw_keeps_order_and_duplicates() {
        let raw: Vec<RawPeriod> = serde_json::from_str(
            r#"[
                {"period": {"end_date": "A"}, "criteria": {"b": {"rules": ["x", "x"]}, "a": {"rules": []}}},
                {"period": {"start_date": "A"}, "criteria": {}}
            ]"#,
        )
        .unwrap();
        let file = FileRecord::from_raw(FileId::new("f"), raw);
        assert_eq!(file.periods.len(), 2);
        let keys: Vec<&str> = file.periods[0].criteria.keys().map(CriterionId::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(
            file.periods[0].rules_for("b").unwrap(),
            &[RuleId::from("x"), RuleId::from("x")]
        );
        assert_eq!(file.periods[1].rule_count(), 0);
    }

    #[test]
    fn test_period_serializes_in_document_shape() {
        let p = period(Some("A"), &[("c", &["r"])]);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "period": {"start_date": null, "end_date": "A"},
                "criteria": {"c": ["r"]}
            })
        );
    }
}
