//! # Temporal Rule Registry
//!
//! The authoritative, file-keyed collection of period sequences. Built once
//! from raw documents and read-only afterwards; anything derived from it
//! (the criterion index, summaries, views) is rebuilt from scratch.
//!
//! Files keep the insertion order of the input map, which is the manifest
//! order. Periods are not reordered and overlapping periods are not
//! rejected: construction is total over well-shaped input.

use ecrit_core::FileId;
use indexmap::IndexMap;
use serde::Serialize;

use crate::document::RawPeriod;
use crate::period::FileRecord;

/// File name → period sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    files: IndexMap<FileId, FileRecord>,
}

impl Registry {
    /// Build the registry from raw documents keyed by file name.
    pub fn build(raw: IndexMap<String, Vec<RawPeriod>>) -> Self {
        let files = raw
            .into_iter()
            .map(|(name, periods)| {
                let id = FileId::from(name);
                (id.clone(), FileRecord::from_raw(id, periods))
            })
            .collect();
        Self { files }
    }

    /// Build the registry from already-constructed records. A later record
    /// with the same name replaces the earlier one in its original slot.
    pub fn from_records(records: impl IntoIterator<Item = FileRecord>) -> Self {
        let files = records
            .into_iter()
            .map(|record| (record.name.clone(), record))
            .collect();
        Self { files }
    }

    /// Look up a file.
    pub fn get(&self, name: &str) -> Option<&FileRecord> {
        self.files.get(name)
    }

    /// Iterate over file records in presentation order.
    pub fn files(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.values()
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the registry holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of (period, criterion) entries across all files.
    pub fn criterion_entry_count(&self) -> usize {
        self.files()
            .flat_map(|file| &file.periods)
            .map(|period| period.criteria.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;

    fn raw(entries: &[(&str, &str)]) -> IndexMap<String, Vec<RawPeriod>> {
        entries
            .iter()
            .map(|(name, text)| ((*name).to_string(), parse_document(text).unwrap()))
            .collect()
    }

    #[test]
    fn test_build_keeps_manifest_order() {
        let registry = Registry::build(raw(&[
            ("reporting", "[]"),
            ("aboveThreshold", "[]"),
            ("esco", "[]"),
        ]));
        let names: Vec<&str> = registry.files().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["reporting", "aboveThreshold", "esco"]);
    }

    #[test]
    fn test_empty_file_and_empty_period_are_distinct() {
        let registry = Registry::build(raw(&[
            ("none", "[]"),
            ("blank", r#"[{"period": {}, "criteria": {}}]"#),
        ]));
        assert_eq!(registry.get("none").unwrap().periods.len(), 0);
        let blank = registry.get("blank").unwrap();
        assert_eq!(blank.periods.len(), 1);
        assert_eq!(blank.periods[0].rule_count(), 0);
    }

    #[test]
    fn test_build_does_not_reorder_periods() {
        let registry = Registry::build(raw(&[(
            "f",
            r#"[
                {"period": {"start_date": "CRITERIA_ARTICLE_16_REQUIRED"}, "criteria": {"late": {"rules": []}}},
                {"period": {"end_date": "RELEASE_ECRITERIA_ARTICLE_17"}, "criteria": {"early": {"rules": []}}}
            ]"#,
        )]));
        let file = registry.get("f").unwrap();
        assert!(file.periods[0].criteria.contains_key("late"));
        assert!(file.periods[1].criteria.contains_key("early"));
    }

    #[test]
    fn test_criterion_entry_count() {
        let registry = Registry::build(raw(&[
            ("a", r#"[{"period": {}, "criteria": {"x": {"rules": []}, "y": {"rules": []}}}]"#),
            ("b", r#"[{"period": {}, "criteria": {"x": {"rules": []}}}, {"period": {}, "criteria": {}}]"#),
        ]));
        assert_eq!(registry.criterion_entry_count(), 3);
    }

    #[test]
    fn test_from_records_dedups_by_name() {
        let first = FileRecord {
            name: FileId::new("f"),
            periods: vec![],
        };
        let second = FileRecord::from_raw(
            FileId::new("f"),
            parse_document(r#"[{"period": {}, "criteria": {}}]"#).unwrap(),
        );
        let registry = Registry::from_records([first, second]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("f").unwrap().periods.len(), 1);
    }
}
