//! # Criterion Index
//!
//! Inverts the file-keyed [`Registry`] into a criterion-keyed view:
//!
//! ```text
//! criterion → file → [IndexEntry { period, rules, source_index }, ...]
//! ```
//!
//! The index is a single fold over every `(file, period, criterion)` triple
//! of the registry. Per-file entries follow source period order, so the
//! last entry is the latest period that cites the criterion. `source_index`
//! recovers the originating period without re-sorting by date, which matters
//! because boundaries may be symbolic or unresolvable.
//!
//! A file appears under a criterion only if at least one of its periods
//! cites it. Criteria appear in first-seen order across the registry walk.
//!
//! The index owns its data and offers no mutation: when the registry
//! changes, invert it again.

use ecrit_core::{CriterionId, FileId, RuleId};
use indexmap::IndexMap;
use serde::Serialize;

use crate::period::PeriodBounds;
use crate::registry::Registry;

/// One period's rules for a criterion within one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// Boundaries of the originating period.
    pub period: PeriodBounds,
    /// Rules cited for the criterion in that period.
    pub rules: Vec<RuleId>,
    /// Zero-based position of the originating period in its file.
    pub source_index: usize,
}

/// File → entries for a single criterion.
pub type CriterionFiles = IndexMap<FileId, Vec<IndexEntry>>;

/// Criterion-keyed inversion of a [`Registry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CriterionIndex {
    criteria: IndexMap<CriterionId, CriterionFiles>,
}

impl CriterionIndex {
    /// Build the index from a registry snapshot.
    pub fn invert(registry: &Registry) -> Self {
        let mut criteria: IndexMap<CriterionId, CriterionFiles> = IndexMap::new();
        for file in registry.files() {
            for (source_index, period) in file.periods.iter().enumerate() {
                for (criterion, rules) in &period.criteria {
                    criteria
                        .entry(criterion.clone())
                        .or_default()
                        .entry(file.name.clone())
                        .or_default()
                        .push(IndexEntry {
                            period: period.bounds.clone(),
                            rules: rules.clone(),
                            source_index,
                        });
                }
            }
        }
        Self { criteria }
    }

    /// Files citing `criterion`, with their entries.
    pub fn get(&self, criterion: &str) -> Option<&CriterionFiles> {
        self.criteria.get(criterion)
    }

    /// Entries of `file` under `criterion`, in period order.
    pub fn entries(&self, criterion: &str, file: &str) -> Option<&[IndexEntry]> {
        self.criteria
            .get(criterion)
            .and_then(|files| files.get(file))
            .map(Vec::as_slice)
    }

    /// Iterate over criteria in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&CriterionId, &CriterionFiles)> {
        self.criteria.iter()
    }

    /// Number of distinct criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Whether no criterion is cited anywhere.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Total number of entries; equals [`Registry::criterion_entry_count()`]
    /// of the source registry.
    pub fn entry_count(&self) -> usize {
        self.criteria
            .values()
            .flat_map(|files| files.values())
            .map(Vec::len)
            .sum()
    }
}
