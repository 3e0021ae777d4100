//! # Summary Aggregation
//!
//! Display-ready counts for the two timeline views.
//!
//! | Function | Counts |
//! |----------|--------|
//! | [`period_count`] | periods of a file |
//! | [`current_rule_count`] | criteria in the file's current period |
//! | [`file_count`] | files citing a criterion |
//! | [`current_rule_total`] | rules in each file's *last* index entry, summed |
//!
//! `current_rule_total` deliberately uses the last index entry rather than
//! [`FileRecord::current()`]. Once data is inverted the last entry is the
//! latest period citing the criterion, and the criterion view lists exactly
//! those rules, so header and table agree.

use ecrit_core::{CriterionId, FileId};
use serde::Serialize;

use crate::index::{CriterionFiles, CriterionIndex};
use crate::period::FileRecord;
use crate::registry::Registry;

/// Number of periods defined for `file`.
pub fn period_count(file: &FileRecord) -> usize {
    file.periods.len()
}

/// Number of criteria in the current period of `file`, or 0 if it has none.
pub fn current_rule_count(file: &FileRecord) -> usize {
    file.current().map_or(0, |period| period.rule_count())
}

/// Number of distinct files citing a criterion.
pub fn file_count(files: &CriterionFiles) -> usize {
    files.len()
}

/// Sum over files of the rule-list length of each file's last entry.
pub fn current_rule_total(files: &CriterionFiles) -> usize {
    files
        .values()
        .filter_map(|entries| entries.last())
        .map(|entry| entry.rules.len())
        .sum()
}

/// Header counts for one file in the file view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    /// File name.
    pub file: FileId,
    /// See [`period_count`].
    pub period_count: usize,
    /// See [`current_rule_count`].
    pub current_rule_count: usize,
}

impl FileSummary {
    /// Summarise a single file.
    pub fn of(file: &FileRecord) -> Self {
        Self {
            file: file.name.clone(),
            period_count: period_count(file),
            current_rule_count: current_rule_count(file),
        }
    }
}

/// Header counts for one criterion in the criterion view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionSummary {
    /// Criterion identifier.
    pub criterion: CriterionId,
    /// See [`file_count`].
    pub file_count: usize,
    /// See [`current_rule_total`].
    pub current_rule_total: usize,
}

impl CriterionSummary {
    /// Summarise a single criterion.
    pub fn of(criterion: &CriterionId, files: &CriterionFiles) -> Self {
        Self {
            criterion: criterion.clone(),
            file_count: file_count(files),
            current_rule_total: current_rule_total(files),
        }
    }
}

/// Summaries for every file, in registry order.
pub fn summarize_files(registry: &Registry) -> Vec<FileSummary> {
    registry.files().map(FileSummary::of).collect()
}

/// Summaries for every criterion, in index order.
pub fn summarize_criteria(index: &CriterionIndex) -> Vec<CriterionSummary> {
    index
        .iter()
        .map(|(criterion, files)| CriterionSummary::of(criterion, files))
        .collect()
}
