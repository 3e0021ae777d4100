//! # Timeline View Models
//!
//! Display-ready projections of the registry and the criterion index. The
//! renderer (CLI text or JSON) consumes these and does no counting or date
//! resolution of its own.
//!
//! Boundary labels: an absent start reads `Start`, an absent end reads
//! `Ongoing`, and a name missing from the date table shows `?` as its
//! value. Unresolved names are logged here, at the presentation boundary.

use ecrit_core::{CriterionId, DateConstants, FileId, ResolvedDate, RuleId};
use serde::Serialize;

use crate::index::{CriterionFiles, CriterionIndex};
use crate::period::{DateRef, Period};
use crate::registry::Registry;
use crate::summary::{CriterionSummary, FileSummary};

/// Label shown for an absent start boundary.
pub const START_LABEL: &str = "Start";
/// Label shown for an absent end boundary.
pub const ONGOING_LABEL: &str = "Ongoing";
/// Value shown for a name missing from the date table.
pub const UNKNOWN_VALUE: &str = "?";

/// Which side of a period a boundary sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Start,
    End,
}

/// A resolved period boundary, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundaryView {
    /// Symbolic name, or `Start`/`Ongoing` when absent.
    pub constant: String,
    /// Resolved timestamp, `?` when unknown, or `Start`/`Ongoing` when absent.
    pub value: String,
    /// The underlying resolution.
    pub resolved: ResolvedDate,
}

impl BoundaryView {
    fn new(date: &DateRef, side: Side, constants: &DateConstants) -> Self {
        let absent = match side {
            Side::Start => START_LABEL,
            Side::End => ONGOING_LABEL,
        };
        let resolved = date.resolve(constants);
        let value = match &resolved {
            ResolvedDate::At(ts) => ts.to_iso8601(),
            ResolvedDate::Unknown(name) => {
                tracing::warn!(constant = %name, "date constant not found");
                UNKNOWN_VALUE.to_string()
            }
            ResolvedDate::Unbounded => absent.to_string(),
        };
        Self {
            constant: date.name().unwrap_or(absent).to_string(),
            value,
            resolved,
        }
    }
}

/// One numbered criterion row of a period table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionRow {
    /// 1-based row number.
    pub number: usize,
    /// Criterion identifier.
    pub criterion: CriterionId,
    /// Rules in citation order.
    pub rules: Vec<RuleId>,
}

/// One period of a file, with header and criterion table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodView {
    /// 1-based period number.
    pub number: usize,
    /// Number of criteria in the period.
    pub rule_count: usize,
    /// Whether this is the file's current period.
    pub current: bool,
    /// Start boundary.
    pub start: BoundaryView,
    /// End boundary.
    pub end: BoundaryView,
    /// Criterion table.
    pub rows: Vec<CriterionRow>,
}

impl PeriodView {
    fn new(position: usize, period: &Period, current: bool, constants: &DateConstants) -> Self {
        let rows = period
            .criteria
            .iter()
            .enumerate()
            .map(|(i, (criterion, rules))| CriterionRow {
                number: i + 1,
                criterion: criterion.clone(),
                rules: rules.clone(),
            })
            .collect();
        Self {
            number: position + 1,
            rule_count: period.rule_count(),
            current,
            start: BoundaryView::new(&period.bounds.start, Side::Start, constants),
            end: BoundaryView::new(&period.bounds.end, Side::End, constants),
            rows,
        }
    }
}

/// A procedure file section of the file view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileView {
    /// Header counts.
    #[serde(flatten)]
    pub summary: FileSummary,
    /// Periods in source order; empty means "No rules defined".
    pub periods: Vec<PeriodView>,
}

/// One numbered file row of a criterion table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRow {
    /// 1-based row number.
    pub number: usize,
    /// File name.
    pub file: FileId,
    /// Rules of the file's latest entry for the criterion.
    pub rules: Vec<RuleId>,
    /// Position of that entry's period in the file.
    pub source_index: usize,
}

/// A criterion section of the criterion view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionView {
    /// Header counts.
    #[serde(flatten)]
    pub summary: CriterionSummary,
    /// One row per citing file.
    pub rows: Vec<FileRow>,
}

impl CriterionView {
    fn new(criterion: &CriterionId, files: &CriterionFiles) -> Self {
        let rows = files
            .iter()
            .filter_map(|(file, entries)| entries.last().map(|entry| (file, entry)))
            .enumerate()
            .map(|(i, (file, entry))| FileRow {
                number: i + 1,
                file: file.clone(),
                rules: entry.rules.clone(),
                source_index: entry.source_index,
            })
            .collect();
        Self {
            summary: CriterionSummary::of(criterion, files),
            rows,
        }
    }
}

/// Build the file view for every file in registry order.
pub fn file_views(registry: &Registry, constants: &DateConstants) -> Vec<FileView> {
    registry
        .files()
        .map(|file| {
            let current = file.current_position();
            let periods = file
                .periods
                .iter()
                .enumerate()
                .map(|(i, period)| PeriodView::new(i, period, current == Some(i), constants))
                .collect();
            FileView {
                summary: FileSummary::of(file),
                periods,
            }
        })
        .collect()
}

/// Build the criterion view for every criterion in index order.
pub fn criterion_views(index: &CriterionIndex) -> Vec<CriterionView> {
    index
        .iter()
        .map(|(criterion, files)| CriterionView::new(criterion, files))
        .collect()
}
