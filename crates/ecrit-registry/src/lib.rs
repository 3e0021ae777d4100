//! # ecrit-registry — Temporal Rule Registry
//!
//! The file-keyed registry of procedure periods and its criterion-keyed
//! projection:
//!
//! - **Document** (`document.rs`): serde model of the raw JSON period arrays.
//!
//! - **Period** (`period.rs`): periods, boundaries and file records,
//!   including current-period selection.
//!
//! - **Registry** (`registry.rs`): file name → period sequence, in
//!   presentation order.
//!
//! - **Index** (`index.rs`): criterion → file → ordered entries, built by a
//!   single fold over the registry.
//!
//! - **Summary** (`summary.rs`): period, file and rule counts for the view
//!   headers.
//!
//! - **Source** (`source.rs`): document retrieval that degrades to empty.
//!
//! - **View** (`view.rs`) and **Timeline** (`timeline.rs`): display-ready
//!   projections built from one consistent snapshot.
//!
//! ## Crate Policy
//!
//! - Depends only on `ecrit-core` internally.
//! - Registry, index, summaries and views are pure and total over
//!   well-shaped documents. Nothing here panics on data.

pub mod document;
pub mod index;
pub mod period;
pub mod registry;
pub mod source;
pub mod summary;
pub mod timeline;
pub mod view;

pub use document::{parse_document, RawBounds, RawCriterion, RawPeriod};
pub use index::{CriterionFiles, CriterionIndex, IndexEntry};
pub use period::{DateRef, FileRecord, Period, PeriodBounds};
pub use registry::Registry;
pub use source::{load_documents, DirectorySource, DocumentSource, MemorySource, SourceError};
pub use summary::{
    current_rule_count, current_rule_total, file_count, period_count, CriterionSummary,
    FileSummary,
};
pub use timeline::Timeline;
pub use view::{CriterionView, FileView};
