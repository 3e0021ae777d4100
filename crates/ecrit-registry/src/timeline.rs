//! # Timeline Snapshot
//!
//! Pairs a [`Registry`] with the [`CriterionIndex`] inverted from it, so the
//! two views are always built from the same snapshot. There is no way to
//! update one half; a refresh builds a new `Timeline`.

use ecrit_core::{DateConstants, FileId};
use indexmap::IndexMap;

use crate::document::RawPeriod;
use crate::index::CriterionIndex;
use crate::registry::Registry;
use crate::source::{load_documents, DocumentSource};
use crate::view::{criterion_views, file_views, CriterionView, FileView};

/// A registry and its criterion index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    registry: Registry,
    index: CriterionIndex,
}

impl Timeline {
    /// Build from raw documents keyed by file name.
    pub fn build(raw: IndexMap<String, Vec<RawPeriod>>) -> Self {
        let registry = Registry::build(raw);
        let index = CriterionIndex::invert(&registry);
        Self { registry, index }
    }

    /// Load every file in `manifest` from `source` and build.
    pub fn load<S>(source: &S, manifest: &[FileId]) -> Self
    where
        S: DocumentSource + ?Sized,
    {
        let timeline = Self::build(load_documents(source, manifest));
        tracing::debug!(
            files = timeline.registry.len(),
            criteria = timeline.index.len(),
            entries = timeline.index.entry_count(),
            "timeline built"
        );
        timeline
    }

    /// The file-keyed registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The criterion-keyed index.
    pub fn index(&self) -> &CriterionIndex {
        &self.index
    }

    /// File view sections in registry order.
    pub fn file_views(&self, constants: &DateConstants) -> Vec<FileView> {
        file_views(&self.registry, constants)
    }

    /// Criterion view sections in index order.
    pub fn criterion_views(&self) -> Vec<CriterionView> {
        criterion_views(&self.index)
    }
}
