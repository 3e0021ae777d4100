//! # Document Sources
//!
//! Retrieval of raw procedure documents sits behind [`DocumentSource`].
//! [`load_documents()`] walks a manifest and never fails: a document that
//! is missing, unreadable or malformed is logged and replaced by an empty
//! period sequence, which the registry treats as "no rules defined".

use std::path::{Path, PathBuf};

use ecrit_core::FileId;
use indexmap::IndexMap;
use thiserror::Error;

use crate::document::{parse_document, RawPeriod};

/// A document could not be retrieved.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source has no document for the file.
    #[error("document for {file} not found")]
    Missing {
        /// The requested file.
        file: FileId,
    },

    /// Reading the document failed.
    #[error("failed to read document for {file}: {source}")]
    Io {
        /// The requested file.
        file: FileId,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not a well-shaped period array.
    #[error("malformed document for {file}: {source}")]
    Malformed {
        /// The requested file.
        file: FileId,
        /// JSON diagnostic.
        source: serde_json::Error,
    },
}

/// Retrieves the raw period array of one procedure file.
pub trait DocumentSource {
    /// Fetch the document for `file`.
    fn fetch(&self, file: &FileId) -> Result<Vec<RawPeriod>, SourceError>;
}

/// Reads `<root>/<file>.json` from the filesystem.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory documents are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document for `file`. File names contain dots
    /// (`negotiation.quick`), so the extension is appended, not set.
    pub fn path_for(&self, file: &FileId) -> PathBuf {
        self.root.join(format!("{file}.json"))
    }
}

impl DocumentSource for DirectorySource {
    fn fetch(&self, file: &FileId) -> Result<Vec<RawPeriod>, SourceError> {
        let path = self.path_for(file);
        let text = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                SourceError::Missing { file: file.clone() }
            } else {
                SourceError::Io {
                    file: file.clone(),
                    source,
                }
            }
        })?;
        parse_document(&text).map_err(|source| SourceError::Malformed {
            file: file.clone(),
            source,
        })
    }
}

/// In-memory documents, stored as JSON text.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: IndexMap<FileId, String>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the document for `file`.
    pub fn insert(&mut self, file: impl Into<FileId>, json: impl Into<String>) -> &mut Self {
        self.documents.insert(file.into(), json.into());
        self
    }
}

impl DocumentSource for MemorySource {
    fn fetch(&self, file: &FileId) -> Result<Vec<RawPeriod>, SourceError> {
        let text = self
            .documents
            .get(file)
            .ok_or_else(|| SourceError::Missing { file: file.clone() })?;
        parse_document(text).map_err(|source| SourceError::Malformed {
            file: file.clone(),
            source,
        })
    }
}

/// Fetch every file in `manifest`, in order, substituting an empty sequence
/// for any document that cannot be retrieved.
pub fn load_documents<S>(source: &S, manifest: &[FileId]) -> IndexMap<String, Vec<RawPeriod>>
where
    S: DocumentSource + ?Sized,
{
    manifest
        .iter()
        .map(|file| {
            let periods = source.fetch(file).unwrap_or_else(|e| {
                tracing::warn!(file = %file, error = %e, "document unavailable, treating as empty");
                Vec::new()
            });
            tracing::debug!(file = %file, periods = periods.len(), "loaded procedure document");
            (file.to_string(), periods)
        })
        .collect()
}
