//! # Timeline Configuration
//!
//! The YAML configuration consumed at startup:
//!
//! ```yaml
//! date_constants:
//!   RELEASE_ECRITERIA_ARTICLE_17: "2020-12-04T00:00:00+02:00"
//! files:
//!   - aboveThreshold
//!   - belowThreshold
//! ```
//!
//! Both keys are optional. A missing key falls back to the built-in date
//! table or the default procedure manifest respectively.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dates::{DateConstants, BUILTIN_DATE_CONSTANTS};
use crate::error::CoreError;
use crate::identity::FileId;

/// Procedure files presented by default, in presentation order.
pub const DEFAULT_PROCEDURE_FILES: &[&str] = &[
    "aboveThreshold",
    "aboveThresholdEU",
    "aboveThresholdUA",
    "aboveThresholdUA.defense",
    "belowThreshold",
    "closeFrameworkAgreementUA",
    "closeFrameworkAgreementSelectionUA",
    "competitiveDialogueEU",
    "competitiveDialogueEU.stage2",
    "competitiveDialogueUA",
    "competitiveDialogueUA.stage2",
    "competitiveOrdering",
    "esco",
    "negotiation",
    "negotiation.quick",
    "priceQuotation",
    "reporting",
    "simple.defense",
];

fn default_date_constants() -> IndexMap<String, String> {
    BUILTIN_DATE_CONSTANTS
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect()
}

fn default_files() -> Vec<String> {
    DEFAULT_PROCEDURE_FILES.iter().map(|s| (*s).to_string()).collect()
}

/// Startup configuration for the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineConfig {
    /// Symbolic boundary name → RFC 3339 timestamp.
    #[serde(default = "default_date_constants")]
    pub date_constants: IndexMap<String, String>,
    /// Procedure files to load, in presentation order.
    #[serde(default = "default_files")]
    pub files: Vec<String>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            date_constants: default_date_constants(),
            files: default_files(),
        }
    }
}

impl TimelineConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, CoreError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Reject manifests with empty or repeated file names. Registry keys
    /// must be unique, and a silent dedup would hide a typo.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = std::collections::HashSet::new();
        for name in &self.files {
            if name.is_empty() {
                return Err(CoreError::Config("file name must not be empty".to_string()));
            }
            if !seen.insert(name.as_str()) {
                return Err(CoreError::Config(format!(
                    "file {name:?} listed more than once"
                )));
            }
        }
        Ok(())
    }

    /// Parse the configured date constants into a lookup table.
    pub fn date_table(&self) -> Result<DateConstants, CoreError> {
        DateConstants::from_pairs(
            self.date_constants
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        )
    }

    /// The manifest as typed identifiers.
    pub fn manifest(&self) -> Vec<FileId> {
        self.files.iter().map(|name| FileId::new(name.as_str())).collect()
    }
}
