//! # Raw Procedure Documents
//!
//! Serde model of one procedure file as stored on disk: a JSON array of
//! periods, each with its boundary names and a criterion → rules mapping.
//!
//! ```json
//! [
//!   {
//!     "period": {"end_date": "RELEASE_ECRITERIA_ARTICLE_17"},
//!     "criteria": {"languages": {"rules": ["r1"]}}
//!   }
//! ]
//! ```
//!
//! Only the fields the registry needs are modelled. Unknown fields are
//! ignored, and `criteria` keeps its document key order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Boundary names of a period as written in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBounds {
    /// Symbolic start name; absent means beginning of time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Symbolic end name; absent means still in force.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Rules cited for one criterion within a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCriterion {
    /// Rule identifiers in citation order.
    pub rules: Vec<String>,
}

/// One period entry of a procedure document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPeriod {
    /// Period boundaries.
    #[serde(default)]
    pub period: RawBounds,
    /// Criterion → rules, in document order.
    pub criteria: IndexMap<String, RawCriterion>,
}

/// Parse a whole procedure document.
pub fn parse_document(text: &str) -> Result<Vec<RawPeriod>, serde_json::Error> {
    serde_json::from_str(text)
}
