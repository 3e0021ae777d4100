//! # ecrit-core — Foundational Types for the Rule Timeline
//!
//! This crate is the leaf of the workspace. It defines the primitives every
//! other crate builds on: identifier newtypes, timestamps, the date-constant
//! resolver, and the configuration layer.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `FileId`, `CriterionId` and
//!    `RuleId` are distinct types with a transparent serde representation,
//!    so the JSON documents keep their plain-string shape.
//!
//! 2. **Offset-preserving timestamps.** Date constants are authored with a
//!    local offset (`+02:00`). `Timestamp` keeps that offset for display and
//!    compares by instant.
//!
//! 3. **Sentinels, not errors, for resolution.** An unknown symbolic date
//!    resolves to `ResolvedDate::Unknown`. Errors exist only for
//!    configuration loading.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ecrit-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod dates;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use config::{TimelineConfig, DEFAULT_PROCEDURE_FILES};
pub use dates::{DateConstants, ResolvedDate, BUILTIN_DATE_CONSTANTS};
pub use error::CoreError;
pub use identity::{CriterionId, FileId, RuleId};
pub use temporal::Timestamp;
