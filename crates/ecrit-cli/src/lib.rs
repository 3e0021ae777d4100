//! # ecrit-cli — Rule Timeline Command-Line Interface
//!
//! Loads procedure documents from a directory and prints one of the two
//! timeline views.
//!
//! ## Subcommands
//!
//! - `files`: per procedure file: periods, boundaries, criterion tables
//! - `criteria`: per criterion: citing files and their latest rules
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from rendering and loading.
//! - Counting, inversion and date resolution live in `ecrit-registry`;
//!   nothing here computes them.

pub mod context;
pub mod criteria;
pub mod files;
pub mod render;
