//! # Shared Loading Options
//!
//! Every view subcommand takes the same inputs: a document directory, an
//! optional YAML configuration, and an output format. This module turns
//! them into a [`Timeline`] plus the date table used to label it.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use ecrit_core::{DateConstants, TimelineConfig};
use ecrit_registry::{DirectorySource, Timeline};

/// Output format for a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sections and tables.
    #[default]
    Text,
    /// Pretty-printed JSON array of view sections.
    Json,
}

/// Options shared by the view subcommands.
#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Directory containing `<file>.json` procedure documents.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// YAML configuration with `date_constants` and `files`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// A loaded timeline and the date table it should be displayed with.
#[derive(Debug)]
pub struct Loaded {
    /// Registry and criterion index.
    pub timeline: Timeline,
    /// Process-wide date table.
    pub constants: &'static DateConstants,
}

impl LoadArgs {
    /// Read the configuration, or fall back to the built-in one.
    pub fn config(&self) -> anyhow::Result<TimelineConfig> {
        match &self.config {
            Some(path) => TimelineConfig::load(path)
                .with_context(|| format!("loading configuration from {}", path.display())),
            None => Ok(TimelineConfig::default()),
        }
    }

    /// Install the configured date table and load every manifest document.
    pub fn load(&self) -> anyhow::Result<Loaded> {
        let config = self.config()?;
        let table = config.date_table().context("parsing date constants")?;
        if DateConstants::install(table).is_err() {
            tracing::debug!("date constants already installed, keeping existing table");
        }
        let constants = DateConstants::global();

        let source = DirectorySource::new(&self.dir);
        tracing::info!(
            dir = %self.dir.display(),
            files = config.files.len(),
            constants = constants.len(),
            "loading procedure documents"
        );
        let timeline = Timeline::load(&source, &config.manifest());
        Ok(Loaded {
            timeline,
            constants,
        })
    }
}
