//! # Criteria Subcommand
//!
//! Prints the inverted view: one section per criterion with the files that
//! cite it and the rules of each file's latest citing period.

use std::io::Write;

use clap::Args;

use crate::context::{LoadArgs, OutputFormat};
use crate::render::write_criterion_views;

/// Arguments for the criteria subcommand.
#[derive(Args, Debug, Clone)]
pub struct CriteriaArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Only show these criteria (repeatable). Defaults to all.
    #[arg(long = "only")]
    pub only: Vec<String>,
}

/// Run the criteria subcommand, writing the view to `out`.
pub fn run<W: Write>(args: &CriteriaArgs, out: &mut W) -> anyhow::Result<()> {
    let loaded = args.load.load()?;
    let mut views = loaded.timeline.criterion_views();
    if !args.only.is_empty() {
        views.retain(|view| {
            args.only
                .iter()
                .any(|name| name == view.summary.criterion.as_str())
        });
    }

    match args.load.format {
        OutputFormat::Text => write_criterion_views(out, &views)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &views)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
