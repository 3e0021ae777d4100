//! # Files Subcommand
//!
//! Prints one section per procedure file: its period count, the number of
//! criteria in its current period, and each period's criterion table.

use std::io::Write;

use clap::Args;

use crate::context::{LoadArgs, OutputFormat};
use crate::render::write_file_views;

/// Arguments for the files subcommand.
#[derive(Args, Debug, Clone)]
pub struct FilesArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Only show these files (repeatable). Defaults to the whole manifest.
    #[arg(long = "only")]
    pub only: Vec<String>,
}

/// Run the files subcommand, writing the view to `out`.
pub fn run<W: Write>(args: &FilesArgs, out: &mut W) -> anyhow::Result<()> {
    let loaded = args.load.load()?;
    let mut views = loaded.timeline.file_views(loaded.constants);
    if !args.only.is_empty() {
        views.retain(|view| args.only.iter().any(|name| name == view.summary.file.as_str()));
    }

    match args.load.format {
        OutputFormat::Text => write_file_views(out, &views)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &views)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
