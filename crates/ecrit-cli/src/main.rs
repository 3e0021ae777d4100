//! # ecrit CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// eCriteria rule timeline viewer.
///
/// Shows, for each procurement procedure file, the periods of its
/// qualification criteria and the rules cited for each, or the inverted
/// view by criterion.
#[derive(Parser, Debug)]
#[command(name = "ecrit", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Show the timeline per procedure file.
    Files(ecrit_cli::files::FilesArgs),
    /// Show the timeline per criterion.
    Criteria(ecrit_cli::criteria::CriteriaArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Files(args) => ecrit_cli::files::run(&args, &mut out),
        Commands::Criteria(args) => ecrit_cli::criteria::run(&args, &mut out),
    }
}
