//! # census CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Census registry CLI.
///
/// Batch-registers authenticated disclosures, derives member leaves, and
/// reports accumulator roots.
#[derive(Parser, Debug)]
#[command(name = "census", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Register a JSON batch of disclosures and report the final root.
    Register(census_cli::register::RegisterArgs),
    /// Derive the accumulator leaf for an account handle.
    Leaf(census_cli::leaf::LeafArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Register(args) => census_cli::register::run(args),
        Commands::Leaf(args) => census_cli::leaf::run(args),
    }
}
