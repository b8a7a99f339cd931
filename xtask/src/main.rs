//! xtask automation tool for lookout
//!
//! This tool provides development automation tasks like schema generation.

mod gen_schemas;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development automation tool for lookout")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate JSON schemas for probe reports, agent options and harness config
    GenSchemas,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GenSchemas => gen_schemas::run(),
    }
}
