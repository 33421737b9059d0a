use anyhow::Result;
use clap::{Parser, Subcommand};
use seqalign::input::AlignArgs;
use seqalign::run;

#[derive(Parser)]
#[command(name = "seqalign")]
#[command(version = "0.1.0")]
#[command(about = "Pairwise sequence alignment (global and local, linear and affine gaps)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Global alignment (Needleman-Wunsch)
    Global(AlignArgs),

    /// Local alignment (Smith-Waterman)
    Local(AlignArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Global(args) => {
            run::run_global(args)?;
        }
        Commands::Local(args) => {
            run::run_local(args)?;
        }
    }
    Ok(())
}
