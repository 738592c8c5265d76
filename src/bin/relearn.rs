//! relearn CLI - Train and watch value-table Tic-Tac-Toe learners
//!
//! This CLI provides a unified interface for:
//! - Training a value-table learner against a fixed opponent
//! - Comparing fixed policies over a match
//! - Playing single games move by move
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "relearn")]
#[command(version, about = "Value-table reinforcement learning for Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a value-table learner
    Train(relearn::cli::commands::train::TrainArgs),

    /// Play a match between two fixed policies
    Compare(relearn::cli::commands::compare::CompareArgs),

    /// Play one game and print every position
    Play(relearn::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => relearn::cli::commands::train::execute(args),
        Commands::Compare(args) => relearn::cli::commands::compare::execute(args),
        Commands::Play(args) => relearn::cli::commands::play::execute(args),
    }
}
