//! BattleChess CLI - Command-line driver
//!
//! Commands:
//! - play: AI vs AI games on the canonical board
//! - evolve: self-play tuning of evaluation configs
//! - bench: time move selection

mod bench;
mod evolve;
mod match_play;
mod play;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "battlechess")]
#[command(about = "BattleChess hex-board engine driver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play AI vs AI games
    Play(play::PlayArgs),
    /// Run self-play evaluation tuning
    Evolve(evolve::EvolveArgs),
    /// Time move selection on the starting board
    Bench(bench::BenchArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Evolve(args) => evolve::run(args),
        Commands::Bench(args) => bench::run(args),
    }
}
