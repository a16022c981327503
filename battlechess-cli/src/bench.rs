//! Bench command - time move selection on the starting board

use std::time::Instant;

use anyhow::Result;
use clap::Args;

use battlechess_core::{Agent, BoardState, Color, ScoreConfig};

#[derive(Args)]
pub struct BenchArgs {
    #[arg(long, default_value = "8")]
    pub depth: i32,

    #[arg(long, default_value = "5")]
    pub iterations: usize,
}

pub fn run(args: BenchArgs) -> Result<()> {
    let board = BoardState::new();
    let agent = Agent::new(Color::White, args.depth, ScoreConfig::default());

    let start = Instant::now();
    for _ in 0..args.iterations {
        agent.get_move(&board)?;
    }
    let elapsed = start.elapsed();

    println!(
        "depth {}: {} moves in {:?} ({:?}/move)",
        args.depth,
        args.iterations,
        elapsed,
        elapsed / args.iterations.max(1) as u32
    );

    Ok(())
}
