//! Evolve command - self-play tuning of evaluation configs

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use battlechess_core::{Agent, Color, ScoreConfig};
use battlechess_evolve::{evolve, EvolveConfig};

use crate::match_play::play_game;

#[derive(Args)]
pub struct EvolveArgs {
    #[arg(long, default_value = "16")]
    pub population: usize,

    #[arg(long, default_value = "10")]
    pub generations: usize,

    /// Search depth budget during fitness games
    #[arg(long, default_value = "4")]
    pub depth: i32,

    /// Games per fitness evaluation; colors alternate against the baseline
    #[arg(long, default_value = "2")]
    pub games: usize,

    #[arg(long, default_value = "120")]
    pub max_plies: u32,

    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Where to write the champion config as JSON
    #[arg(long, value_name = "FILE")]
    pub output: PathBuf,
}

pub fn run(args: EvolveArgs) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let initial: Vec<ScoreConfig> = (0..args.population)
        .map(|_| ScoreConfig::random(&mut rng))
        .collect();

    let config = EvolveConfig {
        population_size: args.population,
        generations: args.generations,
        ..EvolveConfig::default()
    };

    let depth = args.depth;
    let games = args.games;
    let max_plies = args.max_plies;
    let fitness = |candidate: &ScoreConfig| -> f64 {
        // points against the default baseline, alternating colors
        let mut points = 0.0;
        for game in 0..games {
            let (white_config, black_config, own) = if game % 2 == 0 {
                (candidate.clone(), ScoreConfig::default(), Color::White)
            } else {
                (ScoreConfig::default(), candidate.clone(), Color::Black)
            };
            let white = Agent::new(Color::White, depth, white_config);
            let black = Agent::new(Color::Black, depth, black_config);
            let outcome = play_game(&white, &black, max_plies);
            points += match outcome.winner {
                Some(winner) if winner == own => 1.0,
                None => 0.5,
                Some(_) => 0.0,
            };
        }
        points
    };

    let outcome = evolve(initial, &config, fitness, &mut rng);
    info!(best_fitness = outcome.fitness[0], "evolution finished");

    let json = serde_json::to_string_pretty(outcome.best())?;
    fs::write(&args.output, json)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("champion written to {}", args.output.display());

    Ok(())
}
