//! Play command - run AI vs AI games

use anyhow::Result;
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use battlechess_core::{Agent, Color, ScoreConfig};

use crate::match_play::{play_game, GameOutcome};

#[derive(Args)]
pub struct PlayArgs {
    /// Search depth budget for both agents
    #[arg(long, default_value = "8")]
    pub depth: i32,

    /// Number of games to play
    #[arg(long, default_value = "1")]
    pub games: usize,

    /// Maximum half-moves per game
    #[arg(long, default_value = "200")]
    pub max_plies: u32,

    /// Draw both configs at random from this seed instead of the defaults
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let (white_config, black_config) = match args.seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (ScoreConfig::random(&mut rng), ScoreConfig::random(&mut rng))
        }
        None => (ScoreConfig::default(), ScoreConfig::default()),
    };

    let white = Agent::new(Color::White, args.depth, white_config);
    let black = Agent::new(Color::Black, args.depth, black_config);

    let mut outcomes: Vec<GameOutcome> = Vec::new();
    for game in 0..args.games {
        let outcome = play_game(&white, &black, args.max_plies);
        info!(game, winner = ?outcome.winner, plies = outcome.plies, "game finished");
        outcomes.push(outcome);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        let white_wins = outcomes.iter().filter(|o| o.winner == Some(Color::White)).count();
        let black_wins = outcomes.iter().filter(|o| o.winner == Some(Color::Black)).count();
        let drawn = outcomes.len() - white_wins - black_wins;
        println!("white {} / black {} / drawn {}", white_wins, black_wins, drawn);
    }

    Ok(())
}
