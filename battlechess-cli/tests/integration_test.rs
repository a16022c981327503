//! Integration tests for the BattleChess engine stack
//!
//! Tests the full path: board state, rules, alpha-beta agents, and the
//! evolution operators working together.

use battlechess_core::{
    generate_moves, rules, Agent, BoardState, Color, Move, ScoreConfig,
};
use battlechess_evolve::{crossover_configs, evolve, mutate_config, EvolveConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// ENGINE TESTS
// ============================================================================

#[test]
fn test_every_opening_move_round_trips() {
    let mut board = BoardState::new();
    let before = board.clone();

    for mv in generate_moves(Color::White, &before) {
        board.apply_move(mv);
        board.undo_move();
        assert_eq!(board, before, "{:?} did not round-trip", mv);
    }
}

#[test]
fn test_agent_opens_with_a_legal_move() {
    let board = BoardState::new();
    let agent = Agent::new(Color::White, 2, ScoreConfig::default());
    let mv = agent.get_move(&board).expect("white has opening moves");

    match mv {
        Move::Step { unit, from, to } | Move::Attack { attacker: unit, from, to, .. } => {
            assert_eq!(unit.color, Color::White);
            assert!(rules::is_valid_move(unit, from, to, &board));
        }
        Move::Recruit { .. } => panic!("nothing to recruit on the opening board"),
    }
}

#[test]
fn test_depth_one_game_progresses_deterministically() {
    let white = Agent::new(Color::White, 1, ScoreConfig::default());
    let black = Agent::new(Color::Black, 1, ScoreConfig::default());

    let mut transcripts = Vec::new();
    for _ in 0..2 {
        let mut board = BoardState::new();
        let mut moves = Vec::new();
        let mut mover = Color::White;

        for _ in 0..10 {
            if rules::winner(&board).is_some() {
                break;
            }
            let agent = if mover == Color::White { &white } else { &black };
            let mv = agent.get_move(&board).expect("both sides can move early on");
            board.apply_move(mv);
            moves.push(mv);
            mover = mover.opponent();
        }

        assert!(!moves.is_empty(), "game should progress");
        transcripts.push(moves);
    }

    assert_eq!(transcripts[0], transcripts[1], "identical agents should replay identically");
}

// ============================================================================
// EVOLUTION TESTS
// ============================================================================

#[test]
fn test_crossover_and_mutation_are_reproducible() {
    let a = ScoreConfig::random(&mut ChaCha8Rng::seed_from_u64(1));
    let b = ScoreConfig::random(&mut ChaCha8Rng::seed_from_u64(2));

    let child_x = crossover_configs(&a, &b, &mut ChaCha8Rng::seed_from_u64(3));
    let child_y = crossover_configs(&a, &b, &mut ChaCha8Rng::seed_from_u64(3));
    assert_eq!(child_x, child_y);

    let mutated_x = mutate_config(&child_x, 0.5, &mut ChaCha8Rng::seed_from_u64(4));
    let mutated_y = mutate_config(&child_y, 0.5, &mut ChaCha8Rng::seed_from_u64(4));
    assert_eq!(mutated_x, mutated_y);
}

#[test]
fn test_evolution_smoke() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let initial: Vec<ScoreConfig> = (0..6).map(|_| ScoreConfig::random(&mut rng)).collect();

    let config = EvolveConfig {
        population_size: 6,
        generations: 3,
        ..EvolveConfig::default()
    };
    // cheap structural fitness keeps this test fast; the CLI wires in
    // real self-play
    let fitness = |candidate: &ScoreConfig| -> f64 {
        candidate.enabled.iter().filter(|&&on| on).count() as f64
    };

    let outcome = evolve(initial, &config, fitness, &mut rng);
    assert_eq!(outcome.population.len(), 6);
    for pair in outcome.fitness.windows(2) {
        assert!(pair[0] >= pair[1], "outcome should be sorted fittest-first");
    }
}
