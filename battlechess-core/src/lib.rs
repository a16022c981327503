//! BattleChess Core - Game engine and AI
//!
//! This crate provides the decision engine for the hex-board game:
//! - Board geometry (radius-5 hex grid, axial coordinates)
//! - Unit types, cities, and the starting armies
//! - Board state with an in-place apply/undo move protocol
//! - Legal-move generation, recruitment, and win detection
//! - Weighted-heuristic position evaluation
//! - Alpha-beta agent

pub mod ai;
pub mod board;
pub mod eval;
pub mod rules;
pub mod setup;
pub mod state;
pub mod units;

// Re-exports for convenient access
pub use ai::{generate_moves, Agent, AgentError, LOSS_SCORE, WIN_SCORE};
pub use board::{Position, BOARD_RADIUS, NUM_CELLS};
pub use eval::{evaluate, ScoreConfig, NUM_SCORE_FUNCS};
pub use rules::{can_recruit, is_valid_move, valid_moves, valid_recruitments, winner};
pub use setup::{capitol, CITIES};
pub use state::{BoardState, Move};
pub use units::{Color, Unit, UnitType};
