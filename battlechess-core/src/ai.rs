//! Alpha-beta search and the move-selecting agent
//!
//! The search drives one `BoardState` through apply/undo along a depth-first
//! tree. Depth is a budget rather than a ply count: quiet steps spend more
//! of it than captures or recruitments, so tactical lines run deeper.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::eval::{evaluate, ScoreConfig};
use crate::rules;
use crate::state::{BoardState, Move};
use crate::units::{Color, Unit};

/// Score of a decided win for the searching color
pub const WIN_SCORE: i32 = i32::MAX;
/// Score of a decided loss
pub const LOSS_SCORE: i32 = i32::MIN;

/// Depth budget spent per move variant
const STEP_COST: i32 = 4;
const ATTACK_COST: i32 = 1;
const RECRUIT_COST: i32 = 2;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("no moves available for {0:?}")]
    NoMoveAvailable(Color),
}

fn move_cost(mv: &Move) -> i32 {
    match mv {
        Move::Step { .. } => STEP_COST,
        Move::Attack { .. } => ATTACK_COST,
        Move::Recruit { .. } => RECRUIT_COST,
    }
}

/// Every step, attack, and recruitment available to `color`
pub fn generate_moves(color: Color, board: &BoardState) -> Vec<Move> {
    let mut moves = Vec::new();

    for (unit, from) in board.active_units(color) {
        for to in rules::valid_moves(unit, from, board) {
            match board.get(to) {
                Some(defender) => moves.push(Move::Attack { attacker: unit, from, defender, to }),
                None => moves.push(Move::Step { unit, from, to }),
            }
        }
    }

    for unit in board.graveyard(color) {
        for to in rules::valid_recruitments(color, unit, board) {
            moves.push(Move::Recruit { unit, to });
        }
    }

    moves
}

struct SearchCtx<'a> {
    color: Color,
    config: &'a ScoreConfig,
    deadline: Option<Instant>,
}

/// Recursive alpha-beta minimax.
///
/// Max nodes act for `ctx.color`, min nodes for the opponent. Returns the
/// running alpha at max nodes and beta at min nodes, so a node with no
/// children passes its bound through unchanged rather than inventing a
/// draw score.
fn alphabeta(
    board: &mut BoardState,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ctx: &SearchCtx,
) -> i32 {
    // a decided game outranks the depth limit, so forced outcomes surface
    // even with no budget left
    if let Some(winner) = rules::winner(board) {
        return if winner == ctx.color { WIN_SCORE } else { LOSS_SCORE };
    }
    if depth <= 0 {
        return evaluate(board, ctx.color, ctx.config);
    }

    let mover = if maximizing { ctx.color } else { ctx.color.opponent() };

    for mv in generate_moves(mover, board) {
        if ctx.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            break;
        }

        board.apply_move(mv);
        let score = alphabeta(board, depth - move_cost(&mv), alpha, beta, !maximizing, ctx);
        board.undo_move();

        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
        if beta <= alpha {
            break;
        }
    }

    if maximizing {
        alpha
    } else {
        beta
    }
}

/// Composes evaluation and search to pick one move per turn
#[derive(Clone, Debug)]
pub struct Agent {
    pub color: Color,
    pub depth: i32,
    pub config: ScoreConfig,
    time_budget: Option<Duration>,
}

impl Agent {
    pub fn new(color: Color, depth: i32, config: ScoreConfig) -> Self {
        Self {
            color,
            depth,
            config,
            time_budget: None,
        }
    }

    /// Cap each `get_move` call; on breach the search keeps the best
    /// scores found so far instead of failing
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Pick the best move for this agent's color on a private clone of
    /// `board`. Fails only when the color has no move at all.
    pub fn get_move(&self, board: &BoardState) -> Result<Move, AgentError> {
        let mut search_board = board.clone();

        let mut moves = generate_moves(self.color, &search_board);
        if moves.is_empty() {
            return Err(AgentError::NoMoveAvailable(self.color));
        }
        // canonical order pins down tie-breaking across runs and platforms
        moves.sort_unstable_by_key(move_key);

        let ctx = SearchCtx {
            color: self.color,
            config: &self.config,
            deadline: self.time_budget.map(|budget| Instant::now() + budget),
        };

        let mut best = moves[0];
        let mut best_score = LOSS_SCORE;
        for mv in moves {
            search_board.apply_move(mv);
            // the root move is the maximizer's ply, so the child is a min node
            let score = alphabeta(&mut search_board, self.depth, LOSS_SCORE, WIN_SCORE, false, &ctx);
            search_board.undo_move();

            // a breach mid-child leaves `score` truncated; keep the best
            // fully-searched move instead
            if ctx.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                break;
            }
            if score > best_score {
                best_score = score;
                best = mv;
            }
        }

        Ok(best)
    }
}

/// Canonical sort key: variant rank, then coordinates, then unit identity
fn move_key(mv: &Move) -> (u8, i8, i8, i8, i8, u8, u8) {
    fn unit_rank(unit: Unit) -> (u8, u8) {
        (unit.kind as u8, unit.id)
    }
    match *mv {
        Move::Step { unit, from, to } => {
            let (kind, id) = unit_rank(unit);
            (0, from.x, from.y, to.x, to.y, kind, id)
        }
        Move::Attack { attacker, from, to, .. } => {
            let (kind, id) = unit_rank(attacker);
            (1, from.x, from.y, to.x, to.y, kind, id)
        }
        Move::Recruit { unit, to } => {
            let (kind, id) = unit_rank(unit);
            (2, 0, 0, to.x, to.y, kind, id)
        }
    }
}
