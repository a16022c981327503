//! Position evaluation
//!
//! A fixed ordered table of pure heuristics, each scoring a board from one
//! color's perspective, combined as a weighted sum under a `ScoreConfig`.
//! The config pairs 1:1 with the table and is the unit of genetic tuning.

use rand::Rng;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::rules;
use crate::setup;
use crate::state::BoardState;
use crate::units::{Color, UnitType};

/// Material value per unit kind
pub const fn unit_value(kind: UnitType) -> i32 {
    match kind {
        UnitType::Pawn => 1,
        UnitType::Knight => 5,
        UnitType::Rook => 7,
        UnitType::Bishop => 9,
        UnitType::Queen => 20,
        UnitType::King => 20,
    }
}

/// Reachable-empty-cell count is capped so open boards do not drown out
/// material
const FREEDOM_CAP: i32 = 50;

const KING_PRESENCE_SCORE: i32 = 100;
const CAPITOL_HOLD_SCORE: i32 = 500;
const RECRUIT_RISK_SCORE: i32 = 200;

/// A position heuristic scored from `color`'s perspective
pub type ScoreFn = fn(&BoardState, Color) -> i32;

/// The fixed heuristic table; `ScoreConfig` entries pair 1:1 with it
pub const SCORE_FUNCS: [(&str, ScoreFn); 9] = [
    ("own-material", own_material),
    ("opponent-material", opponent_material),
    ("king-presence", king_presence),
    ("threats-out", threats_out),
    ("threats-in", threats_in),
    ("movement-freedom", movement_freedom),
    ("city-control", city_control),
    ("capitol-hold", capitol_hold),
    ("opponent-recruit-risk", opponent_recruit_risk),
];

pub const NUM_SCORE_FUNCS: usize = SCORE_FUNCS.len();

fn own_material(board: &BoardState, color: Color) -> i32 {
    board
        .active_units(color)
        .map(|(unit, _)| unit_value(unit.kind))
        .sum()
}

fn opponent_material(board: &BoardState, color: Color) -> i32 {
    -own_material(board, color.opponent())
}

fn king_presence(board: &BoardState, color: Color) -> i32 {
    if board.has_king(color) {
        KING_PRESENCE_SCORE
    } else {
        -KING_PRESENCE_SCORE
    }
}

/// Sum of material values of enemy units some unit of `color` can capture
fn threatened_value(board: &BoardState, color: Color) -> i32 {
    let mut threatened = FxHashSet::default();
    for (unit, pos) in board.active_units(color) {
        for target in rules::valid_moves(unit, pos, board) {
            if let Some(victim) = board.get(target) {
                if victim.color != color {
                    threatened.insert(victim);
                }
            }
        }
    }
    threatened.iter().map(|victim| unit_value(victim.kind)).sum()
}

fn threats_out(board: &BoardState, color: Color) -> i32 {
    threatened_value(board, color)
}

fn threats_in(board: &BoardState, color: Color) -> i32 {
    -threatened_value(board, color.opponent())
}

/// Distinct empty cells reachable by one side, capped
fn side_freedom(board: &BoardState, color: Color) -> i32 {
    let mut cells = FxHashSet::default();
    for (unit, pos) in board.active_units(color) {
        for target in rules::valid_moves(unit, pos, board) {
            if board.get(target).is_none() {
                cells.insert(target);
            }
        }
    }
    (cells.len() as i32).min(FREEDOM_CAP)
}

fn movement_freedom(board: &BoardState, color: Color) -> i32 {
    side_freedom(board, color) - side_freedom(board, color.opponent())
}

/// Proportional share of the six cities, own minus opponent
fn city_control(board: &BoardState, color: Color) -> i32 {
    let own = board.cities_held(color) as i32;
    let theirs = board.cities_held(color.opponent()) as i32;
    own * 100 / 6 - theirs * 100 / 6
}

fn capitol_hold(board: &BoardState, color: Color) -> i32 {
    let held = board
        .get(setup::capitol(color))
        .is_some_and(|unit| unit.color == color);
    if held {
        CAPITOL_HOLD_SCORE
    } else {
        0
    }
}

/// Penalty when the opponent currently satisfies the recruitment gates
fn opponent_recruit_risk(board: &BoardState, color: Color) -> i32 {
    let opponent = color.opponent();
    let holds_capitol = board
        .get(setup::capitol(opponent))
        .is_some_and(|unit| unit.color == opponent);
    if holds_capitol && board.cities_held(opponent) >= 3 {
        -RECRUIT_RISK_SCORE
    } else {
        0
    }
}

/// Which heuristics an agent uses and how heavily each is weighted.
/// Immutable during a search; replaced wholesale by tuning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreConfig {
    pub enabled: [bool; NUM_SCORE_FUNCS],
    pub weights: [i32; NUM_SCORE_FUNCS],
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            enabled: [true; NUM_SCORE_FUNCS],
            weights: [10, 10, 5, 2, 2, 1, 3, 1, 1],
        }
    }
}

impl ScoreConfig {
    /// Random configuration: each heuristic coin-flipped on, weights drawn
    /// from 1..=100
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut enabled = [false; NUM_SCORE_FUNCS];
        let mut weights = [0; NUM_SCORE_FUNCS];
        for i in 0..NUM_SCORE_FUNCS {
            enabled[i] = rng.gen_bool(0.5);
            weights[i] = rng.gen_range(1..=100);
        }
        Self { enabled, weights }
    }
}

/// Weighted sum of the enabled heuristics, scored for `color`
pub fn evaluate(board: &BoardState, color: Color, config: &ScoreConfig) -> i32 {
    let mut score = 0i32;
    for (i, (_, func)) in SCORE_FUNCS.iter().enumerate() {
        if config.enabled[i] {
            score = score.saturating_add(config.weights[i].saturating_mul(func(board, color)));
        }
    }
    score
}
