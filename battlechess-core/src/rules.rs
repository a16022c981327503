//! Legal-move generation, recruitment eligibility, and win detection
//!
//! Pure functions over a borrowed `BoardState`; nothing here mutates.
//! Generators return the empty set for malformed input (off-board starts)
//! instead of failing.

use std::ops::Range;

use rustc_hash::FxHashSet;

use crate::board::{self, Position, ADJACENT_SLOTS, DIAGONAL_SLOTS, JUMP_SLOTS, STRAIGHT_SLOTS};
use crate::setup::{self, CITIES};
use crate::state::BoardState;
use crate::units::{Color, Unit, UnitType};

/// All legal destinations for `unit` standing at `pos`, captures included
pub fn valid_moves(unit: Unit, pos: Position, board: &BoardState) -> FxHashSet<Position> {
    if !pos.in_bounds() {
        return FxHashSet::default();
    }

    match unit.kind {
        UnitType::Pawn => pawn_moves(unit, pos, board),
        UnitType::Rook => slide_moves(unit, pos, board, STRAIGHT_SLOTS),
        UnitType::Bishop => slide_moves(unit, pos, board, DIAGONAL_SLOTS),
        UnitType::Queen => slide_moves(unit, pos, board, ADJACENT_SLOTS),
        UnitType::Knight => hop_moves(unit, pos, board, JUMP_SLOTS),
        UnitType::King => hop_moves(unit, pos, board, ADJACENT_SLOTS),
    }
}

fn pawn_moves(unit: Unit, pos: Position, board: &BoardState) -> FxHashSet<Position> {
    let mut moves = FxHashSet::default();
    let dir = unit.color.forward();

    let front = pos.offset(0, dir);
    if front.in_bounds() && board.get(front).is_none() {
        moves.insert(front);
        // the double step is only allowed from the unit's own setup cell,
        // through an empty lane
        let lunge = pos.offset(0, 2 * dir);
        if setup::setup_unit(pos) == Some(unit) && lunge.in_bounds() && board.get(lunge).is_none() {
            moves.insert(lunge);
        }
    }

    // capture cells sit beside the move path, never on it
    for diag in [pos.offset(dir, 0), pos.offset(-dir, dir)] {
        if board.get(diag).is_some_and(|other| other.color != unit.color) {
            moves.insert(diag);
        }
    }

    moves
}

/// Walk each direction in `slots` until blocked; an enemy blocker is a
/// capture target, a friendly one is not
fn slide_moves(
    unit: Unit,
    pos: Position,
    board: &BoardState,
    slots: Range<usize>,
) -> FxHashSet<Position> {
    let mut moves = FxHashSet::default();

    for slot in slots {
        let mut curr = board::neighbor(pos, slot);
        while let Some(cell) = curr {
            match board.get(cell) {
                None => {
                    moves.insert(cell);
                }
                Some(other) => {
                    if other.color != unit.color {
                        moves.insert(cell);
                    }
                    break;
                }
            }
            curr = board::neighbor(cell, slot);
        }
    }

    moves
}

/// Single hop to each cell in `slots` that is empty or enemy-occupied
fn hop_moves(
    unit: Unit,
    pos: Position,
    board: &BoardState,
    slots: Range<usize>,
) -> FxHashSet<Position> {
    let mut moves = FxHashSet::default();

    if let Some(table) = board::neighbor_table(pos) {
        for &cell in table[slots].iter().flatten() {
            match board.get(cell) {
                None => {
                    moves.insert(cell);
                }
                Some(other) if other.color != unit.color => {
                    moves.insert(cell);
                }
                Some(_) => {}
            }
        }
    }

    moves
}

/// Cells where `color` may recruit `unit` from the graveyard.
///
/// Recruitment requires all of:
/// - `unit` is in that color's graveyard
/// - the color still has a King on the board
/// - the color's own capitol is occupied by one of its units
/// - the color holds at least 3 of the 6 cities
///
/// Eligible targets are the empty straight-neighbors of any city.
pub fn valid_recruitments(color: Color, unit: Unit, board: &BoardState) -> FxHashSet<Position> {
    let mut targets = FxHashSet::default();

    let holds_capitol = board
        .get(setup::capitol(color))
        .is_some_and(|occupant| occupant.color == color);

    if board.graveyard_contains(color, unit)
        && board.has_king(color)
        && holds_capitol
        && board.cities_held(color) >= 3
    {
        for city in CITIES {
            for slot in STRAIGHT_SLOTS {
                if let Some(cell) = board::neighbor(city, slot) {
                    if board.get(cell).is_none() {
                        targets.insert(cell);
                    }
                }
            }
        }
    }

    targets
}

/// The winner, if the game is over: a color that occupies both capitols,
/// or the survivor once the other side has no active units
pub fn winner(board: &BoardState) -> Option<Color> {
    if let (Some(a), Some(b)) = (board.get(CITIES[0]), board.get(CITIES[1])) {
        if a.color == b.color {
            return Some(a.color);
        }
    }
    if board.num_active(Color::Black) == 0 {
        return Some(Color::White);
    }
    if board.num_active(Color::White) == 0 {
        return Some(Color::Black);
    }
    None
}

/// Membership check used by drivers before committing a move
pub fn is_valid_move(unit: Unit, from: Position, to: Position, board: &BoardState) -> bool {
    valid_moves(unit, from, board).contains(&to)
}

/// Membership check used by drivers before committing a recruitment
pub fn can_recruit(color: Color, unit: Unit, to: Position, board: &BoardState) -> bool {
    valid_recruitments(color, unit, board).contains(&to)
}
