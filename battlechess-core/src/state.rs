//! Board state and the move apply/undo protocol
//!
//! `BoardState` is mutated in place and rewound through an explicit history
//! stack. The search engine relies on this: a single instance is advanced
//! and unwound through the whole tree, never copied per node.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::setup::{self, CITIES};
use crate::units::{Color, Unit};

/// A move, immutable once constructed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Relocate a unit to an empty cell
    Step { unit: Unit, from: Position, to: Position },
    /// Capture the defender and take its cell
    Attack {
        attacker: Unit,
        from: Position,
        defender: Unit,
        to: Position,
    },
    /// Return a graveyard unit to the board
    Recruit { unit: Unit, to: Position },
}

impl Move {
    /// Cell the moving unit ends on
    pub fn destination(&self) -> Position {
        match *self {
            Move::Step { to, .. } | Move::Attack { to, .. } | Move::Recruit { to, .. } => to,
        }
    }

    /// The unit being moved or recruited
    pub fn unit(&self) -> Unit {
        match *self {
            Move::Step { unit, .. } | Move::Recruit { unit, .. } => unit,
            Move::Attack { attacker, .. } => attacker,
        }
    }
}

/// The authoritative mutable game state.
///
/// Invariant: every unit is either in one color's active map with a matching
/// occupancy entry, or in that color's graveyard with no occupancy entry.
/// The king flag for a color is true iff its active map holds a King.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardState {
    /// Occupied cells only; empty and off-board cells are absent
    cells: FxHashMap<Position, Unit>,
    /// Active units and their positions, per color
    active: [FxHashMap<Unit, Position>; 2],
    /// Captured units awaiting recruitment, per color
    graveyard: [FxHashSet<Unit>; 2],
    king_alive: [bool; 2],
    history: Vec<Move>,
}

impl BoardState {
    /// The canonical starting position
    pub fn new() -> Self {
        let placements: Vec<(Unit, Position)> =
            setup::setup_positions().map(|(pos, unit)| (unit, pos)).collect();
        Self::with_units(&placements)
    }

    /// A board holding exactly the given units, with empty graveyards
    pub fn with_units(units: &[(Unit, Position)]) -> Self {
        let mut state = Self {
            cells: FxHashMap::default(),
            active: [FxHashMap::default(), FxHashMap::default()],
            graveyard: [FxHashSet::default(), FxHashSet::default()],
            king_alive: [false, false],
            history: Vec::new(),
        };
        for &(unit, pos) in units {
            state.cells.insert(pos, unit);
            state.active[unit.color.index()].insert(unit, pos);
            if unit.is_king() {
                state.king_alive[unit.color.index()] = true;
            }
        }
        state
    }

    /// Occupant of `pos`; `None` for empty or out-of-bounds cells
    pub fn get(&self, pos: Position) -> Option<Unit> {
        self.cells.get(&pos).copied()
    }

    /// Mutate occupancy, membership, and king flags for `mv` and push it on
    /// the history stack. Trusts its input: legality is the rules engine's
    /// concern.
    pub fn apply_move(&mut self, mv: Move) {
        match mv {
            Move::Step { unit, from, to } => {
                self.cells.remove(&from);
                self.cells.insert(to, unit);
                self.active[unit.color.index()].insert(unit, to);
            }
            Move::Attack { attacker, from, defender, to } => {
                self.cells.remove(&from);
                self.cells.insert(to, attacker);
                self.active[attacker.color.index()].insert(attacker, to);
                self.active[defender.color.index()].remove(&defender);
                self.graveyard[defender.color.index()].insert(defender);
                if defender.is_king() {
                    self.king_alive[defender.color.index()] = false;
                }
            }
            Move::Recruit { unit, to } => {
                self.graveyard[unit.color.index()].remove(&unit);
                self.active[unit.color.index()].insert(unit, to);
                self.cells.insert(to, unit);
                if unit.is_king() {
                    self.king_alive[unit.color.index()] = true;
                }
            }
        }
        self.history.push(mv);
    }

    /// Pop the last applied move and restore the exact prior state.
    /// No-op on an empty history.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.history.pop() else {
            return;
        };
        match mv {
            Move::Step { unit, from, to } => {
                self.cells.remove(&to);
                self.cells.insert(from, unit);
                self.active[unit.color.index()].insert(unit, from);
            }
            Move::Attack { attacker, from, defender, to } => {
                self.cells.insert(from, attacker);
                self.active[attacker.color.index()].insert(attacker, from);
                self.graveyard[defender.color.index()].remove(&defender);
                self.active[defender.color.index()].insert(defender, to);
                self.cells.insert(to, defender);
                if defender.is_king() {
                    self.king_alive[defender.color.index()] = true;
                }
            }
            Move::Recruit { unit, to } => {
                self.cells.remove(&to);
                self.active[unit.color.index()].remove(&unit);
                self.graveyard[unit.color.index()].insert(unit);
                if unit.is_king() {
                    // another recruited king may still be on the board
                    self.king_alive[unit.color.index()] =
                        self.active[unit.color.index()].keys().any(Unit::is_king);
                }
            }
        }
    }

    /// Active units of a color with their positions
    pub fn active_units(&self, color: Color) -> impl Iterator<Item = (Unit, Position)> + '_ {
        self.active[color.index()].iter().map(|(&unit, &pos)| (unit, pos))
    }

    /// Head count of a color's units on the board
    pub fn num_active(&self, color: Color) -> usize {
        self.active[color.index()].len()
    }

    /// Current position of an active unit
    pub fn position_of(&self, unit: Unit) -> Option<Position> {
        self.active[unit.color.index()].get(&unit).copied()
    }

    /// A color's captured units
    pub fn graveyard(&self, color: Color) -> impl Iterator<Item = Unit> + '_ {
        self.graveyard[color.index()].iter().copied()
    }

    pub fn graveyard_contains(&self, color: Color, unit: Unit) -> bool {
        self.graveyard[color.index()].contains(&unit)
    }

    /// Whether the color still has a King on the board
    pub fn has_king(&self, color: Color) -> bool {
        self.king_alive[color.index()]
    }

    /// Number of the six cities occupied by a same-color unit
    pub fn cities_held(&self, color: Color) -> usize {
        CITIES
            .iter()
            .filter(|city| self.get(**city).is_some_and(|unit| unit.color == color))
            .count()
    }

    /// Number of moves on the history stack
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitType;

    fn pawn(color: Color, id: u8) -> Unit {
        Unit::new(UnitType::Pawn, color, id)
    }

    #[test]
    fn test_starting_board() {
        let board = BoardState::new();
        assert_eq!(board.num_active(Color::Black), 18);
        assert_eq!(board.num_active(Color::White), 18);
        assert!(board.has_king(Color::Black));
        assert!(board.has_king(Color::White));
        assert_eq!(board.graveyard(Color::Black).count(), 0);
        assert_eq!(board.cities_held(Color::Black), 1);
        assert_eq!(board.cities_held(Color::White), 1);
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let board = BoardState::new();
        assert_eq!(board.get(Position::new(7, 7)), None);
    }

    #[test]
    fn test_step_apply_and_undo() {
        let mut board = BoardState::new();
        let unit = board.get(Position::new(0, 1)).unwrap();
        let before = board.clone();

        let mv = Move::Step {
            unit,
            from: Position::new(0, 1),
            to: Position::new(0, 0),
        };
        board.apply_move(mv);
        assert_eq!(board.get(Position::new(0, 1)), None);
        assert_eq!(board.get(Position::new(0, 0)), Some(unit));
        assert_eq!(board.position_of(unit), Some(Position::new(0, 0)));

        board.undo_move();
        assert_eq!(board, before);
    }

    #[test]
    fn test_attack_apply_and_undo() {
        let attacker = pawn(Color::White, 1);
        let defender = Unit::new(UnitType::King, Color::Black, 1);
        let mut board = BoardState::with_units(&[
            (attacker, Position::new(0, 1)),
            (defender, Position::new(0, 0)),
        ]);
        let before = board.clone();

        let mv = Move::Attack {
            attacker,
            from: Position::new(0, 1),
            defender,
            to: Position::new(0, 0),
        };
        board.apply_move(mv);
        assert_eq!(board.get(Position::new(0, 0)), Some(attacker));
        assert_eq!(board.num_active(Color::Black), 0);
        assert!(board.graveyard_contains(Color::Black, defender));
        assert!(!board.has_king(Color::Black));

        board.undo_move();
        assert_eq!(board, before);
        assert!(board.has_king(Color::Black));
    }

    #[test]
    fn test_recruit_apply_and_undo() {
        let attacker = pawn(Color::White, 1);
        let victim = pawn(Color::Black, 1);
        let mut board = BoardState::with_units(&[
            (attacker, Position::new(0, 1)),
            (victim, Position::new(0, 0)),
        ]);
        board.apply_move(Move::Attack {
            attacker,
            from: Position::new(0, 1),
            defender: victim,
            to: Position::new(0, 0),
        });
        let before = board.clone();

        let mv = Move::Recruit {
            unit: victim,
            to: Position::new(2, 2),
        };
        board.apply_move(mv);
        assert_eq!(board.get(Position::new(2, 2)), Some(victim));
        assert!(!board.graveyard_contains(Color::Black, victim));
        assert_eq!(board.num_active(Color::Black), 1);

        board.undo_move();
        assert_eq!(board, before);
    }

    #[test]
    fn test_recruit_undo_restores_king_flag() {
        let attacker = Unit::new(UnitType::Queen, Color::White, 0);
        let king = Unit::new(UnitType::King, Color::Black, 1);
        let mut board = BoardState::with_units(&[
            (attacker, Position::new(0, 1)),
            (king, Position::new(0, 0)),
        ]);
        board.apply_move(Move::Attack {
            attacker,
            from: Position::new(0, 1),
            defender: king,
            to: Position::new(0, 0),
        });
        assert!(!board.has_king(Color::Black));

        board.apply_move(Move::Recruit {
            unit: king,
            to: Position::new(3, 0),
        });
        assert!(board.has_king(Color::Black));

        board.undo_move();
        assert!(!board.has_king(Color::Black));
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut board = BoardState::new();
        let before = board.clone();
        board.undo_move();
        assert_eq!(board, before);
    }

    #[test]
    fn test_deep_round_trip() {
        // walk a chain of moves forward and all the way back
        let mut board = BoardState::new();
        let before = board.clone();

        let white_pawn = board.get(Position::new(0, 1)).unwrap();
        let black_pawn = board.get(Position::new(0, -1)).unwrap();
        board.apply_move(Move::Step {
            unit: white_pawn,
            from: Position::new(0, 1),
            to: Position::new(0, 0),
        });
        board.apply_move(Move::Attack {
            attacker: black_pawn,
            from: Position::new(0, -1),
            defender: white_pawn,
            to: Position::new(0, 0),
        });
        board.apply_move(Move::Step {
            unit: black_pawn,
            from: Position::new(0, 0),
            to: Position::new(0, 1),
        });
        assert_eq!(board.history_len(), 3);

        board.undo_move();
        board.undo_move();
        board.undo_move();
        assert_eq!(board, before);
    }
}
