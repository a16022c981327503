//! Initial game data: cities, capitols, and the starting armies

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::board::Position;
use crate::units::{Color, Unit, UnitType};

/// The six city cells. The first two are the capitols: Black's at (0,-5),
/// White's at (0,5).
pub const CITIES: [Position; 6] = [
    Position::new(0, -5),
    Position::new(0, 5),
    Position::new(-5, 0),
    Position::new(5, -5),
    Position::new(5, 0),
    Position::new(-5, 5),
];

/// Capitol city of a color
pub const fn capitol(color: Color) -> Position {
    match color {
        Color::Black => CITIES[0],
        Color::White => CITIES[1],
    }
}

/// Starting placements: (x, y, kind, color, serial id)
const SETUP: [(i8, i8, UnitType, Color, u8); 36] = [
    (-4, -1, UnitType::Pawn, Color::Black, 1),
    (-3, -1, UnitType::Pawn, Color::Black, 2),
    (-2, -1, UnitType::Pawn, Color::Black, 3),
    (-1, -1, UnitType::Pawn, Color::Black, 4),
    (0, -1, UnitType::Pawn, Color::Black, 5),
    (1, -2, UnitType::Pawn, Color::Black, 6),
    (2, -3, UnitType::Pawn, Color::Black, 7),
    (3, -4, UnitType::Pawn, Color::Black, 8),
    (4, -5, UnitType::Pawn, Color::Black, 9),
    (-3, -2, UnitType::Rook, Color::Black, 1),
    (3, -5, UnitType::Rook, Color::Black, 2),
    (-2, -3, UnitType::Knight, Color::Black, 1),
    (2, -5, UnitType::Knight, Color::Black, 2),
    (-1, -4, UnitType::King, Color::Black, 1),
    (1, -5, UnitType::Queen, Color::Black, 0),
    (0, -5, UnitType::Bishop, Color::Black, 1),
    (0, -4, UnitType::Bishop, Color::Black, 2),
    (0, -3, UnitType::Bishop, Color::Black, 3),
    (4, 1, UnitType::Pawn, Color::White, 1),
    (3, 1, UnitType::Pawn, Color::White, 2),
    (2, 1, UnitType::Pawn, Color::White, 3),
    (1, 1, UnitType::Pawn, Color::White, 4),
    (0, 1, UnitType::Pawn, Color::White, 5),
    (-1, 2, UnitType::Pawn, Color::White, 6),
    (-2, 3, UnitType::Pawn, Color::White, 7),
    (-3, 4, UnitType::Pawn, Color::White, 8),
    (-4, 5, UnitType::Pawn, Color::White, 9),
    (3, 2, UnitType::Rook, Color::White, 1),
    (-3, 5, UnitType::Rook, Color::White, 2),
    (2, 3, UnitType::Knight, Color::White, 1),
    (-2, 5, UnitType::Knight, Color::White, 2),
    (1, 4, UnitType::King, Color::White, 1),
    (-1, 5, UnitType::Queen, Color::White, 0),
    (0, 5, UnitType::Bishop, Color::White, 1),
    (0, 4, UnitType::Bishop, Color::White, 2),
    (0, 3, UnitType::Bishop, Color::White, 3),
];

/// pos -> unit at game setup, built once
static SETUP_POSITIONS: LazyLock<FxHashMap<Position, Unit>> = LazyLock::new(|| {
    SETUP
        .iter()
        .map(|&(x, y, kind, color, id)| (Position::new(x, y), Unit::new(kind, color, id)))
        .collect()
});

/// The unit that starts the game on `pos`, if any
pub fn setup_unit(pos: Position) -> Option<Unit> {
    SETUP_POSITIONS.get(&pos).copied()
}

/// Iterate the starting placements
pub fn setup_positions() -> impl Iterator<Item = (Position, Unit)> {
    SETUP_POSITIONS.iter().map(|(&pos, &unit)| (pos, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cities_in_bounds() {
        for city in CITIES {
            assert!(city.in_bounds(), "{:?} is off-board", city);
        }
    }

    #[test]
    fn test_capitols_are_first_two_cities() {
        assert_eq!(capitol(Color::Black), CITIES[0]);
        assert_eq!(capitol(Color::White), CITIES[1]);
    }

    #[test]
    fn test_armies_complete() {
        assert_eq!(SETUP_POSITIONS.len(), 36);
        for color in [Color::Black, Color::White] {
            let count = |kind| {
                setup_positions()
                    .filter(|(_, u)| u.color == color && u.kind == kind)
                    .count()
            };
            assert_eq!(count(UnitType::Pawn), 9);
            assert_eq!(count(UnitType::Rook), 2);
            assert_eq!(count(UnitType::Knight), 2);
            assert_eq!(count(UnitType::Bishop), 3);
            assert_eq!(count(UnitType::Queen), 1);
            assert_eq!(count(UnitType::King), 1);
        }
    }

    #[test]
    fn test_placements_in_bounds() {
        for (pos, _) in setup_positions() {
            assert!(pos.in_bounds(), "{:?} is off-board", pos);
        }
    }

    #[test]
    fn test_capitols_start_held_by_owner() {
        assert_eq!(setup_unit(capitol(Color::Black)).unwrap().color, Color::Black);
        assert_eq!(setup_unit(capitol(Color::White)).unwrap().color, Color::White);
    }
}
