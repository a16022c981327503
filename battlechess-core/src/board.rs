//! Hex board geometry with axial coordinates

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Board radius (distance from center to edge)
pub const BOARD_RADIUS: i8 = 5;

/// Number of in-bounds cells on the board
pub const NUM_CELLS: usize = 91;

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Check if this position is on the board
    pub fn in_bounds(&self) -> bool {
        self.x.abs() <= BOARD_RADIUS
            && self.y.abs() <= BOARD_RADIUS
            && (self.x + self.y).abs() <= BOARD_RADIUS
    }

    /// The position displaced by (dx, dy)
    pub fn offset(&self, dx: i8, dy: i8) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }
}

/// Straight direction vectors (dx, dy), adjacency slots 0-5
pub const STRAIGHT_OFFSETS: [(i8, i8); 6] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// Diagonal direction vectors, adjacency slots 6-11
pub const DIAGONAL_OFFSETS: [(i8, i8); 6] = [
    (-1, -1),
    (1, -2),
    (2, -1),
    (1, 1),
    (-1, 2),
    (-2, 1),
];

/// Knight-jump vectors, adjacency slots 12-23
pub const JUMP_OFFSETS: [(i8, i8); 12] = [
    (-2, -1),
    (-1, -2),
    (1, -3),
    (2, -3),
    (3, -2),
    (3, -1),
    (2, 1),
    (1, 2),
    (-1, 3),
    (-2, 3),
    (-3, 2),
    (-3, 1),
];

/// Slot ranges into a [`NeighborTable`]
pub const STRAIGHT_SLOTS: std::ops::Range<usize> = 0..6;
pub const DIAGONAL_SLOTS: std::ops::Range<usize> = 6..12;
pub const ADJACENT_SLOTS: std::ops::Range<usize> = 0..12;
pub const JUMP_SLOTS: std::ops::Range<usize> = 12..24;

/// Per-cell neighbor lookup: 6 straight, 6 diagonal, 12 jump entries.
/// `None` where the neighbor falls off the board.
pub type NeighborTable = [Option<Position>; 24];

/// Neighbor tables for all 91 cells, built once and never mutated
static ADJACENCY: LazyLock<FxHashMap<Position, NeighborTable>> = LazyLock::new(|| {
    let mut map = FxHashMap::default();
    for pos in all_positions() {
        let mut table: NeighborTable = [None; 24];
        let offsets = STRAIGHT_OFFSETS
            .iter()
            .chain(DIAGONAL_OFFSETS.iter())
            .chain(JUMP_OFFSETS.iter());
        for (slot, &(dx, dy)) in offsets.enumerate() {
            let neighbor = pos.offset(dx, dy);
            if neighbor.in_bounds() {
                table[slot] = Some(neighbor);
            }
        }
        map.insert(pos, table);
    }
    map
});

/// Iterate every in-bounds position
pub fn all_positions() -> impl Iterator<Item = Position> {
    (-BOARD_RADIUS..=BOARD_RADIUS).flat_map(|x| {
        (-BOARD_RADIUS..=BOARD_RADIUS)
            .map(move |y| Position::new(x, y))
            .filter(Position::in_bounds)
    })
}

/// Full 24-slot neighbor table for an in-bounds position
pub fn neighbor_table(pos: Position) -> Option<&'static NeighborTable> {
    ADJACENCY.get(&pos)
}

/// Neighbor of `pos` in adjacency slot `slot`, if it exists on the board
pub fn neighbor(pos: Position, slot: usize) -> Option<Position> {
    ADJACENCY.get(&pos).and_then(|table| table[slot])
}
