//! Unit identity types

use serde::{Deserialize, Serialize};

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction of pawn advance along the y axis
    pub fn forward(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }
}

/// The six unit kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Pawn,
    Knight,
    Rook,
    Bishop,
    Queen,
    King,
}

/// A game unit. Identity is (kind, color, id); the serial id tells apart
/// same-kind, same-color units. Board position lives in `BoardState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub kind: UnitType,
    pub color: Color,
    pub id: u8,
}

impl Unit {
    pub const fn new(kind: UnitType, color: Color, id: u8) -> Self {
        Self { kind, color, id }
    }

    pub fn is_king(&self) -> bool {
        self.kind == UnitType::King
    }
}
