//! Xiangqi pieces and sides

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Seat;

/// Red moves first and starts on rows 5-9
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Black,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row direction of a soldier's forward step
    pub fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// Whether `row` lies on this side's half of the river
    pub fn owns_row(self, row: u8) -> bool {
        match self {
            Side::Red => row >= 5,
            Side::Black => row <= 4,
        }
    }

    /// Palace rows for this side; palace columns are 3-5 for both
    pub fn palace_rows(self) -> std::ops::RangeInclusive<u8> {
        match self {
            Side::Red => 7..=9,
            Side::Black => 0..=2,
        }
    }
}

impl Seat for Side {
    fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Black => 1,
        }
    }

    fn opponent(self) -> Self {
        self.opposite()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => f.write_str("red"),
            Side::Black => f.write_str("black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    General,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Soldier,
}

impl PieceKind {
    /// Heuristic value used by the opponent
    pub fn value(self) -> f64 {
        match self {
            PieceKind::General => 100.0,
            PieceKind::Chariot => 9.0,
            PieceKind::Cannon => 4.5,
            PieceKind::Horse => 4.0,
            PieceKind::Advisor | PieceKind::Elephant => 2.0,
            PieceKind::Soldier => 1.0,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::General => "general",
            PieceKind::Advisor => "advisor",
            PieceKind::Elephant => "elephant",
            PieceKind::Horse => "horse",
            PieceKind::Chariot => "chariot",
            PieceKind::Cannon => "cannon",
            PieceKind::Soldier => "soldier",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }
}
