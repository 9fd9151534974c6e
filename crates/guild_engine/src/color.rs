//! Sides of the table

use std::fmt;

use serde::{Deserialize, Serialize};

/// Anything that names one of the two players
///
/// Implemented by [`Color`] and by Xiangqi's red/black side so the shared
/// tallies and the search can index per-player data without knowing which
/// game they serve.
pub trait Seat: Copy + Eq + fmt::Debug {
    /// 0 for white (red in Xiangqi), 1 for black
    fn index(self) -> usize;

    fn opponent(self) -> Self;
}

/// White/black, used by chess, checkers, Go and Nine Men's Morris.
///
/// Go's first mover is black; the game module decides who starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Seat for Color {
    fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    fn opponent(self) -> Self {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}
