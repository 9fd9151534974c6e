//! Checkers board and pieces
//!
//! Pieces stand on dark squares, where `(row + col)` is odd. Black fills
//! rows 0-2, white rows 5-7, and white moves first toward row 0.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::grid::{Grid, Position};

pub const SIZE: usize = 8;

pub type CheckersGrid = Grid<Checker, SIZE, SIZE>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checker {
    pub color: Color,
    pub king: bool,
}

impl Checker {
    pub const fn man(color: Color) -> Self {
        Self { color, king: false }
    }

    pub const fn king(color: Color) -> Self {
        Self { color, king: true }
    }

    /// Diagonal directions this piece may move and jump in
    pub fn directions(self) -> &'static [(i8, i8)] {
        const ALL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
        const UP: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
        const DOWN: [(i8, i8); 2] = [(1, -1), (1, 1)];
        match (self.king, self.color) {
            (true, _) => &ALL,
            (false, Color::White) => &UP,
            (false, Color::Black) => &DOWN,
        }
    }
}

/// Row on which a man of `color` is crowned
pub fn crowning_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// A checkers position
///
/// `continuing_from` is set while the side to move is in the middle of a
/// multi-jump; only that piece may move and only by jumping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CheckersBoard {
    pub grid: CheckersGrid,
    pub to_move: Color,
    pub continuing_from: Option<Position>,
}

impl Default for CheckersBoard {
    fn default() -> Self {
        Self::initial()
    }
}

impl CheckersBoard {
    pub fn initial() -> Self {
        let mut grid = CheckersGrid::empty();
        for pos in CheckersGrid::positions().filter(|p| is_dark(*p)) {
            match pos.row {
                0..=2 => grid.set(pos, Some(Checker::man(Color::Black))),
                5..=7 => grid.set(pos, Some(Checker::man(Color::White))),
                _ => {}
            }
        }
        Self {
            grid,
            to_move: Color::White,
            continuing_from: None,
        }
    }

    pub fn empty(to_move: Color) -> Self {
        Self {
            grid: CheckersGrid::empty(),
            to_move,
            continuing_from: None,
        }
    }

    pub fn with_piece(mut self, pos: Position, piece: Checker) -> Self {
        self.grid.set(pos, Some(piece));
        self
    }

    pub fn count(&self, color: Color) -> usize {
        self.grid.pieces().filter(|(_, p)| p.color == color).count()
    }
}

pub fn is_dark(pos: Position) -> bool {
    (pos.row + pos.col) % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        //! Twelve men a side, all on dark squares
        let board = CheckersBoard::initial();
        assert_eq!(board.count(Color::White), 12);
        assert_eq!(board.count(Color::Black), 12);
        assert!(board.grid.pieces().all(|(pos, _)| is_dark(pos)));
        assert_eq!(board.grid.get(Position::new(5, 0)), Some(Checker::man(Color::White)));
        assert_eq!(board.to_move, Color::White);
    }

    #[test]
    fn test_directions() {
        assert_eq!(Checker::man(Color::White).directions().len(), 2);
        assert!(Checker::man(Color::White).directions().iter().all(|(dr, _)| *dr == -1));
        assert_eq!(Checker::king(Color::Black).directions().len(), 4);
    }
}
