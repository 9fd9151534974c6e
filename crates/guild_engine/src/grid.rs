//! Board coordinates and fixed-size grids
//!
//! [`Grid`] is a plain `Copy` array. Applying a trial move copies the whole
//! board on the stack, so check-safety simulation and search never allocate
//! and never touch the caller's board.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A (row, column) coordinate. Row 0 is the top edge as seen by the side
/// that moves second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Step by `(dr, dc)`, returning `None` when the result leaves a
    /// `rows` x `cols` board.
    pub fn offset(self, dr: i8, dc: i8, rows: usize, cols: usize) -> Option<Position> {
        let row = i16::from(self.row) + i16::from(dr);
        let col = i16::from(self.col) + i16::from(dc);
        if row < 0 || col < 0 || row >= rows as i16 || col >= cols as i16 {
            return None;
        }
        Some(Position::new(row as u8, col as u8))
    }

    /// Midpoint of a two-step move, used by jumps and blocking checks
    pub fn midpoint(self, other: Position) -> Position {
        Position::new(
            ((u16::from(self.row) + u16::from(other.row)) / 2) as u8,
            ((u16::from(self.col) + u16::from(other.col)) / 2) as u8,
        )
    }

    pub fn row_delta(self, other: Position) -> i8 {
        other.row as i8 - self.row as i8
    }

    pub fn col_delta(self, other: Position) -> i8 {
        other.col as i8 - self.col as i8
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed `ROWS` x `COLS` board holding at most one `T` per square
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T: Copy, const ROWS: usize, const COLS: usize> {
    cells: [[Option<T>; COLS]; ROWS],
}

impl<T: Copy, const ROWS: usize, const COLS: usize> Default for Grid<T, ROWS, COLS> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Copy, const ROWS: usize, const COLS: usize> Grid<T, ROWS, COLS> {
    pub fn empty() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        (pos.row as usize) < ROWS && (pos.col as usize) < COLS
    }

    /// Piece on `pos`; `None` for empty squares and for coordinates off the board
    pub fn get(&self, pos: Position) -> Option<T> {
        self.cells
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
            .flatten()
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.contains(pos) && self.get(pos).is_none()
    }

    /// Overwrite a square. Writes outside the board are ignored.
    pub fn set(&mut self, pos: Position, value: Option<T>) {
        if let Some(cell) = self
            .cells
            .get_mut(pos.row as usize)
            .and_then(|row| row.get_mut(pos.col as usize))
        {
            *cell = value;
        }
    }

    /// Remove and return the piece on `pos`
    pub fn take(&mut self, pos: Position) -> Option<T> {
        let piece = self.get(pos);
        self.set(pos, None);
        piece
    }

    pub fn offset(&self, pos: Position, dr: i8, dc: i8) -> Option<Position> {
        pos.offset(dr, dc, ROWS, COLS)
    }

    /// Every coordinate in row-major order
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..ROWS).flat_map(|r| (0..COLS).map(move |c| Position::new(r as u8, c as u8)))
    }

    /// Occupied squares in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Position, T)> + '_ {
        Self::positions().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    /// First square holding a piece matching `pred`
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Position> {
        self.pieces().find(|(_, piece)| pred(piece)).map(|(pos, _)| pos)
    }
}
