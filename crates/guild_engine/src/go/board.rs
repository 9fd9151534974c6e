//! Go board with copy-on-write storage
//!
//! Points live in a shared `Arc<Vec<_>>`. Cloning a board is a pointer
//! copy; the first write to a shared board copies the points once. Move
//! history and the opponent's trial placements therefore share every
//! untouched snapshot.

use std::sync::Arc;

use crate::color::Color;
use crate::error::{RulesError, RulesResult};
use crate::grid::Position;

/// Board sizes accepted by [`GoBoard::new`]
pub const SUPPORTED_SIZES: [usize; 3] = [9, 13, 19];

const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoBoard {
    size: usize,
    points: Arc<Vec<Option<Color>>>,
}

impl GoBoard {
    /// Empty `size` x `size` board
    ///
    /// # Errors
    ///
    /// `InvalidBoardSize` unless `size` is 9, 13 or 19.
    pub fn new(size: usize) -> RulesResult<Self> {
        if !SUPPORTED_SIZES.contains(&size) {
            return Err(RulesError::InvalidBoardSize { size });
        }
        Ok(Self {
            size,
            points: Arc::new(vec![None; size * size]),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.row as usize * self.size + pos.col as usize)
    }

    /// Stone on `pos`; `None` when empty or off the board
    pub fn get(&self, pos: Position) -> Option<Color> {
        self.index(pos).and_then(|i| self.points[i])
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.contains(pos) && self.get(pos).is_none()
    }

    /// Write a point, copying shared storage first. Off-board writes are ignored.
    pub fn set(&mut self, pos: Position, stone: Option<Color>) {
        if let Some(i) = self.index(pos) {
            Arc::make_mut(&mut self.points)[i] = stone;
        }
    }

    /// Orthogonal neighbours inside the board
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> {
        let size = self.size;
        DIRECTIONS
            .into_iter()
            .filter_map(move |(dr, dc)| pos.offset(dr, dc, size, size))
    }

    /// Every point in row-major order
    pub fn points(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |r| (0..size).map(move |c| Position::new(r as u8, c as u8)))
    }

    pub fn stones(&self, color: Color) -> usize {
        self.points.iter().filter(|p| **p == Some(color)).count()
    }

    /// Whether two boards still share storage
    pub fn shares_storage_with(&self, other: &GoBoard) -> bool {
        Arc::ptr_eq(&self.points, &other.points)
    }
}
