//! Connected groups and their liberties
//!
//! Groups are recomputed from the board whenever they are needed and never
//! stored.

use std::collections::BTreeSet;

use super::board::GoBoard;
use crate::color::Color;
use crate::grid::Position;

/// A maximal 4-connected set of same-coloured stones
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub color: Color,
    pub stones: Vec<Position>,
    /// Distinct empty points adjacent to the group, sorted
    pub liberties: Vec<Position>,
}

impl Group {
    pub fn is_captured(&self) -> bool {
        self.liberties.is_empty()
    }

    pub fn in_atari(&self) -> bool {
        self.liberties.len() == 1
    }
}

/// Flood-fill the group containing `start`; `None` on an empty point
pub fn group_at(board: &GoBoard, start: Position) -> Option<Group> {
    let color = board.get(start)?;
    let mut seen = BTreeSet::from([start]);
    let mut stack = vec![start];
    let mut stones = Vec::new();
    let mut liberties = BTreeSet::new();

    while let Some(pos) = stack.pop() {
        stones.push(pos);
        for next in board.neighbors(pos) {
            match board.get(next) {
                None => {
                    liberties.insert(next);
                }
                Some(c) if c == color && seen.insert(next) => stack.push(next),
                Some(_) => {}
            }
        }
    }

    stones.sort();
    Some(Group {
        color,
        stones,
        liberties: liberties.into_iter().collect(),
    })
}

/// Every group on the board, ordered by its first stone in row-major order
pub fn groups(board: &GoBoard) -> Vec<Group> {
    let mut visited = BTreeSet::new();
    let mut found = Vec::new();
    for pos in board.points() {
        if visited.contains(&pos) {
            continue;
        }
        if let Some(group) = group_at(board, pos) {
            visited.extend(group.stones.iter().copied());
            found.push(group);
        }
    }
    found
}
