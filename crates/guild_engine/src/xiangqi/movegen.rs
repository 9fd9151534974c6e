//! Pseudo-legal destinations per piece
//!
//! Blocking rules (horse leg, elephant eye, cannon screen) and the
//! confinement zones (palace, own half) are geometric and live here. Check
//! safety and the facing-generals rule live in [`super::rules`].

use super::board::{in_palace, XiangqiGrid, COLS, ROWS};
use super::piece::{Piece, PieceKind};
use crate::grid::Position;

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Horse jumps as (leg, destination) offsets
const HORSE_JUMPS: [((i8, i8), (i8, i8)); 8] = [
    ((-1, 0), (-2, -1)),
    ((-1, 0), (-2, 1)),
    ((1, 0), (2, -1)),
    ((1, 0), (2, 1)),
    ((0, -1), (-1, -2)),
    ((0, -1), (1, -2)),
    ((0, 1), (-1, 2)),
    ((0, 1), (1, 2)),
];

/// Squares the piece on `from` could reach, ignoring check
pub fn pseudo_destinations(grid: &XiangqiGrid, from: Position) -> Vec<Position> {
    let Some(piece) = grid.get(from) else {
        return Vec::new();
    };

    let candidates = match piece.kind {
        PieceKind::General => steps(from, &ORTHOGONAL)
            .filter(|to| in_palace(piece.side, *to))
            .collect(),
        PieceKind::Advisor => steps(from, &DIAGONAL)
            .filter(|to| in_palace(piece.side, *to))
            .collect(),
        PieceKind::Elephant => elephant(grid, from, piece),
        PieceKind::Horse => horse(grid, from),
        PieceKind::Chariot => chariot(grid, from),
        PieceKind::Cannon => cannon(grid, from, piece),
        PieceKind::Soldier => soldier(from, piece),
    };

    candidates
        .into_iter()
        .filter(|to| grid.get(*to).is_none_or(|other| other.side != piece.side))
        .collect()
}

fn steps(from: Position, offsets: &[(i8, i8)]) -> impl Iterator<Item = Position> + '_ {
    offsets
        .iter()
        .filter_map(move |&(dr, dc)| from.offset(dr, dc, ROWS, COLS))
}

fn elephant(grid: &XiangqiGrid, from: Position, piece: Piece) -> Vec<Position> {
    DIAGONAL
        .iter()
        .filter_map(|&(dr, dc)| {
            let eye = from.offset(dr, dc, ROWS, COLS)?;
            let to = from.offset(dr * 2, dc * 2, ROWS, COLS)?;
            (grid.get(eye).is_none() && piece.side.owns_row(to.row)).then_some(to)
        })
        .collect()
}

fn horse(grid: &XiangqiGrid, from: Position) -> Vec<Position> {
    HORSE_JUMPS
        .iter()
        .filter_map(|&((lr, lc), (dr, dc))| {
            let leg = from.offset(lr, lc, ROWS, COLS)?;
            let to = from.offset(dr, dc, ROWS, COLS)?;
            grid.get(leg).is_none().then_some(to)
        })
        .collect()
}

fn chariot(grid: &XiangqiGrid, from: Position) -> Vec<Position> {
    let mut moves = Vec::new();
    for &(dr, dc) in &ORTHOGONAL {
        let mut cursor = from;
        while let Some(next) = cursor.offset(dr, dc, ROWS, COLS) {
            moves.push(next);
            if grid.get(next).is_some() {
                break;
            }
            cursor = next;
        }
    }
    moves
}

/// Slides like a chariot onto empty squares; captures only by jumping
/// exactly one screen piece
fn cannon(grid: &XiangqiGrid, from: Position, piece: Piece) -> Vec<Position> {
    let mut moves = Vec::new();
    for &(dr, dc) in &ORTHOGONAL {
        let mut cursor = from;
        let mut screened = false;
        while let Some(next) = cursor.offset(dr, dc, ROWS, COLS) {
            match (grid.get(next), screened) {
                (None, false) => moves.push(next),
                (None, true) => {}
                (Some(_), false) => screened = true,
                (Some(target), true) => {
                    if target.side != piece.side {
                        moves.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
    moves
}

fn soldier(from: Position, piece: Piece) -> Vec<Position> {
    let mut moves: Vec<Position> = from
        .offset(piece.side.forward(), 0, ROWS, COLS)
        .into_iter()
        .collect();
    if !piece.side.owns_row(from.row) {
        moves.extend(steps(from, &[(0, -1), (0, 1)]));
    }
    moves
}
