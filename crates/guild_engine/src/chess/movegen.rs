//! Pseudo-legal destinations per piece
//!
//! Pure geometry: whether the move leaves the mover's king attacked is the
//! legality filter's job (see [`super::rules`]). Castling is also handled
//! there because it depends on attacks.

use super::board::{ChessGrid, SIZE};
use super::piece::{Piece, PieceKind};
use crate::grid::Position;

pub(crate) const KNIGHT_STEPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Squares the piece on `from` could reach, ignoring king safety.
///
/// Empty for an empty square.
pub fn pseudo_destinations(grid: &ChessGrid, from: Position) -> Vec<Position> {
    let Some(piece) = grid.get(from) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn_destinations(grid, from, piece),
        PieceKind::Knight => step_destinations(grid, from, piece, &KNIGHT_STEPS),
        PieceKind::Bishop => slide_destinations(grid, from, piece, &DIAGONAL),
        PieceKind::Rook => slide_destinations(grid, from, piece, &ORTHOGONAL),
        PieceKind::Queen => {
            let mut moves = slide_destinations(grid, from, piece, &ORTHOGONAL);
            moves.extend(slide_destinations(grid, from, piece, &DIAGONAL));
            moves
        }
        PieceKind::King => step_destinations(grid, from, piece, &KING_STEPS),
    }
}

fn pawn_destinations(grid: &ChessGrid, from: Position, piece: Piece) -> Vec<Position> {
    let mut moves = Vec::new();
    let dir = piece.forward();
    let start_row = if dir < 0 { 6 } else { 1 };

    if let Some(one) = grid.offset(from, dir, 0) {
        if grid.get(one).is_none() {
            moves.push(one);
            if from.row == start_row {
                if let Some(two) = grid.offset(from, dir * 2, 0) {
                    if grid.get(two).is_none() {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(target) = grid.offset(from, dir, dc) {
            if grid.get(target).is_some_and(|p| p.color != piece.color) {
                moves.push(target);
            }
        }
    }

    moves
}

fn step_destinations(
    grid: &ChessGrid,
    from: Position,
    piece: Piece,
    steps: &[(i8, i8)],
) -> Vec<Position> {
    steps
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc, SIZE, SIZE))
        .filter(|to| grid.get(*to).is_none_or(|p| p.color != piece.color))
        .collect()
}

fn slide_destinations(
    grid: &ChessGrid,
    from: Position,
    piece: Piece,
    directions: &[(i8, i8)],
) -> Vec<Position> {
    let mut moves = Vec::new();
    for &(dr, dc) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(dr, dc, SIZE, SIZE) {
            match grid.get(next) {
                None => moves.push(next),
                Some(other) => {
                    if other.color != piece.color {
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

/// Every square strictly between `from` and `to` on a rank, file or
/// diagonal is empty
pub(crate) fn is_path_clear(grid: &ChessGrid, from: Position, to: Position) -> bool {
    let dr = from.row_delta(to).signum();
    let dc = from.col_delta(to).signum();
    let mut cursor = from;
    while let Some(next) = cursor.offset(dr, dc, SIZE, SIZE) {
        if next == to {
            return true;
        }
        if grid.get(next).is_some() {
            return false;
        }
        cursor = next;
    }
    false
}
