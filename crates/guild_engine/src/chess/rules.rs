//! Legality filter and move application
//!
//! A pseudo-legal move is legal when, played on a scratch copy of the
//! board, it leaves the mover's king unattacked. Castling adds its own
//! conditions on top (see [`castling_destinations`]).

use serde::{Deserialize, Serialize};

use super::attack::{is_in_check, is_square_attacked};
use super::board::{ChessBoard, KINGSIDE_ROOK_COL, KING_COL, QUEENSIDE_ROOK_COL};
use super::movegen::{is_path_clear, pseudo_destinations};
use super::piece::{home_row, Piece, PieceKind};
use crate::grid::Position;

/// A chess move
///
/// Castling is written as the king's two-square move. `promotion` is only
/// meaningful for a pawn reaching the last rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessMove {
    pub from: Position,
    pub to: Position,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    pub const fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub const fn promoting(from: Position, to: Position, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

/// Legal destinations for the piece on `from`, for whichever side owns it
pub fn legal_destinations(board: &ChessBoard, from: Position) -> Vec<Position> {
    let Some(piece) = board.grid.get(from) else {
        return Vec::new();
    };

    let mut moves: Vec<Position> = pseudo_destinations(&board.grid, from)
        .into_iter()
        .filter(|to| !leaves_king_attacked(board, piece, ChessMove::new(from, *to)))
        .collect();

    if piece.kind == PieceKind::King {
        moves.extend(castling_destinations(board, from, piece));
    }
    moves
}

/// Every legal move for the side to move. Promotions are generated as
/// queen promotions only.
pub fn all_legal_moves(board: &ChessBoard) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    for (from, piece) in board.grid.pieces() {
        if piece.color != board.to_move {
            continue;
        }
        for to in legal_destinations(board, from) {
            if is_promotion_square(piece, to) {
                moves.push(ChessMove::promoting(from, to, PieceKind::Queen));
            } else {
                moves.push(ChessMove::new(from, to));
            }
        }
    }
    moves
}

/// Whether the side to move has at least one legal move
pub fn has_legal_move(board: &ChessBoard) -> bool {
    board
        .grid
        .pieces()
        .filter(|(_, piece)| piece.color == board.to_move)
        .any(|(from, _)| !legal_destinations(board, from).is_empty())
}

pub fn is_promotion_square(piece: Piece, to: Position) -> bool {
    piece.kind == PieceKind::Pawn && to.row == home_row(piece.color.opposite())
}

pub fn is_castling(piece: Piece, mv: &ChessMove) -> bool {
    piece.kind == PieceKind::King && mv.from.col_delta(mv.to).abs() == 2
}

/// Apply `mv` without checking it. Flips the side to move.
///
/// A pawn reaching the last rank with `promotion: None` stays a pawn; the
/// game state turns that into a pending promotion.
pub fn play(board: &ChessBoard, mv: ChessMove) -> ChessBoard {
    let mut next = *board;
    let Some(piece) = next.grid.take(mv.from) else {
        return next;
    };

    let placed = match mv.promotion {
        Some(kind) if is_promotion_square(piece, mv.to) => Piece::new(kind, piece.color),
        _ => piece,
    };
    next.grid.set(mv.to, Some(placed));

    if is_castling(piece, &mv) {
        let row = mv.from.row;
        let (rook_from, rook_to) = if mv.to.col > mv.from.col {
            (KINGSIDE_ROOK_COL, KING_COL + 1)
        } else {
            (QUEENSIDE_ROOK_COL, KING_COL - 1)
        };
        let rook = next.grid.take(Position::new(row, rook_from));
        next.grid.set(Position::new(row, rook_to), rook);
    }

    next.castling.touch(mv.from);
    next.castling.touch(mv.to);
    next.to_move = board.to_move.opposite();
    next
}

fn leaves_king_attacked(board: &ChessBoard, piece: Piece, mv: ChessMove) -> bool {
    let after = play(board, mv);
    is_in_check(&after.grid, piece.color)
}

/// Castling destinations for the king on `from`
///
/// Requires the castling right (king and rook unmoved), the rook on its
/// home square, empty squares between them, the king not in check, and
/// neither the square it crosses nor the one it lands on attacked.
fn castling_destinations(board: &ChessBoard, from: Position, king: Piece) -> Vec<Position> {
    let row = home_row(king.color);
    if from != Position::new(row, KING_COL) {
        return Vec::new();
    }
    let enemy = king.color.opposite();
    if is_square_attacked(&board.grid, from, enemy) {
        return Vec::new();
    }

    let mut moves = Vec::new();
    let sides = [
        (board.castling.kingside(king.color), KINGSIDE_ROOK_COL, 1i8),
        (board.castling.queenside(king.color), QUEENSIDE_ROOK_COL, -1i8),
    ];
    for (allowed, rook_col, dir) in sides {
        if !allowed {
            continue;
        }
        let rook_square = Position::new(row, rook_col);
        let rook_home = board.grid.get(rook_square)
            == Some(Piece::new(PieceKind::Rook, king.color));
        if !rook_home || !is_path_clear(&board.grid, from, rook_square) {
            continue;
        }
        let crossing = Position::new(row, (KING_COL as i8 + dir) as u8);
        let landing = Position::new(row, (KING_COL as i8 + 2 * dir) as u8);
        if is_square_attacked(&board.grid, crossing, enemy)
            || is_square_attacked(&board.grid, landing, enemy)
        {
            continue;
        }
        moves.push(landing);
    }
    moves
}
