//! Position evaluation
//!
//! Material plus piece-square tables, scored for one side. Values are on a
//! ten-per-pawn scale so that the search's no-move score of 1000 dominates
//! any material swing.

use super::board::ChessBoard;
use super::piece::{Piece, PieceKind};
use super::rules::{all_legal_moves, play, ChessMove};
use crate::color::{Color, Seat};
use crate::grid::Position;
use crate::search::Searchable;

// Tables read from white's side: the first row is white's back rank.

#[rustfmt::skip]
const PAWN_TABLE: [i8; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     1,  1,  1, -2, -2,  1,  1,  1,
     1, -1, -1,  0,  0, -1, -1,  1,
     0,  0,  0,  2,  2,  0,  0,  0,
     1,  1,  1,  3,  3,  1,  1,  1,
     1,  1,  2,  3,  3,  2,  1,  1,
     5,  5,  5,  5,  5,  5,  5,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i8; 64] = [
    -5, -4, -3, -3, -3, -3, -4, -5,
    -4, -2,  0,  1,  1,  0, -2, -4,
    -3,  1,  1,  2,  2,  1,  1, -3,
    -3,  0,  2,  2,  2,  2,  0, -3,
    -3,  1,  2,  2,  2,  2,  1, -3,
    -3,  0,  1,  2,  2,  1,  0, -3,
    -4, -2,  0,  0,  0,  0, -2, -4,
    -5, -4, -3, -3, -3, -3, -4, -5,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i8; 64] = [
    -2, -1, -1, -1, -1, -1, -1, -2,
    -1,  1,  0,  0,  0,  0,  1, -1,
    -1,  1,  1,  1,  1,  1,  1, -1,
    -1,  0,  1,  1,  1,  1,  0, -1,
    -1,  1,  1,  1,  1,  1,  1, -1,
    -1,  0,  1,  1,  1,  1,  0, -1,
    -1,  0,  0,  0,  0,  0,  0, -1,
    -2, -1, -1, -1, -1, -1, -1, -2,
];

#[rustfmt::skip]
const ROOK_TABLE: [i8; 64] = [
     0,  0,  0,  1,  1,  0,  0,  0,
    -1,  0,  0,  0,  0,  0,  0, -1,
    -1,  0,  0,  0,  0,  0,  0, -1,
    -1,  0,  0,  0,  0,  0,  0, -1,
    -1,  0,  0,  0,  0,  0,  0, -1,
    -1,  0,  0,  0,  0,  0,  0, -1,
     1,  1,  1,  1,  1,  1,  1,  1,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i8; 64] = [
    -2, -1, -1,  0,  0, -1, -1, -2,
    -1,  0,  1,  0,  0,  0,  0, -1,
    -1,  1,  1,  1,  1,  1,  0, -1,
     0,  0,  1,  1,  1,  1,  0,  0,
     0,  0,  1,  1,  1,  1,  0,  0,
    -1,  0,  1,  1,  1,  1,  0, -1,
    -1,  0,  0,  0,  0,  0,  0, -1,
    -2, -1, -1,  0,  0, -1, -1, -2,
];

#[rustfmt::skip]
const KING_TABLE: [i8; 64] = [
     2,  3,  1,  0,  0,  1,  3,  2,
     2,  2,  0,  0,  0,  0,  2,  2,
    -1, -2, -2, -2, -2, -2, -2, -1,
    -2, -3, -3, -4, -4, -3, -3, -2,
    -3, -4, -4, -5, -5, -4, -4, -3,
    -3, -4, -4, -5, -5, -4, -4, -3,
    -3, -4, -4, -5, -5, -4, -4, -3,
    -3, -4, -4, -5, -5, -4, -4, -3,
];

/// Positional bonus for `piece` standing on `pos`
pub fn square_bonus(piece: Piece, pos: Position) -> i32 {
    // Rows count from black's back rank; flip so index 0 is the piece's own back rank.
    let rank_from_home = match piece.color {
        Color::White => 7 - pos.row as usize,
        Color::Black => pos.row as usize,
    };
    let index = rank_from_home * 8 + pos.col as usize;
    let table = match piece.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    };
    i32::from(table[index])
}

/// Material and position for `perspective` minus the same for the opponent
pub fn evaluate(board: &ChessBoard, perspective: Color) -> i32 {
    board
        .grid
        .pieces()
        .map(|(pos, piece)| {
            let score = piece.kind.value() + square_bonus(piece, pos);
            if piece.color == perspective {
                score
            } else {
                -score
            }
        })
        .sum()
}

impl Searchable for ChessBoard {
    type Move = ChessMove;
    type Side = Color;

    fn side_to_move(&self) -> Color {
        self.to_move
    }

    fn moves(&self) -> Vec<ChessMove> {
        all_legal_moves(self)
    }

    fn play(&self, mv: ChessMove) -> Self {
        play(self, mv)
    }

    fn evaluate(&self, perspective: Color) -> i32 {
        evaluate(self, perspective)
    }

    /// MVV-LVA: most valuable victim, least valuable attacker
    fn order_key(&self, mv: &ChessMove) -> i32 {
        let attacker = self.grid.get(mv.from).map_or(0, |p| p.kind.value());
        let capture = self
            .grid
            .get(mv.to)
            .filter(|victim| victim.color == self.to_move.opponent())
            .map_or(0, |victim| victim.kind.value() * 10 - attacker);
        let promotion = mv.promotion.map_or(0, |kind| kind.value() * 10);
        capture + promotion
    }
}
