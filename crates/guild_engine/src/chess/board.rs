//! Chess board and castling rights
//!
//! [`ChessBoard`] is everything the rules need to know about a position and
//! nothing else: the grid, whose turn it is and which castles are still
//! available. It is `Copy`, which makes it the unit of search.

use serde::{Deserialize, Serialize};

use super::piece::{home_row, Piece, PieceKind};
use crate::color::Color;
use crate::grid::{Grid, Position};

pub const SIZE: usize = 8;

pub type ChessGrid = Grid<Piece, SIZE, SIZE>;

/// Columns of the rooks that castle
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const KING_COL: u8 = 4;

const BACK_RANK: [PieceKind; SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Which castles each side may still make
///
/// A right is lost when the king moves, when that rook moves, or when that
/// rook is captured on its home square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }
}

impl CastlingRights {
    pub fn none() -> Self {
        Self {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    fn revoke_king(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// Drop any right tied to a piece leaving or being captured on `square`
    pub(crate) fn touch(&mut self, square: Position) {
        for color in [Color::White, Color::Black] {
            let row = home_row(color);
            if square.row != row {
                continue;
            }
            match (square.col, color) {
                (KING_COL, _) => self.revoke_king(color),
                (KINGSIDE_ROOK_COL, Color::White) => self.white_kingside = false,
                (KINGSIDE_ROOK_COL, Color::Black) => self.black_kingside = false,
                (QUEENSIDE_ROOK_COL, Color::White) => self.white_queenside = false,
                (QUEENSIDE_ROOK_COL, Color::Black) => self.black_queenside = false,
                _ => {}
            }
        }
    }
}

/// A chess position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChessBoard {
    pub grid: ChessGrid,
    pub to_move: Color,
    pub castling: CastlingRights,
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::initial()
    }
}

impl ChessBoard {
    /// Standard opening layout; black on rows 0-1, white on rows 6-7
    pub fn initial() -> Self {
        let mut grid = ChessGrid::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            grid.set(Position::new(0, col), Some(Piece::new(*kind, Color::Black)));
            grid.set(Position::new(1, col), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            grid.set(Position::new(6, col), Some(Piece::new(PieceKind::Pawn, Color::White)));
            grid.set(Position::new(7, col), Some(Piece::new(*kind, Color::White)));
        }
        Self {
            grid,
            to_move: Color::White,
            castling: CastlingRights::default(),
        }
    }

    /// Empty board with no castling rights, for setting up positions
    pub fn empty(to_move: Color) -> Self {
        Self {
            grid: ChessGrid::empty(),
            to_move,
            castling: CastlingRights::none(),
        }
    }

    pub fn with_piece(mut self, pos: Position, piece: Piece) -> Self {
        self.grid.set(pos, Some(piece));
        self
    }

    pub fn king_square(&self, color: Color) -> Option<Position> {
        self.grid.find(|p| p.kind == PieceKind::King && p.color == color)
    }
}

/// Square name in algebraic form ("e2" for row 6, col 4)
pub fn square_name(pos: Position) -> String {
    let file = (b'a' + pos.col) as char;
    let rank = SIZE as u8 - pos.row;
    format!("{file}{rank}")
}
