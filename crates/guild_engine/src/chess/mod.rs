//! Orthodox chess
//!
//! 8x8 board, black on rows 0-1 and white on rows 6-7; white moves first.
//! Castling and promotion are supported; en passant is not part of this
//! rule set.
//!
//! # Module Organization
//!
//! - `piece` - Piece kinds and values
//! - `board` - Position and castling rights
//! - `movegen` - Pseudo-legal destinations
//! - `attack` - Attack and check detection
//! - `rules` - Legality filter and move application
//! - `eval` - Static evaluation and search hooks
//! - `state` - Game state, `legal_moves`, `apply_move`, promotion
//! - `ai` - Opponent selection

pub mod ai;
pub mod attack;
pub mod board;
pub mod eval;
pub mod movegen;
pub mod piece;
pub mod rules;
pub mod state;

pub use ai::{select_opponent_move, select_opponent_move_at_depth, DEFAULT_SEARCH_DEPTH};
pub use attack::{is_in_check, is_square_attacked};
pub use board::{square_name, CastlingRights, ChessBoard};
pub use piece::{Piece, PieceKind};
pub use rules::{all_legal_moves, ChessMove};
pub use state::{apply_move, complete_promotion, legal_moves, ChessState, MoveRecord};
