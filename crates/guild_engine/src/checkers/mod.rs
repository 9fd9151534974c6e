//! Checkers on an 8x8 board
//!
//! Men move diagonally forward, kings both ways. Capturing is compulsory
//! and a piece that lands with another jump available keeps jumping. A man
//! reaching the far row is crowned immediately, and may continue a jump
//! sequence as a king.

pub mod ai;
pub mod board;
pub mod eval;
pub mod moves;
pub mod state;

pub use ai::{select_opponent_move, select_opponent_move_at_depth, DEFAULT_SEARCH_DEPTH};
pub use board::{Checker, CheckersBoard};
pub use moves::{all_legal_moves, can_jump, must_jump, CheckersMove, MoveEffects};
pub use state::{apply_move, legal_moves, CheckersState, MoveRecord};
