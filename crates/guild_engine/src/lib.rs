//! Guild Engine
//!
//! Rule cores for five two-player board games: orthodox chess, checkers,
//! Xiangqi, Go and Nine Men's Morris. Every game follows the same shape:
//!
//! ```text
//! board state -> move generator -> legality filter -> apply -> terminal check
//!                                                          \-> opponent selector
//! ```
//!
//! Each game is a closed module. Nothing crosses between them apart from the
//! small shared vocabulary in this crate root (positions, sides, difficulty,
//! game status and the generic alpha-beta search).
//!
//! # Per-game interface
//!
//! Every game module exposes the same three operations:
//!
//! - `legal_moves(state, position)`: destinations for the piece on `position`
//! - `apply_move(state, move)`: a new state, or a [`RulesError`] that leaves
//!   the caller's state untouched
//! - `select_opponent_move(state, side, difficulty, rng)`: a move, or `None`
//!   when the side has nothing to play
//!
//! # Example
//!
//! ```rust,ignore
//! use guild_engine::chess::{self, ChessMove, ChessState};
//! use guild_engine::Position;
//!
//! let state = ChessState::new();
//! let e2 = Position::new(6, 4);
//! assert!(chess::legal_moves(&state, e2).contains(&Position::new(4, 4)));
//! let next = chess::apply_move(&state, ChessMove::new(e2, Position::new(4, 4)))?;
//! ```

pub mod captured;
pub mod checkers;
pub mod chess;
pub mod choice;
pub mod color;
pub mod difficulty;
pub mod error;
pub mod go;
pub mod grid;
pub mod history;
pub mod morris;
pub mod search;
pub mod status;
pub mod xiangqi;

pub use captured::CaptureTally;
pub use color::{Color, Seat};
pub use difficulty::Difficulty;
pub use error::{RulesError, RulesResult};
pub use grid::{Grid, Position};
pub use history::MoveLog;
pub use search::{Searchable, NO_MOVES_SCORE};
pub use status::GameStatus;
