//! Xiangqi (Chinese chess)
//!
//! 10x9 board with a river between rows 4 and 5 and a 3x3 palace for each
//! general. Red moves first from rows 5-9.

pub mod ai;
pub mod board;
pub mod movegen;
pub mod piece;
pub mod rules;
pub mod state;

pub use ai::select_opponent_move;
pub use board::{in_palace, XiangqiBoard};
pub use piece::{Piece, PieceKind, Side};
pub use rules::{all_legal_moves, generals_facing, is_in_check, XiangqiMove};
pub use state::{apply_move, legal_moves, MoveRecord, XiangqiState};
