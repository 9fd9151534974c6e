//! Game status state machine
//!
//! Evaluated after every accepted move for the side now on move:
//!
//! ```text
//! Playing <-> Check
//!    |          |
//!    v          v
//! Stalemate  Checkmate      (chess, Xiangqi)
//!
//! Playing -> Finished       (checkers, Go capture target, Nine Men's Morris)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a position for the side to move
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Normal play
    #[default]
    Playing,
    /// Side to move is attacked but has a reply
    Check,
    /// Side to move is attacked and has no legal move
    Checkmate,
    /// Side to move is not attacked and has no legal move
    Stalemate,
    /// Decided by a game-specific rule (no pieces, no moves, capture target)
    Finished,
}

impl GameStatus {
    /// No further moves are accepted once this is true
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Finished
        )
    }

    /// Stalemate is the only outcome without a winner
    pub fn is_draw(self) -> bool {
        self == GameStatus::Stalemate
    }

    /// Chess/Xiangqi classification from the two facts the legality filter knows
    pub fn classify(in_check: bool, has_moves: bool) -> GameStatus {
        match (in_check, has_moves) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, true) => GameStatus::Playing,
            (false, false) => GameStatus::Stalemate,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Finished => "finished",
        };
        f.write_str(label)
    }
}
