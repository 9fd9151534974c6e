//! Error types for the game module
//!
//! Rule rejections of human moves are not errors here; [`super::Session::submit`]
//! reports them as `false`. These cover the failures a caller must handle.

use guild_engine::RulesError;
use tokio::task::JoinError;

/// Errors that can occur while driving a session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The initial position could not be built (e.g. unsupported Go size)
    #[error("Cannot set up game: {0}")]
    Setup(#[from] RulesError),

    /// The opponent task panicked
    #[error("Opponent task failed: {0}")]
    OpponentTask(#[from] JoinError),

    /// The engine refused a move its own opponent produced
    #[error("Opponent produced a rejected move: {reason}")]
    OpponentRejected { reason: RulesError },
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;
