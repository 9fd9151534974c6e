//! Error types for the rule cores
//!
//! A rejected move is not exceptional: `apply_move` returns one of these
//! variants and the caller keeps its previous state. The variants exist so
//! drivers can tell the cases apart when logging (Go's occupied point is the
//! one the presentation layer wants to hear about).

use thiserror::Error;

use crate::grid::Position;

/// Reasons a move or query is refused by a rule core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Coordinate outside the game's grid
    #[error("Position {position} is outside the board")]
    OutOfBounds { position: Position },

    /// Point index outside the Nine Men's Morris graph
    #[error("Point {point} does not exist (must be 0-23)")]
    NoSuchPoint { point: u8 },

    /// No piece on the source square
    #[error("No piece at {position}")]
    EmptySquare { position: Position },

    /// Piece belongs to the side not on move
    #[error("Piece at {position} does not belong to the side to move")]
    WrongSide { position: Position },

    /// Geometrically impossible or unsafe move
    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    /// Go stone placed on an occupied point
    #[error("Point {position} is already occupied")]
    Occupied { position: Position },

    /// Go stone placed on the forbidden ko point
    #[error("Point {position} is forbidden by ko")]
    KoViolation { position: Position },

    /// Go placement leaves its own group without liberties
    #[error("Placing at {position} would be suicide")]
    Suicide { position: Position },

    /// Move submitted after the game ended
    #[error("The game is already over")]
    GameOver,

    /// Chess move submitted while a promotion choice is outstanding
    #[error("A promotion choice is pending at {position}")]
    PromotionPending { position: Position },

    /// Chess promotion choice with nothing to promote
    #[error("No promotion is pending")]
    NoPromotionPending,

    /// Chess promotion to a pawn or king
    #[error("Cannot promote to {kind}")]
    InvalidPromotion { kind: String },

    /// Morris move submitted while a removal is owed
    #[error("A mill was formed; an opposing piece must be removed first")]
    RemovalPending,

    /// Morris removal of a protected or missing piece
    #[error("Point {point} cannot be removed")]
    NotRemovable { point: u8 },

    /// Morris move that does not fit the current phase
    #[error("Move does not match the current phase: {reason}")]
    WrongPhase { reason: String },

    /// Checkers move by a piece other than the one mid-jump
    #[error("The piece at {position} must continue jumping")]
    MustContinueJump { position: Position },

    /// Go board size other than 9, 13 or 19
    #[error("Unsupported board size {size} (must be 9, 13 or 19)")]
    InvalidBoardSize { size: usize },

    /// Unknown difficulty name
    #[error("Unknown difficulty '{name}' (expected easy, medium or hard)")]
    UnknownDifficulty { name: String },
}

/// Result type alias for rule operations
pub type RulesResult<T> = Result<T, RulesError>;
