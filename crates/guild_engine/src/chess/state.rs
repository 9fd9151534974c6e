//! Chess game state and the public move interface
//!
//! [`ChessState`] wraps a [`ChessBoard`] with everything a session needs
//! beyond the rules: status, winner, captured pieces, the move log and an
//! outstanding promotion choice.

use tracing::{debug, info};

use super::attack::is_in_check;
use super::board::{square_name, ChessBoard};
use super::piece::{Piece, PieceKind};
use super::rules::{self, has_legal_move, is_castling, is_promotion_square, ChessMove};
use crate::captured::CaptureTally;
use crate::color::Color;
use crate::error::{RulesError, RulesResult};
use crate::grid::Position;
use crate::history::MoveLog;
use crate::status::GameStatus;

/// One accepted move as it appears in the log
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: ChessMove,
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// Coordinate notation such as `e2-e4`, `e4xd5`, `e7-e8=Q` or `O-O`
    pub notation: String,
}

#[derive(Clone, Debug)]
pub struct ChessState {
    pub board: ChessBoard,
    pub status: GameStatus,
    pub winner: Option<Color>,
    pub captured: CaptureTally<Piece>,
    pub history: MoveLog<MoveRecord>,
    /// Square of a pawn waiting for [`complete_promotion`]
    pub pending_promotion: Option<Position>,
    /// Log entry held back until the promotion choice is known
    pending_record: Option<MoveRecord>,
}

impl Default for ChessState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessState {
    pub fn new() -> Self {
        Self::from_board(ChessBoard::initial())
    }

    /// Start from an arbitrary position; status is computed for the side to move
    pub fn from_board(board: ChessBoard) -> Self {
        let mut state = Self {
            board,
            status: GameStatus::Playing,
            winner: None,
            captured: CaptureTally::default(),
            history: MoveLog::new(),
            pending_promotion: None,
            pending_record: None,
        };
        state.refresh_status();
        state
    }

    pub fn to_move(&self) -> Color {
        self.board.to_move
    }

    /// Reclassify the position for the side to move
    fn refresh_status(&mut self) {
        let side = self.board.to_move;
        let in_check = is_in_check(&self.board.grid, side);
        self.status = GameStatus::classify(in_check, has_legal_move(&self.board));
        self.winner = match self.status {
            GameStatus::Checkmate => Some(side.opposite()),
            _ => None,
        };
        if self.status.is_terminal() {
            info!("[CHESS] {} for {} after {} plies", self.status, side, self.history.len());
        }
    }
}

/// Legal destinations for the piece on `position`
///
/// Empty when the square is empty, holds a piece of the side not on move,
/// a promotion is pending or the game is over.
pub fn legal_moves(state: &ChessState, position: Position) -> Vec<Position> {
    if state.status.is_terminal() || state.pending_promotion.is_some() {
        return Vec::new();
    }
    match state.board.grid.get(position) {
        Some(piece) if piece.color == state.board.to_move => {
            rules::legal_destinations(&state.board, position)
        }
        _ => Vec::new(),
    }
}

/// Apply `mv` for the side to move
///
/// A pawn reaching the last rank without a `promotion` choice leaves the
/// state waiting in `pending_promotion`; the turn passes only after
/// [`complete_promotion`].
///
/// # Errors
///
/// Returns an error, leaving `state` untouched, when the game is over, a
/// promotion is pending, or the move is not legal.
pub fn apply_move(state: &ChessState, mv: ChessMove) -> RulesResult<ChessState> {
    if state.status.is_terminal() {
        return Err(RulesError::GameOver);
    }
    if let Some(position) = state.pending_promotion {
        return Err(RulesError::PromotionPending { position });
    }
    let piece = state
        .board
        .grid
        .get(mv.from)
        .ok_or(RulesError::EmptySquare { position: mv.from })?;
    if piece.color != state.board.to_move {
        return Err(RulesError::WrongSide { position: mv.from });
    }
    if !rules::legal_destinations(&state.board, mv.from).contains(&mv.to) {
        debug!("[CHESS] rejected {} -> {}", mv.from, mv.to);
        return Err(RulesError::IllegalMove {
            from: mv.from,
            to: mv.to,
        });
    }
    let promotes = is_promotion_square(piece, mv.to);
    if let Some(kind) = mv.promotion.filter(|_| promotes) {
        if !kind.is_promotion_target() {
            return Err(RulesError::InvalidPromotion {
                kind: kind.to_string(),
            });
        }
    }

    let captured = state.board.grid.get(mv.to);
    let mut next = state.clone();
    next.board = rules::play(&state.board, mv);
    if let Some(victim) = captured {
        next.captured.record(piece.color, victim);
    }
    let record = MoveRecord {
        mv,
        piece,
        captured,
        notation: notation(piece, &mv, captured.is_some(), promotes),
    };

    if promotes && mv.promotion.is_none() {
        // The pawn waits on the last rank and its side keeps the move.
        next.board.to_move = piece.color;
        next.pending_promotion = Some(mv.to);
        next.pending_record = Some(record);
        return Ok(next);
    }

    next.history = state.history.push(record);

    next.refresh_status();
    Ok(next)
}

/// Resolve a pending promotion and pass the turn
///
/// # Errors
///
/// `NoPromotionPending` when there is nothing to promote, `InvalidPromotion`
/// for a pawn or king.
pub fn complete_promotion(state: &ChessState, kind: PieceKind) -> RulesResult<ChessState> {
    let square = state
        .pending_promotion
        .ok_or(RulesError::NoPromotionPending)?;
    if !kind.is_promotion_target() {
        return Err(RulesError::InvalidPromotion {
            kind: kind.to_string(),
        });
    }
    let color = state.board.to_move;

    let mut next = state.clone();
    next.board.grid.set(square, Some(Piece::new(kind, color)));
    next.board.to_move = color.opposite();
    next.pending_promotion = None;
    if let Some(mut record) = next.pending_record.take() {
        record.mv.promotion = Some(kind);
        record.notation.push('=');
        record.notation.push(kind.letter());
        next.history = state.history.push(record);
    }
    next.refresh_status();
    Ok(next)
}

fn notation(piece: Piece, mv: &ChessMove, capture: bool, promotes: bool) -> String {
    if is_castling(piece, mv) {
        return if mv.to.col > mv.from.col {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }
    let separator = if capture { 'x' } else { '-' };
    let mut text = format!("{}{}{}", square_name(mv.from), separator, square_name(mv.to));
    if let Some(kind) = mv.promotion.filter(|_| promotes) {
        text.push('=');
        text.push(kind.letter());
    }
    text
}
