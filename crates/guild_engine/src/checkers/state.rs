//! Checkers game state and the public move interface
//!
//! A side loses when, with the move, it has no pieces left or none of its
//! pieces can move.

use tracing::{debug, info};

use super::board::{Checker, CheckersBoard};
use super::moves::{self, all_legal_moves, CheckersMove, MoveEffects};
use crate::captured::CaptureTally;
use crate::color::Color;
use crate::error::{RulesError, RulesResult};
use crate::grid::Position;
use crate::history::MoveLog;
use crate::status::GameStatus;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: CheckersMove,
    pub side: Color,
    pub effects: MoveEffects,
}

#[derive(Clone, Debug)]
pub struct CheckersState {
    pub board: CheckersBoard,
    pub status: GameStatus,
    pub winner: Option<Color>,
    pub captured: CaptureTally<Checker>,
    pub history: MoveLog<MoveRecord>,
}

impl Default for CheckersState {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckersState {
    pub fn new() -> Self {
        Self::from_board(CheckersBoard::initial())
    }

    pub fn from_board(board: CheckersBoard) -> Self {
        let mut state = Self {
            board,
            status: GameStatus::Playing,
            winner: None,
            captured: CaptureTally::default(),
            history: MoveLog::new(),
        };
        state.refresh_status();
        state
    }

    pub fn to_move(&self) -> Color {
        self.board.to_move
    }

    /// Side to move with no pieces, or no legal moves, has lost
    fn refresh_status(&mut self) {
        let side = self.board.to_move;
        let stuck = self.board.count(side) == 0 || all_legal_moves(&self.board).is_empty();
        if stuck {
            self.status = GameStatus::Finished;
            self.winner = Some(side.opposite());
            info!("[CHECKERS] {} wins after {} plies", side.opposite(), self.history.len());
        } else {
            self.status = GameStatus::Playing;
            self.winner = None;
        }
    }
}

/// Legal destinations for the piece on `position`
///
/// Applies forced capture and the multi-jump lock, so a non-jumping piece
/// gets nothing while any jump exists for its side.
pub fn legal_moves(state: &CheckersState, position: Position) -> Vec<Position> {
    if state.status.is_terminal() {
        return Vec::new();
    }
    moves::legal_destinations(&state.board, position)
}

/// Apply `mv` for the side to move
///
/// # Errors
///
/// Leaves `state` untouched and reports why when the game is over, the
/// wrong piece is moved mid-jump, or the move is not legal.
pub fn apply_move(state: &CheckersState, mv: CheckersMove) -> RulesResult<CheckersState> {
    if state.status.is_terminal() {
        return Err(RulesError::GameOver);
    }
    let piece = state
        .board
        .grid
        .get(mv.from)
        .ok_or(RulesError::EmptySquare { position: mv.from })?;
    if piece.color != state.board.to_move {
        return Err(RulesError::WrongSide { position: mv.from });
    }
    if let Some(position) = state.board.continuing_from.filter(|p| *p != mv.from) {
        return Err(RulesError::MustContinueJump { position });
    }
    if !moves::legal_destinations(&state.board, mv.from).contains(&mv.to) {
        debug!("[CHECKERS] rejected {} -> {}", mv.from, mv.to);
        return Err(RulesError::IllegalMove {
            from: mv.from,
            to: mv.to,
        });
    }

    let (board, effects) = moves::play(&state.board, mv);
    let mut next = state.clone();
    next.board = board;
    if let Some((_, victim)) = effects.captured {
        next.captured.record(piece.color, victim);
    }
    next.history = state.history.push(MoveRecord {
        mv,
        side: piece.color,
        effects,
    });
    next.refresh_status();
    Ok(next)
}
