//! Xiangqi game state and the public move interface

use tracing::{debug, info};

use super::board::XiangqiBoard;
use super::piece::{Piece, Side};
use super::rules::{self, has_legal_move, is_in_check, XiangqiMove};
use crate::captured::CaptureTally;
use crate::error::{RulesError, RulesResult};
use crate::grid::Position;
use crate::history::MoveLog;
use crate::status::GameStatus;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: XiangqiMove,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

#[derive(Clone, Debug)]
pub struct XiangqiState {
    pub board: XiangqiBoard,
    pub status: GameStatus,
    pub winner: Option<Side>,
    pub captured: CaptureTally<Piece>,
    pub history: MoveLog<MoveRecord>,
}

impl Default for XiangqiState {
    fn default() -> Self {
        Self::new()
    }
}

impl XiangqiState {
    pub fn new() -> Self {
        Self::from_board(XiangqiBoard::initial())
    }

    pub fn from_board(board: XiangqiBoard) -> Self {
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

    pub fn to_move(&self) -> Side {
        self.board.to_move
    }

    fn refresh_status(&mut self) {
        let side = self.board.to_move;
        let in_check = is_in_check(&self.board.grid, side);
        self.status = GameStatus::classify(in_check, has_legal_move(&self.board));
        self.winner = (self.status == GameStatus::Checkmate).then(|| side.opposite());
        if self.status.is_terminal() {
            info!("[XIANGQI] {} for {} after {} plies", self.status, side, self.history.len());
        }
    }
}

/// Legal destinations for the piece on `position`; empty unless it
/// belongs to the side to move and the game is still running
pub fn legal_moves(state: &XiangqiState, position: Position) -> Vec<Position> {
    if state.status.is_terminal() {
        return Vec::new();
    }
    match state.board.grid.get(position) {
        Some(piece) if piece.side == state.board.to_move => {
            rules::legal_destinations(&state.board, position)
        }
        _ => Vec::new(),
    }
}

/// Apply `mv` for the side to move
///
/// # Errors
///
/// Leaves `state` untouched and reports why when the game is over or the
/// move is not legal.
pub fn apply_move(state: &XiangqiState, mv: XiangqiMove) -> RulesResult<XiangqiState> {
    if state.status.is_terminal() {
        return Err(RulesError::GameOver);
    }
    let piece = state
        .board
        .grid
        .get(mv.from)
        .ok_or(RulesError::EmptySquare { position: mv.from })?;
    if piece.side != state.board.to_move {
        return Err(RulesError::WrongSide { position: mv.from });
    }
    if !rules::legal_destinations(&state.board, mv.from).contains(&mv.to) {
        debug!("[XIANGQI] rejected {} -> {}", mv.from, mv.to);
        return Err(RulesError::IllegalMove {
            from: mv.from,
            to: mv.to,
        });
    }

    let captured = state.board.grid.get(mv.to);
    let mut next = state.clone();
    next.board = rules::play(&state.board, mv);
    if let Some(victim) = captured {
        next.captured.record(piece.side, victim);
    }
    next.history = state.history.push(MoveRecord {
        mv,
        piece,
        captured,
    });
    next.refresh_status();
    Ok(next)
}
