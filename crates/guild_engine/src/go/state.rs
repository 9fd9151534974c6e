//! Go game state, placement and capture
//!
//! # Placement pipeline
//!
//! 1. reject occupied points (reported distinctly as `Occupied`)
//! 2. reject the ko point
//! 3. place the stone and remove every adjacent enemy group left without
//!    liberties
//! 4. reject the move as suicide if the placed stone's own group now has
//!    no liberties
//!
//! # Ko
//!
//! A single forbidden point is remembered: it is set only when a move
//! captures exactly one stone with a lone stone that is left with exactly
//! one liberty (the point just emptied). The next move clears it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::board::GoBoard;
use super::groups::group_at;
use crate::color::{Color, Seat};
use crate::error::{RulesError, RulesResult};
use crate::grid::Position;
use crate::history::MoveLog;
use crate::status::GameStatus;

/// Capture-count targets offered by the game setup
pub const CAPTURE_TARGETS: [u32; 3] = [5, 10, 20];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoMove {
    Place(Position),
    Pass,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: GoMove,
    pub player: Color,
    pub captured: Vec<Position>,
}

/// Result of placing a stone on a board, before turn bookkeeping
#[derive(Clone, Debug)]
pub struct Placement {
    pub board: GoBoard,
    pub captured: Vec<Position>,
    /// Point that becomes forbidden for the opponent's next move
    pub ko_point: Option<Position>,
}

#[derive(Clone, Debug)]
pub struct GoState {
    pub board: GoBoard,
    pub to_move: Color,
    captures: [u32; 2],
    pub ko_point: Option<Position>,
    pub consecutive_passes: u32,
    /// The game ends when either side has captured this many stones
    pub capture_target: Option<u32>,
    pub status: GameStatus,
    pub winner: Option<Color>,
    pub last_move: Option<GoMove>,
    pub history: MoveLog<MoveRecord>,
}

impl GoState {
    /// New game on an empty `size` board; black plays first
    ///
    /// # Errors
    ///
    /// `InvalidBoardSize` unless `size` is 9, 13 or 19.
    pub fn new(size: usize) -> RulesResult<Self> {
        Ok(Self::from_board(GoBoard::new(size)?, Color::Black))
    }

    pub fn from_board(board: GoBoard, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            captures: [0, 0],
            ko_point: None,
            consecutive_passes: 0,
            capture_target: None,
            status: GameStatus::Playing,
            winner: None,
            last_move: None,
            history: MoveLog::new(),
        }
    }

    #[must_use]
    pub fn with_capture_target(mut self, target: Option<u32>) -> Self {
        self.capture_target = target;
        self
    }

    /// Stones captured by `color` so far
    pub fn captures(&self, color: Color) -> u32 {
        self.captures[color.index()]
    }
}

/// Place a `color` stone on `pos`, resolving captures
///
/// # Errors
///
/// `OutOfBounds`, `Occupied` or `Suicide`. Ko is the caller's concern.
pub fn place_stone(board: &GoBoard, pos: Position, color: Color) -> RulesResult<Placement> {
    if !board.contains(pos) {
        return Err(RulesError::OutOfBounds { position: pos });
    }
    if board.get(pos).is_some() {
        return Err(RulesError::Occupied { position: pos });
    }

    let mut next = board.clone();
    next.set(pos, Some(color));

    let mut captured = Vec::new();
    for neighbor in board.neighbors(pos) {
        if next.get(neighbor) != Some(color.opposite()) {
            continue;
        }
        if let Some(group) = group_at(&next, neighbor).filter(|g| g.is_captured()) {
            for stone in &group.stones {
                next.set(*stone, None);
            }
            captured.extend(group.stones);
        }
    }

    let own = group_at(&next, pos).ok_or(RulesError::OutOfBounds { position: pos })?;
    if own.is_captured() {
        return Err(RulesError::Suicide { position: pos });
    }

    let ko_point = match captured.as_slice() {
        [single] if own.stones.len() == 1 && own.liberties == [*single] => Some(*single),
        _ => None,
    };
    Ok(Placement {
        board: next,
        captured,
        ko_point,
    })
}

/// Whether the side to move may place on `pos`
pub fn can_place(state: &GoState, pos: Position) -> bool {
    !state.status.is_terminal()
        && state.ko_point != Some(pos)
        && place_stone(&state.board, pos, state.to_move).is_ok()
}

/// `[position]` when the side to move may place there, otherwise empty
pub fn legal_moves(state: &GoState, position: Position) -> Vec<Position> {
    if can_place(state, position) {
        vec![position]
    } else {
        Vec::new()
    }
}

/// Every point the side to move may place on, row-major
pub fn legal_placements(state: &GoState) -> Vec<Position> {
    if state.status.is_terminal() {
        return Vec::new();
    }
    state
        .board
        .points()
        .filter(|pos| state.board.is_empty(*pos))
        .filter(|pos| can_place(state, *pos))
        .collect()
}

/// Apply a placement or pass for the side to move
///
/// # Errors
///
/// `GameOver` after the capture target is reached, `Occupied` for an
/// occupied point, `KoViolation`, `Suicide` or `OutOfBounds`; `state` is
/// left untouched in every case.
pub fn apply_move(state: &GoState, mv: GoMove) -> RulesResult<GoState> {
    if state.status.is_terminal() {
        return Err(RulesError::GameOver);
    }
    let player = state.to_move;
    let mut next = state.clone();
    next.to_move = player.opposite();
    next.last_move = Some(mv);

    let pos = match mv {
        GoMove::Pass => {
            next.consecutive_passes += 1;
            next.ko_point = None;
            next.history = state.history.push(MoveRecord {
                mv,
                player,
                captured: Vec::new(),
            });
            debug!("[GO] {} passes ({} in a row)", player, next.consecutive_passes);
            return Ok(next);
        }
        GoMove::Place(pos) => pos,
    };

    if state.ko_point == Some(pos) {
        debug!("[GO] ko forbids {}", pos);
        return Err(RulesError::KoViolation { position: pos });
    }
    let placement = place_stone(&state.board, pos, player).inspect_err(|err| match err {
        RulesError::Occupied { .. } => warn!("[GO] {} tried occupied point {}", player, pos),
        other => debug!("[GO] rejected {}: {}", pos, other),
    })?;

    next.board = placement.board;
    next.ko_point = placement.ko_point;
    next.consecutive_passes = 0;
    next.captures[player.index()] += placement.captured.len() as u32;
    next.history = state.history.push(MoveRecord {
        mv,
        player,
        captured: placement.captured,
    });

    if let Some(target) = state.capture_target {
        if next.captures(player) >= target {
            next.status = GameStatus::Finished;
            next.winner = Some(player);
            info!(
                "[GO] {} reaches {} captures and wins",
                player,
                next.captures(player)
            );
        }
    }
    Ok(next)
}
