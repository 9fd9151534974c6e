//! Nine Men's Morris game state and turn flow
//!
//! A turn is a placement or a slide. If it closes a mill through the
//! destination, the same side owes a removal and the state waits in
//! `pending_removal` until a [`MorrisMove::Remove`] arrives. The turn then
//! passes.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::graph::{self, check_mill, is_adjacent, removable_pieces, Points, POINTS};
use crate::color::{Color, Seat};
use crate::error::{RulesError, RulesResult};
use crate::history::MoveLog;
use crate::status::GameStatus;

/// Pieces each side starts with in hand
pub const PIECES_PER_SIDE: u8 = 9;

/// A side that has slid down to this many pieces may fly
pub const FLYING_THRESHOLD: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Placing,
    Moving,
    Flying,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Placing => f.write_str("placing"),
            Phase::Moving => f.write_str("moving"),
            Phase::Flying => f.write_str("flying"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MorrisMove {
    Place(u8),
    Slide { from: u8, to: u8 },
    Remove(u8),
}

impl MorrisMove {
    /// Point the moving piece ends on; `None` for removals
    pub fn destination(self) -> Option<u8> {
        match self {
            MorrisMove::Place(to) | MorrisMove::Slide { to, .. } => Some(to),
            MorrisMove::Remove(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: MorrisMove,
    pub player: Color,
    pub formed_mill: bool,
}

#[derive(Clone, Debug)]
pub struct MorrisState {
    pub points: Points,
    pub to_move: Color,
    in_hand: [u8; 2],
    on_board: [u8; 2],
    /// Set after a mill; the side to move must remove an opposing piece
    pub pending_removal: bool,
    pub status: GameStatus,
    pub winner: Option<Color>,
    pub history: MoveLog<MoveRecord>,
}

impl Default for MorrisState {
    fn default() -> Self {
        Self::new()
    }
}

impl MorrisState {
    pub fn new() -> Self {
        Self {
            points: [None; POINTS],
            to_move: Color::White,
            in_hand: [PIECES_PER_SIDE; 2],
            on_board: [0; 2],
            pending_removal: false,
            status: GameStatus::Playing,
            winner: None,
            history: MoveLog::new(),
        }
    }

    /// Set up a position with the given hands; counts are derived from `points`
    pub fn from_points(points: Points, to_move: Color, in_hand: [u8; 2]) -> Self {
        let count = |color| points.iter().filter(|p| **p == Some(color)).count() as u8;
        let mut state = Self {
            points,
            to_move,
            in_hand,
            on_board: [count(Color::White), count(Color::Black)],
            ..Self::new()
        };
        state.refresh_status();
        state
    }

    pub fn in_hand(&self, color: Color) -> u8 {
        self.in_hand[color.index()]
    }

    pub fn on_board(&self, color: Color) -> u8 {
        self.on_board[color.index()]
    }

    /// Current phase for `color`
    pub fn phase(&self, color: Color) -> Phase {
        if self.in_hand(color) > 0 {
            Phase::Placing
        } else if self.on_board(color) == FLYING_THRESHOLD {
            Phase::Flying
        } else {
            Phase::Moving
        }
    }

    fn placing_over(&self) -> bool {
        self.in_hand == [0, 0]
    }

    fn empty_points(&self) -> impl Iterator<Item = u8> + '_ {
        (0..POINTS as u8).filter(|p| graph::get(&self.points, *p).is_none())
    }

    /// Decide the game for the side to move
    fn refresh_status(&mut self) {
        if self.pending_removal {
            return;
        }
        let reduced = [self.to_move, self.to_move.opposite()]
            .into_iter()
            .find(|side| self.placing_over() && self.on_board(*side) < FLYING_THRESHOLD);
        let loser = reduced.or_else(|| all_moves(self).is_empty().then_some(self.to_move));

        if let Some(loser) = loser {
            self.status = GameStatus::Finished;
            self.winner = Some(loser.opposite());
            info!(
                "[MORRIS] {} wins after {} actions",
                loser.opposite(),
                self.history.len()
            );
        }
    }
}

/// Destinations for a move starting at `point`
///
/// While placing, every empty point (the starting point is irrelevant).
/// Otherwise, when `point` holds a piece of the side to move: adjacent
/// empty points, or any empty point when flying. Empty while a removal is
/// pending or the game is over.
pub fn legal_moves(state: &MorrisState, point: u8) -> Vec<u8> {
    if state.status.is_terminal() || state.pending_removal {
        return Vec::new();
    }
    let side = state.to_move;
    match state.phase(side) {
        Phase::Placing => state.empty_points().collect(),
        _ if graph::get(&state.points, point) != Some(side) => Vec::new(),
        Phase::Flying => state.empty_points().collect(),
        Phase::Moving => graph::neighbors(point)
            .iter()
            .copied()
            .filter(|p| graph::get(&state.points, *p).is_none())
            .collect(),
    }
}

/// Every action available to the side to move, removals included
pub fn all_moves(state: &MorrisState) -> Vec<MorrisMove> {
    if state.status.is_terminal() {
        return Vec::new();
    }
    let side = state.to_move;
    if state.pending_removal {
        return removable_pieces(&state.points, side.opposite())
            .into_iter()
            .map(MorrisMove::Remove)
            .collect();
    }
    if state.phase(side) == Phase::Placing {
        return state.empty_points().map(MorrisMove::Place).collect();
    }
    (0..POINTS as u8)
        .filter(|p| graph::get(&state.points, *p) == Some(side))
        .flat_map(|from| {
            legal_moves(state, from)
                .into_iter()
                .map(move |to| MorrisMove::Slide { from, to })
        })
        .collect()
}

/// Apply a placement, slide or removal for the side to move
///
/// # Errors
///
/// Leaves `state` untouched when the game is over, the action does not fit
/// the phase, a removal is owed (or not owed), or a point is invalid.
pub fn apply_move(state: &MorrisState, mv: MorrisMove) -> RulesResult<MorrisState> {
    if state.status.is_terminal() {
        return Err(RulesError::GameOver);
    }
    let side = state.to_move;
    let mut next = state.clone();

    match mv {
        MorrisMove::Remove(point) => {
            validate_point(point)?;
            if !state.pending_removal {
                return Err(RulesError::WrongPhase {
                    reason: "no mill was formed".to_string(),
                });
            }
            if !removable_pieces(&state.points, side.opposite()).contains(&point) {
                return Err(RulesError::NotRemovable { point });
            }
            next.points[point as usize] = None;
            next.on_board[side.opposite().index()] -= 1;
            next.pending_removal = false;
            next.to_move = side.opposite();
            next.history = state.history.push(MoveRecord {
                mv,
                player: side,
                formed_mill: false,
            });
            debug!("[MORRIS] {} removes {}", side, point);
        }
        MorrisMove::Place(_) | MorrisMove::Slide { .. } => {
            if state.pending_removal {
                return Err(RulesError::RemovalPending);
            }
            let to = place_or_slide(state, &mut next, mv)?;
            let formed_mill = check_mill(&next.points, to, side);
            let can_remove = !removable_pieces(&next.points, side.opposite()).is_empty();
            if formed_mill && can_remove {
                next.pending_removal = true;
            } else {
                next.to_move = side.opposite();
            }
            next.history = state.history.push(MoveRecord {
                mv,
                player: side,
                formed_mill,
            });
            debug!("[MORRIS] {} plays {:?} (mill: {})", side, mv, formed_mill);
        }
    }

    next.refresh_status();
    Ok(next)
}

/// Move or drop the piece onto its destination and return that point
fn place_or_slide(state: &MorrisState, next: &mut MorrisState, mv: MorrisMove) -> RulesResult<u8> {
    let side = state.to_move;
    let phase = state.phase(side);
    match (mv, phase) {
        (MorrisMove::Place(to), Phase::Placing) => {
            ensure_empty(state, to)?;
            next.points[to as usize] = Some(side);
            next.in_hand[side.index()] -= 1;
            next.on_board[side.index()] += 1;
            Ok(to)
        }
        (MorrisMove::Slide { from, to }, Phase::Moving | Phase::Flying) => {
            validate_point(from)?;
            ensure_empty(state, to)?;
            if graph::get(&state.points, from) != Some(side) {
                return Err(RulesError::WrongPhase {
                    reason: format!("point {from} does not hold a {side} piece"),
                });
            }
            if phase == Phase::Moving && !is_adjacent(from, to) {
                return Err(RulesError::WrongPhase {
                    reason: format!("{from} and {to} are not adjacent"),
                });
            }
            next.points[from as usize] = None;
            next.points[to as usize] = Some(side);
            Ok(to)
        }
        (_, phase) => Err(RulesError::WrongPhase {
            reason: format!("{mv:?} during {phase}"),
        }),
    }
}

fn validate_point(point: u8) -> RulesResult<()> {
    if (point as usize) < POINTS {
        Ok(())
    } else {
        Err(RulesError::NoSuchPoint { point })
    }
}

fn ensure_empty(state: &MorrisState, point: u8) -> RulesResult<()> {
    validate_point(point)?;
    if graph::get(&state.points, point).is_some() {
        return Err(RulesError::WrongPhase {
            reason: format!("point {point} is occupied"),
        });
    }
    Ok(())
}
