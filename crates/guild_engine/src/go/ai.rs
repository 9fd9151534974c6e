//! Go opponent
//!
//! Scores placements one ply deep. The opponent never passes on its own;
//! `None` means no legal placement exists and the driver decides what to do.

use rand::Rng;
use tracing::debug;

use super::groups::group_at;
use super::state::{legal_placements, place_stone, GoMove, GoState};
use crate::choice;
use crate::color::Color;
use crate::difficulty::Difficulty;
use crate::grid::Position;

/// Pick a placement for `side`
pub fn select_opponent_move<R: Rng + ?Sized>(
    state: &GoState,
    side: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<GoMove> {
    if state.status.is_terminal() || state.to_move != side {
        return None;
    }
    let placements = legal_placements(state);

    let chosen = match difficulty {
        Difficulty::Easy => choice::uniform(&placements, rng),
        Difficulty::Medium => {
            let capturing: Vec<Position> = placements
                .iter()
                .copied()
                .filter(|pos| {
                    place_stone(&state.board, *pos, side).is_ok_and(|p| !p.captured.is_empty())
                })
                .collect();
            choice::prefer(&capturing, &placements, rng)
        }
        Difficulty::Hard => {
            let scored = placements
                .into_iter()
                .map(|pos| (pos, score_placement(state, side, pos)))
                .collect();
            choice::best_with_variety(scored, rng)
        }
    };
    debug!("[AI] go {} picked {:?}", difficulty, chosen);
    chosen.map(GoMove::Place)
}

/// Captures, ataris on neighbouring enemy groups, own liberties, rescue of
/// an own group in atari, and a pull toward the centre; self-atari and
/// filling an own eye are penalised
fn score_placement(state: &GoState, side: Color, pos: Position) -> f64 {
    let Ok(placement) = place_stone(&state.board, pos, side) else {
        return f64::MIN;
    };
    let before = &state.board;
    let after = &placement.board;
    let mut score = placement.captured.len() as f64 * 10.0;

    for neighbor in after.neighbors(pos) {
        if let Some(group) = group_at(after, neighbor).filter(|g| g.color != side) {
            if group.in_atari() {
                score += 3.0;
            }
        }
        if let Some(group) = group_at(before, neighbor).filter(|g| g.color == side) {
            if group.in_atari() {
                score += 4.0;
            }
        }
    }

    if let Some(own) = group_at(after, pos) {
        score += own.liberties.len().min(4) as f64 * 0.5;
        if own.in_atari() {
            score -= 5.0;
        }
    }

    let own_eye = before.neighbors(pos).all(|n| before.get(n) == Some(side));
    if own_eye && placement.captured.is_empty() {
        score -= 3.0;
    }

    let half = (state.board.size() as f64 - 1.0) / 2.0;
    let distance = (f64::from(pos.row) - half).abs() + (f64::from(pos.col) - half).abs();
    score + 1.0 - distance / (2.0 * half)
}
