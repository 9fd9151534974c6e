//! Morris opponent
//!
//! One-ply heuristics. When a removal is owed the opponent picks which
//! piece to take; otherwise it places or slides.

use rand::Rng;
use tracing::debug;

use super::graph::{self, check_mill, MILLS};
use super::state::{all_moves, MorrisMove, MorrisState};
use crate::choice;
use crate::color::Color;
use crate::difficulty::Difficulty;

/// Pick the next action for `side`, removals included
pub fn select_opponent_move<R: Rng + ?Sized>(
    state: &MorrisState,
    side: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<MorrisMove> {
    if state.status.is_terminal() || state.to_move != side {
        return None;
    }
    let moves = all_moves(state);

    let chosen = if state.pending_removal {
        select_removal(state, side, difficulty, &moves, rng)
    } else {
        match difficulty {
            Difficulty::Easy => choice::uniform(&moves, rng),
            Difficulty::Medium => {
                let milling: Vec<MorrisMove> = moves
                    .iter()
                    .copied()
                    .filter(|mv| forms_mill(state, side, *mv))
                    .collect();
                choice::prefer(&milling, &moves, rng)
            }
            Difficulty::Hard => {
                let scored = moves
                    .into_iter()
                    .map(|mv| (mv, score_move(state, side, mv)))
                    .collect();
                choice::best_with_variety(scored, rng)
            }
        }
    };
    debug!("[AI] morris {} picked {:?}", difficulty, chosen);
    chosen
}

/// Hard takes a piece from an opposing two-in-a-row when it can
fn select_removal<R: Rng + ?Sized>(
    state: &MorrisState,
    side: Color,
    difficulty: Difficulty,
    moves: &[MorrisMove],
    rng: &mut R,
) -> Option<MorrisMove> {
    if difficulty != Difficulty::Hard {
        return choice::uniform(moves, rng);
    }
    let threatening: Vec<MorrisMove> = moves
        .iter()
        .copied()
        .filter(|mv| match mv {
            MorrisMove::Remove(point) => {
                open_twos_through(&state.points, *point, side.opposite()) > 0
            }
            _ => false,
        })
        .collect();
    if threatening.is_empty() {
        choice::uniform(moves, rng)
    } else {
        choice::uniform(&threatening, rng)
    }
}

fn after(state: &MorrisState, side: Color, mv: MorrisMove) -> graph::Points {
    let mut points = state.points;
    match mv {
        MorrisMove::Place(to) => points[to as usize] = Some(side),
        MorrisMove::Slide { from, to } => {
            points[from as usize] = None;
            points[to as usize] = Some(side);
        }
        MorrisMove::Remove(point) => points[point as usize] = None,
    }
    points
}

fn forms_mill(state: &MorrisState, side: Color, mv: MorrisMove) -> bool {
    mv.destination()
        .is_some_and(|to| check_mill(&after(state, side, mv), to, side))
}

/// Mills through `point` holding two of `color` and one empty point
fn open_twos_through(points: &graph::Points, point: u8, color: Color) -> usize {
    MILLS
        .iter()
        .filter(|mill| mill.contains(&point))
        .filter(|mill| {
            let own = mill.iter().filter(|p| graph::get(points, **p) == Some(color)).count();
            let empty = mill.iter().filter(|p| graph::get(points, **p).is_none()).count();
            own == 2 && empty == 1
        })
        .count()
}

/// Mills score highest, then blocking an opposing two-in-a-row, then
/// building one's own, with mobility as a tiebreak
fn score_move(state: &MorrisState, side: Color, mv: MorrisMove) -> f64 {
    let Some(to) = mv.destination() else {
        return 0.0;
    };
    let points = after(state, side, mv);
    let mut score = 0.0;

    if check_mill(&points, to, side) {
        score += 10.0;
    }
    let blocked = MILLS
        .iter()
        .filter(|mill| mill.contains(&to))
        .filter(|mill| {
            mill.iter()
                .filter(|p| graph::get(&state.points, **p) == Some(side.opposite()))
                .count()
                == 2
        })
        .count();
    score += blocked as f64 * 4.0;
    score += open_twos_through(&points, to, side) as f64 * 2.0;

    let mobility = graph::neighbors(to)
        .iter()
        .filter(|p| graph::get(&points, **p).is_none())
        .count();
    score + mobility as f64 * 0.25
}
