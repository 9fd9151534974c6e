//! Chess opponent
//!
//! Easy and Medium score every legal move with a cheap heuristic and pick
//! at random from the top half or top quarter. Hard runs alpha-beta.

use rand::Rng;
use tracing::debug;

use super::piece::PieceKind;
use super::rules::{all_legal_moves, ChessMove};
use super::state::ChessState;
use crate::choice;
use crate::color::Color;
use crate::difficulty::Difficulty;
use crate::search::best_move;

/// Plies searched by the Hard opponent unless configured otherwise
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

/// Pick a move for `side` using the default search depth
///
/// Returns `None` when it is not `side`'s turn, a promotion is pending,
/// the game is over or no legal move exists.
pub fn select_opponent_move<R: Rng + ?Sized>(
    state: &ChessState,
    side: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<ChessMove> {
    select_opponent_move_at_depth(state, side, difficulty, DEFAULT_SEARCH_DEPTH, rng)
}

/// Like [`select_opponent_move`] with an explicit Hard search depth
pub fn select_opponent_move_at_depth<R: Rng + ?Sized>(
    state: &ChessState,
    side: Color,
    difficulty: Difficulty,
    depth: u32,
    rng: &mut R,
) -> Option<ChessMove> {
    if state.status.is_terminal()
        || state.pending_promotion.is_some()
        || state.board.to_move != side
    {
        return None;
    }

    let chosen = match difficulty {
        Difficulty::Easy => choice::from_top(scored_moves(state, rng), 2, rng),
        Difficulty::Medium => choice::from_top(scored_moves(state, rng), 4, rng),
        Difficulty::Hard => best_move(&state.board, depth.max(1)).map(|outcome| outcome.best),
    };
    debug!("[AI] chess {} picked {:?}", difficulty, chosen);
    chosen
}

/// Heuristic score for each legal move, with a random jitter in [0, 1)
fn scored_moves<R: Rng + ?Sized>(state: &ChessState, rng: &mut R) -> Vec<(ChessMove, f64)> {
    all_legal_moves(&state.board)
        .into_iter()
        .map(|mv| {
            let score = heuristic(state, &mv) + rng.random::<f64>();
            (mv, score)
        })
        .collect()
}

fn heuristic(state: &ChessState, mv: &ChessMove) -> f64 {
    let grid = &state.board.grid;
    let mut score = 0.0;
    if let Some(victim) = grid.get(mv.to) {
        score += victim.kind.capture_value() * 10.0;
    }
    let central = (2..=5).contains(&mv.to.row) && (2..=5).contains(&mv.to.col);
    if central {
        score += 2.0;
    }
    match grid.get(mv.from).map(|p| p.kind) {
        Some(PieceKind::Pawn) => score += 0.5,
        Some(PieceKind::King) if (2..=5).contains(&mv.to.row) => score -= 1.0,
        _ => {}
    }
    score
}
