//! Xiangqi opponent
//!
//! No search: Hard scores each legal move one ply deep.

use rand::Rng;
use tracing::debug;

use super::board::in_palace;
use super::movegen::pseudo_destinations;
use super::piece::{PieceKind, Side};
use super::rules::{all_legal_moves, is_in_check, play, XiangqiMove};
use super::state::XiangqiState;
use crate::choice;
use crate::difficulty::Difficulty;
use crate::grid::Position;

/// Pick a move for `side`, or `None` when it has nothing to play
pub fn select_opponent_move<R: Rng + ?Sized>(
    state: &XiangqiState,
    side: Side,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<XiangqiMove> {
    if state.status.is_terminal() || state.board.to_move != side {
        return None;
    }
    let moves = all_legal_moves(&state.board);

    let chosen = match difficulty {
        Difficulty::Easy => choice::uniform(&moves, rng),
        Difficulty::Medium => {
            let captures: Vec<XiangqiMove> = moves
                .iter()
                .copied()
                .filter(|mv| state.board.grid.get(mv.to).is_some())
                .collect();
            choice::prefer(&captures, &moves, rng)
        }
        Difficulty::Hard => {
            let scored = moves
                .into_iter()
                .map(|mv| (mv, score_move(state, side, mv)))
                .collect();
            choice::best_with_variety(scored, rng)
        }
    };
    debug!("[AI] xiangqi {} picked {:?}", difficulty, chosen);
    chosen
}

/// One-ply score: material won, central files, development, hanging the
/// moved piece, pressure on the own palace and giving check
fn score_move(state: &XiangqiState, side: Side, mv: XiangqiMove) -> f64 {
    let grid = &state.board.grid;
    let Some(piece) = grid.get(mv.from) else {
        return f64::MIN;
    };
    let mut score = 0.0;

    if let Some(victim) = grid.get(mv.to) {
        score += victim.kind.value() * 10.0;
    }
    if (3..=5).contains(&mv.to.col) {
        score += 1.0;
    }
    score += match piece.kind {
        PieceKind::Horse | PieceKind::Cannon => 1.5,
        PieceKind::Chariot => 1.0,
        PieceKind::Soldier if !side.owns_row(mv.to.row) => 1.0,
        PieceKind::General => -2.0,
        _ => 0.0,
    };

    let after = play(&state.board, mv);
    let enemy_reach: Vec<Position> = after
        .grid
        .pieces()
        .filter(|(_, p)| p.side != side)
        .flat_map(|(from, _)| pseudo_destinations(&after.grid, from))
        .collect();
    if enemy_reach.contains(&mv.to) {
        score -= piece.kind.value() * 5.0;
    }
    let palace_pressure = enemy_reach
        .iter()
        .filter(|pos| in_palace(side, **pos))
        .count();
    score -= palace_pressure as f64 * 0.5;
    if is_in_check(&after.grid, side.opposite()) {
        score += 5.0;
    }
    score
}
