//! Checkers opponent
//!
//! Easy is uniform, Medium takes jumps then king moves, Hard searches.

use rand::Rng;
use tracing::debug;

use super::moves::{all_legal_moves, CheckersMove};
use super::state::CheckersState;
use crate::choice;
use crate::color::Color;
use crate::difficulty::Difficulty;
use crate::search::best_move;

/// Plies searched by the Hard opponent unless configured otherwise
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

/// Pick a move for `side` using the default search depth
pub fn select_opponent_move<R: Rng + ?Sized>(
    state: &CheckersState,
    side: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<CheckersMove> {
    select_opponent_move_at_depth(state, side, difficulty, DEFAULT_SEARCH_DEPTH, rng)
}

/// Like [`select_opponent_move`] with an explicit Hard search depth
///
/// During a multi-jump this returns the next hop for the same piece.
pub fn select_opponent_move_at_depth<R: Rng + ?Sized>(
    state: &CheckersState,
    side: Color,
    difficulty: Difficulty,
    depth: u32,
    rng: &mut R,
) -> Option<CheckersMove> {
    if state.status.is_terminal() || state.board.to_move != side {
        return None;
    }
    let moves = all_legal_moves(&state.board);

    let chosen = match difficulty {
        Difficulty::Easy => choice::uniform(&moves, rng),
        Difficulty::Medium => {
            let jumps: Vec<CheckersMove> = moves.iter().copied().filter(|m| m.is_jump()).collect();
            let king_moves: Vec<CheckersMove> = moves
                .iter()
                .copied()
                .filter(|m| state.board.grid.get(m.from).is_some_and(|p| p.king))
                .collect();
            if !jumps.is_empty() {
                choice::uniform(&jumps, rng)
            } else if !king_moves.is_empty() {
                choice::uniform(&king_moves, rng)
            } else {
                choice::uniform(&moves, rng)
            }
        }
        Difficulty::Hard => best_move(&state.board, depth.max(1)).map(|outcome| outcome.best),
    };
    debug!("[AI] checkers {} picked {:?}", difficulty, chosen);
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::board::{Checker, CheckersBoard};
    use crate::checkers::state::apply_move;
    use crate::grid::Position;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_level_legal_from_opening() {
        let state = CheckersState::new();
        let mut rng = StdRng::seed_from_u64(21);
        for level in Difficulty::ALL {
            let mv = select_opponent_move(&state, Color::White, level, &mut rng)
                .expect("opening has moves");
            assert!(apply_move(&state, mv).is_ok());
        }
    }

    #[test]
    fn test_medium_prefers_king_moves() {
        //! With no jumps around, a king move is chosen over a man's step
        let state = CheckersState::from_board(
            CheckersBoard::empty(Color::White)
                .with_piece(Position::new(6, 1), Checker::man(Color::White))
                .with_piece(Position::new(3, 4), Checker::king(Color::White))
                .with_piece(Position::new(0, 7), Checker::man(Color::Black)),
        );
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..20 {
            let mv = select_opponent_move(&state, Color::White, Difficulty::Medium, &mut rng)
                .expect("moves exist");
            assert_eq!(mv.from, Position::new(3, 4));
        }
    }

    #[test]
    fn test_no_moves_returns_none() {
        //! A side that cannot move has already lost
        let state = CheckersState::from_board(
            CheckersBoard::empty(Color::Black)
                .with_piece(Position::new(7, 0), Checker::man(Color::Black))
                .with_piece(Position::new(0, 1), Checker::man(Color::White)),
        );
        assert!(state.status.is_terminal());
        assert_eq!(state.winner, Some(Color::White));
        let mut rng = StdRng::seed_from_u64(0);
        assert!(select_opponent_move(&state, Color::Black, Difficulty::Hard, &mut rng).is_none());
    }
}
