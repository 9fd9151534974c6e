//! Minimax with alpha-beta pruning
//!
//! Scores are always taken from the root side's perspective. A node
//! maximizes when the root side is on move and minimizes otherwise, which
//! lets games where a side moves twice in a row (a checkers multi-jump)
//! use the same search unchanged.

use tracing::{debug, trace};

use super::ordering::order_moves;
use super::{Searchable, NO_MOVES_SCORE};

/// Result of a root search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    pub best: M,
    pub score: i32,
    pub nodes: u64,
}

/// Score `state` to `depth` plies for `root`
///
/// # Arguments
///
/// * `state` - Position to score
/// * `depth` - Remaining plies; 0 returns the static evaluation
/// * `alpha`, `beta` - Current window
/// * `root` - Side whose score is maximized
/// * `nodes` - Incremented once per visited node
pub fn minimax<S: Searchable>(
    state: &S,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    root: S::Side,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    let maximizing = state.side_to_move() == root;
    let mut moves = state.moves();
    if moves.is_empty() {
        return if maximizing {
            -NO_MOVES_SCORE
        } else {
            NO_MOVES_SCORE
        };
    }
    if depth == 0 {
        return state.evaluate(root);
    }

    order_moves(state, &mut moves);

    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            let score = minimax(&state.play(mv), depth - 1, alpha, beta, root, nodes);
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                trace!("[SEARCH] beta cutoff at depth {}", depth);
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            let score = minimax(&state.play(mv), depth - 1, alpha, beta, root, nodes);
            best = best.min(score);
            beta = beta.min(score);
            if alpha >= beta {
                trace!("[SEARCH] alpha cutoff at depth {}", depth);
                break;
            }
        }
        best
    }
}

/// Best move for the side to move, searching `depth` plies
///
/// Returns `None` when the side to move has no legal move. Among equally
/// scored moves the first in ordering wins.
///
/// # Example
///
/// ```rust,ignore
/// let outcome = best_move(&board, 4).expect("position has moves");
/// board = board.play(outcome.best);
/// ```
pub fn best_move<S: Searchable>(state: &S, depth: u32) -> Option<SearchOutcome<S::Move>> {
    let root = state.side_to_move();
    let mut moves = state.moves();
    order_moves(state, &mut moves);

    let mut nodes = 0u64;
    let mut alpha = i32::MIN;
    let beta = i32::MAX;
    let mut best: Option<(S::Move, i32)> = None;

    for mv in moves {
        let score = minimax(
            &state.play(mv),
            depth.saturating_sub(1),
            alpha,
            beta,
            root,
            &mut nodes,
        );
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    let (best, score) = best?;
    debug!(
        "[SEARCH] depth {} best {:?} score {} after {} nodes",
        depth, best, score, nodes
    );
    Some(SearchOutcome { best, score, nodes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    /// Take-away game: remove 1 or 2 counters, the player facing an empty
    /// pile has no move and loses.
    #[derive(Clone, Copy, Debug)]
    struct Pile {
        counters: u8,
        to_move: Color,
    }

    impl Searchable for Pile {
        type Move = u8;
        type Side = Color;

        fn side_to_move(&self) -> Color {
            self.to_move
        }

        fn moves(&self) -> Vec<u8> {
            (1..=2).filter(|n| *n <= self.counters).collect()
        }

        fn play(&self, mv: u8) -> Self {
            Pile {
                counters: self.counters - mv,
                to_move: self.to_move.opposite(),
            }
        }

        fn evaluate(&self, _perspective: Color) -> i32 {
            0
        }
    }

    #[test]
    fn test_best_move_wins_take_away() {
        //! From 4 counters the winning reply leaves a multiple of 3
        let pile = Pile {
            counters: 4,
            to_move: Color::White,
        };
        let outcome = best_move(&pile, 6).expect("moves exist");
        assert_eq!(outcome.best, 1);
        assert_eq!(outcome.score, NO_MOVES_SCORE);
    }

    #[test]
    fn test_no_moves_scores_extreme() {
        //! A stuck maximizer scores -1000, never a draw
        let pile = Pile {
            counters: 0,
            to_move: Color::White,
        };
        let mut nodes = 0;
        let score = minimax(&pile, 3, i32::MIN, i32::MAX, Color::White, &mut nodes);
        assert_eq!(score, -NO_MOVES_SCORE);
        let score = minimax(&pile, 3, i32::MIN, i32::MAX, Color::Black, &mut nodes);
        assert_eq!(score, NO_MOVES_SCORE);
        assert!(best_move(&pile, 3).is_none());
    }

    #[test]
    fn test_losing_position_scores_negative() {
        let pile = Pile {
            counters: 3,
            to_move: Color::White,
        };
        let outcome = best_move(&pile, 6).expect("moves exist");
        assert_eq!(outcome.score, -NO_MOVES_SCORE);
    }
}
