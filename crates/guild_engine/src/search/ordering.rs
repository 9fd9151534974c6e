//! Move ordering for alpha-beta pruning
//!
//! Trying the strongest moves first (captures of valuable pieces by cheap
//! ones, then everything else) lets the window close sooner.

use super::Searchable;

/// Sort moves by the state's ordering key, best first.
///
/// The sort is stable so equal keys keep generation order and the search
/// stays deterministic.
pub fn order_moves<S: Searchable>(state: &S, moves: &mut [S::Move]) {
    moves.sort_by_cached_key(|mv| std::cmp::Reverse(state.order_key(mv)));
}
