//! Fixed-depth alpha-beta search
//!
//! Shared by the games whose Hard opponent searches (chess and checkers).
//! The search walks immutable states: every child is a fresh value produced
//! by [`Searchable::play`], so branches never share mutable state.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Minimax with alpha-beta pruning
//! - `ordering` - Move ordering so likely-best moves are tried first

mod alphabeta;
mod ordering;

pub use alphabeta::{best_move, minimax, SearchOutcome};
pub use ordering::order_moves;

use crate::color::Seat;

/// Score of a position whose side to move has no legal reply.
///
/// Positive when the minimizing side is stuck, negative when the maximizing
/// side is. Never a draw value.
pub const NO_MOVES_SCORE: i32 = 1000;

/// A game position the search can walk
///
/// Implementations must be pure: `moves` and `play` never mutate `self`.
pub trait Searchable: Sized {
    type Move: Copy + std::fmt::Debug;
    type Side: Seat;

    fn side_to_move(&self) -> Self::Side;

    /// Every legal move for the side to move
    fn moves(&self) -> Vec<Self::Move>;

    /// The position after `mv`. Only called with moves from [`Searchable::moves`].
    fn play(&self, mv: Self::Move) -> Self;

    /// Static score from `perspective`'s point of view
    fn evaluate(&self, perspective: Self::Side) -> i32;

    /// Higher keys are searched first
    fn order_key(&self, _mv: &Self::Move) -> i32 {
        0
    }
}
