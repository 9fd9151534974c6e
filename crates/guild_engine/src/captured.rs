//! Captured piece tallies
//!
//! Tracks what each side has taken off the board. Chess, Xiangqi and
//! checkers keep one of these inside their game state; Go and Nine Men's
//! Morris only count stones and keep plain counters instead.
//!
//! # Material Balance
//!
//! [`CaptureTally::material_balance`] is positive when white (red in
//! Xiangqi) has taken more value than black.

use crate::color::Seat;

/// Pieces captured by each side
///
/// # Usage
///
/// ```rust,ignore
/// tally.record(Color::White, Piece::new(PieceKind::Queen, Color::Black));
/// assert_eq!(tally.taken_by(Color::White).len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureTally<P> {
    taken: [Vec<P>; 2],
}

impl<P> Default for CaptureTally<P> {
    fn default() -> Self {
        Self {
            taken: [Vec::new(), Vec::new()],
        }
    }
}

impl<P> CaptureTally<P> {
    /// Record `piece` as taken by `captor`
    pub fn record<S: Seat>(&mut self, captor: S, piece: P) {
        self.taken[captor.index()].push(piece);
    }

    /// Pieces `captor` has taken, in capture order
    pub fn taken_by<S: Seat>(&self, captor: S) -> &[P] {
        &self.taken[captor.index()]
    }

    pub fn count<S: Seat>(&self, captor: S) -> usize {
        self.taken[captor.index()].len()
    }

    /// Value taken by white (or red) minus value taken by black
    pub fn material_balance(&self, value: impl Fn(&P) -> i32) -> i32 {
        let first: i32 = self.taken[0].iter().map(&value).sum();
        let second: i32 = self.taken[1].iter().map(&value).sum();
        first - second
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_tally_default_empty() {
        //! A fresh tally has nothing and no balance
        let tally: CaptureTally<u8> = CaptureTally::default();
        assert_eq!(tally.count(Color::White), 0);
        assert_eq!(tally.count(Color::Black), 0);
        assert_eq!(tally.material_balance(|p| i32::from(*p)), 0);
    }

    #[test]
    fn test_material_balance_sign() {
        //! White taking a rook and a pawn against a knight is +3
        let mut tally = CaptureTally::default();
        tally.record(Color::White, 5u8);
        tally.record(Color::White, 1u8);
        tally.record(Color::Black, 3u8);
        assert_eq!(tally.material_balance(|p| i32::from(*p)), 3);
        assert_eq!(tally.taken_by(Color::White), &[5, 1]);
    }
}
