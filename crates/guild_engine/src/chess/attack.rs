//! Attack detection and square checking
//!
//! Used for check detection, the self-check filter and castling safety.
//!
//! ## Algorithm
//!
//! To check if a square is attacked, iterate through the attacker's pieces
//! and ask whether each one could move there. Pawns are the exception:
//! their attack squares differ from their move squares, so they are
//! checked on the diagonals only.

use super::board::{ChessGrid, SIZE};
use super::movegen::{is_path_clear, KING_STEPS, KNIGHT_STEPS};
use super::piece::{forward, PieceKind};
use crate::color::Color;
use crate::grid::Position;

/// Check if `square` is attacked by any piece of `by`
///
/// # Arguments
///
/// * `grid` - Board to inspect
/// * `square` - Target square
/// * `by` - Color of the pieces that might attack
///
/// # Examples
///
/// ```rust,ignore
/// // Is e4 covered by black?
/// let attacked = is_square_attacked(&board.grid, Position::new(4, 4), Color::Black);
/// ```
pub fn is_square_attacked(grid: &ChessGrid, square: Position, by: Color) -> bool {
    grid.pieces()
        .filter(|(_, piece)| piece.color == by)
        .any(|(from, piece)| match piece.kind {
            PieceKind::Pawn => can_pawn_attack(from, square, by),
            PieceKind::Knight => is_step(from, square, &KNIGHT_STEPS),
            PieceKind::King => is_step(from, square, &KING_STEPS),
            PieceKind::Bishop => is_diagonal(from, square) && is_path_clear(grid, from, square),
            PieceKind::Rook => is_orthogonal(from, square) && is_path_clear(grid, from, square),
            PieceKind::Queen => {
                (is_diagonal(from, square) || is_orthogonal(from, square))
                    && is_path_clear(grid, from, square)
            }
        })
}

/// Is the king of `color` attacked?
///
/// A board without that king reports no check.
pub fn is_in_check(grid: &ChessGrid, color: Color) -> bool {
    grid.find(|p| p.kind == PieceKind::King && p.color == color)
        .is_some_and(|king| is_square_attacked(grid, king, color.opposite()))
}

fn can_pawn_attack(from: Position, target: Position, color: Color) -> bool {
    from.row_delta(target) == forward(color) && from.col_delta(target).abs() == 1
}

fn is_step(from: Position, target: Position, steps: &[(i8, i8)]) -> bool {
    steps
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc, SIZE, SIZE))
        .any(|to| to == target)
}

fn is_diagonal(from: Position, target: Position) -> bool {
    let dr = from.row_delta(target).abs();
    dr != 0 && dr == from.col_delta(target).abs()
}

fn is_orthogonal(from: Position, target: Position) -> bool {
    from != target && (from.row == target.row || from.col == target.col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::board::ChessBoard;
    use crate::chess::piece::Piece;

    #[test]
    fn test_initial_position_no_check() {
        //! Neither king starts in check
        let grid = ChessBoard::initial().grid;
        assert!(!is_in_check(&grid, Color::White));
        assert!(!is_in_check(&grid, Color::Black));
    }

    #[test]
    fn test_pawn_attacks_diagonally_forward() {
        //! A white pawn on e4 covers d5 and f5, not e5 or d3
        let grid = ChessBoard::empty(Color::White)
            .with_piece(Position::new(4, 4), Piece::new(PieceKind::Pawn, Color::White))
            .grid;
        assert!(is_square_attacked(&grid, Position::new(3, 3), Color::White));
        assert!(is_square_attacked(&grid, Position::new(3, 5), Color::White));
        assert!(!is_square_attacked(&grid, Position::new(3, 4), Color::White));
        assert!(!is_square_attacked(&grid, Position::new(5, 3), Color::White));
    }

    #[test]
    fn test_blocked_rook_does_not_attack() {
        let grid = ChessBoard::empty(Color::White)
            .with_piece(Position::new(0, 0), Piece::new(PieceKind::Rook, Color::Black))
            .with_piece(Position::new(3, 0), Piece::new(PieceKind::Pawn, Color::White))
            .grid;
        assert!(is_square_attacked(&grid, Position::new(3, 0), Color::Black));
        assert!(!is_square_attacked(&grid, Position::new(6, 0), Color::Black));
    }

    #[test]
    fn test_queen_gives_check() {
        //! Queen on the king's diagonal with nothing between
        let grid = ChessBoard::empty(Color::White)
            .with_piece(Position::new(7, 4), Piece::new(PieceKind::King, Color::White))
            .with_piece(Position::new(4, 7), Piece::new(PieceKind::Queen, Color::Black))
            .grid;
        assert!(is_in_check(&grid, Color::White));
    }

    #[test]
    fn test_knight_attack() {
        let grid = ChessBoard::empty(Color::White)
            .with_piece(Position::new(7, 4), Piece::new(PieceKind::King, Color::White))
            .with_piece(Position::new(5, 3), Piece::new(PieceKind::Knight, Color::Black))
            .grid;
        assert!(is_in_check(&grid, Color::White));
    }
}
