//! Move generation, forced capture and move application
//!
//! Forced capture is global: when any piece of the side to move can jump,
//! only jumps are legal anywhere on the board.

use serde::{Deserialize, Serialize};

use super::board::{crowning_row, Checker, CheckersBoard, CheckersGrid, SIZE};
use crate::color::Color;
use crate::grid::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckersMove {
    pub from: Position,
    pub to: Position,
}

impl CheckersMove {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    pub fn is_jump(&self) -> bool {
        self.from.row_delta(self.to).abs() == 2
    }
}

/// Landing squares of every jump available to the piece on `from`
pub fn jumps(grid: &CheckersGrid, from: Position) -> Vec<Position> {
    let Some(piece) = grid.get(from) else {
        return Vec::new();
    };
    piece
        .directions()
        .iter()
        .filter_map(|&(dr, dc)| {
            let over = from.offset(dr, dc, SIZE, SIZE)?;
            let land = from.offset(dr * 2, dc * 2, SIZE, SIZE)?;
            let enemy_between = grid.get(over).is_some_and(|p| p.color != piece.color);
            (enemy_between && grid.get(land).is_none()).then_some(land)
        })
        .collect()
}

/// One-square diagonal steps available to the piece on `from`
pub fn steps(grid: &CheckersGrid, from: Position) -> Vec<Position> {
    let Some(piece) = grid.get(from) else {
        return Vec::new();
    };
    piece
        .directions()
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc, SIZE, SIZE))
        .filter(|to| grid.get(*to).is_none())
        .collect()
}

/// Whether the piece on `from` has at least one jump
pub fn can_jump(grid: &CheckersGrid, from: Position) -> bool {
    !jumps(grid, from).is_empty()
}

/// Whether any piece of `color` has a jump
pub fn must_jump(grid: &CheckersGrid, color: Color) -> bool {
    grid.pieces()
        .filter(|(_, p)| p.color == color)
        .any(|(pos, _)| can_jump(grid, pos))
}

/// Legal destinations for the piece on `from` with forced capture and the
/// multi-jump lock applied
pub fn legal_destinations(board: &CheckersBoard, from: Position) -> Vec<Position> {
    match board.grid.get(from) {
        Some(piece) if piece.color == board.to_move => {}
        _ => return Vec::new(),
    }
    if let Some(jumper) = board.continuing_from {
        return if jumper == from {
            jumps(&board.grid, from)
        } else {
            Vec::new()
        };
    }
    if must_jump(&board.grid, board.to_move) {
        jumps(&board.grid, from)
    } else {
        steps(&board.grid, from)
    }
}

/// Every legal move for the side to move
pub fn all_legal_moves(board: &CheckersBoard) -> Vec<CheckersMove> {
    board
        .grid
        .pieces()
        .filter(|(_, p)| p.color == board.to_move)
        .flat_map(|(from, _)| {
            legal_destinations(board, from)
                .into_iter()
                .map(move |to| CheckersMove::new(from, to))
        })
        .collect()
}

/// What a move did besides relocating the piece
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveEffects {
    pub captured: Option<(Position, Checker)>,
    pub crowned: bool,
    pub continues: bool,
}

/// Apply `mv` without checking it
///
/// Removes a jumped piece, crowns on the far row, and keeps the turn with
/// the same piece when it can jump again from its landing square.
pub fn play(board: &CheckersBoard, mv: CheckersMove) -> (CheckersBoard, MoveEffects) {
    let mut next = *board;
    let mut effects = MoveEffects::default();
    let Some(mut piece) = next.grid.take(mv.from) else {
        return (next, effects);
    };

    if mv.is_jump() {
        let over = mv.from.midpoint(mv.to);
        effects.captured = next.grid.take(over).map(|victim| (over, victim));
    }
    if !piece.king && mv.to.row == crowning_row(piece.color) {
        piece.king = true;
        effects.crowned = true;
    }
    next.grid.set(mv.to, Some(piece));

    effects.continues = mv.is_jump() && can_jump(&next.grid, mv.to);
    if effects.continues {
        next.continuing_from = Some(mv.to);
    } else {
        next.continuing_from = None;
        next.to_move = board.to_move.opposite();
    }
    (next, effects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_moves() {
        //! White's front row has seven diagonal steps
        assert_eq!(all_legal_moves(&CheckersBoard::initial()).len(), 7);
    }

    #[test]
    fn test_jump_scenario() {
        //! White (5,2) over black (4,3) to (3,4); the jumped piece is removed
        let board = CheckersBoard::empty(Color::White)
            .with_piece(Position::new(5, 2), Checker::man(Color::White))
            .with_piece(Position::new(4, 3), Checker::man(Color::Black));
        assert!(can_jump(&board.grid, Position::new(5, 2)));
        assert!(legal_destinations(&board, Position::new(5, 2)).contains(&Position::new(3, 4)));

        let (next, effects) = play(&board, CheckersMove::new(Position::new(5, 2), Position::new(3, 4)));
        assert_eq!(next.grid.get(Position::new(4, 3)), None);
        assert_eq!(effects.captured.map(|(pos, _)| pos), Some(Position::new(4, 3)));
        assert_eq!(next.to_move, Color::Black);
    }

    #[test]
    fn test_forced_capture_prunes_steps() {
        //! A piece without a jump has no moves while another piece can jump
        let board = CheckersBoard::empty(Color::White)
            .with_piece(Position::new(5, 2), Checker::man(Color::White))
            .with_piece(Position::new(4, 3), Checker::man(Color::Black))
            .with_piece(Position::new(5, 6), Checker::man(Color::White));
        assert!(legal_destinations(&board, Position::new(5, 6)).is_empty());
        assert_eq!(
            legal_destinations(&board, Position::new(5, 2)),
            vec![Position::new(3, 4)]
        );
    }

    #[test]
    fn test_men_do_not_move_backward() {
        let board = CheckersBoard::empty(Color::White)
            .with_piece(Position::new(4, 3), Checker::man(Color::White));
        let moves = legal_destinations(&board, Position::new(4, 3));
        assert!(moves.iter().all(|to| to.row == 3));
    }

    #[test]
    fn test_king_moves_all_ways() {
        let board = CheckersBoard::empty(Color::White)
            .with_piece(Position::new(4, 3), Checker::king(Color::White));
        assert_eq!(legal_destinations(&board, Position::new(4, 3)).len(), 4);
    }

    #[test]
    fn test_multi_jump_keeps_turn() {
        //! After the first jump the same piece must keep jumping
        let board = CheckersBoard::empty(Color::White)
            .with_piece(Position::new(7, 0), Checker::man(Color::White))
            .with_piece(Position::new(6, 1), Checker::man(Color::Black))
            .with_piece(Position::new(4, 3), Checker::man(Color::Black))
            .with_piece(Position::new(7, 6), Checker::man(Color::White));
        let (mid, effects) = play(&board, CheckersMove::new(Position::new(7, 0), Position::new(5, 2)));
        assert!(effects.continues);
        assert_eq!(mid.to_move, Color::White);
        assert_eq!(mid.continuing_from, Some(Position::new(5, 2)));
        assert!(legal_destinations(&mid, Position::new(7, 6)).is_empty());
        assert_eq!(
            legal_destinations(&mid, Position::new(5, 2)),
            vec![Position::new(3, 4)]
        );

        let (done, effects) = play(&mid, CheckersMove::new(Position::new(5, 2), Position::new(3, 4)));
        assert!(!effects.continues);
        assert_eq!(done.to_move, Color::Black);
        assert_eq!(done.count(Color::Black), 0);
    }

    #[test]
    fn test_crowning() {
        let board = CheckersBoard::empty(Color::White)
            .with_piece(Position::new(1, 2), Checker::man(Color::White));
        let (next, effects) = play(&board, CheckersMove::new(Position::new(1, 2), Position::new(0, 1)));
        assert!(effects.crowned);
        assert_eq!(next.grid.get(Position::new(0, 1)), Some(Checker::king(Color::White)));
    }
}
