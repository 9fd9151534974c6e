//! Legality filter and move application
//!
//! A move is legal when, played on a scratch copy, it neither leaves the
//! mover's general attacked nor leaves the two generals facing each other
//! on an open file.

use serde::{Deserialize, Serialize};

use super::board::{XiangqiBoard, XiangqiGrid};
use super::movegen::pseudo_destinations;
use super::piece::{PieceKind, Side};
use crate::grid::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XiangqiMove {
    pub from: Position,
    pub to: Position,
}

impl XiangqiMove {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

/// Is `side`'s general attacked by any pseudo-legal enemy move?
pub fn is_in_check(grid: &XiangqiGrid, side: Side) -> bool {
    let Some(general) = grid.find(|p| p.kind == PieceKind::General && p.side == side) else {
        return false;
    };
    grid.pieces()
        .filter(|(_, piece)| piece.side != side)
        .any(|(from, _)| pseudo_destinations(grid, from).contains(&general))
}

/// Both generals on one file with nothing between them
pub fn generals_facing(grid: &XiangqiGrid) -> bool {
    let red = grid.find(|p| p.kind == PieceKind::General && p.side == Side::Red);
    let black = grid.find(|p| p.kind == PieceKind::General && p.side == Side::Black);
    let (Some(red), Some(black)) = (red, black) else {
        return false;
    };
    if red.col != black.col {
        return false;
    }
    let (top, bottom) = (red.row.min(black.row), red.row.max(black.row));
    ((top + 1)..bottom).all(|row| grid.get(Position::new(row, red.col)).is_none())
}

/// Apply `mv` without checking it. Flips the side to move.
pub fn play(board: &XiangqiBoard, mv: XiangqiMove) -> XiangqiBoard {
    let mut next = *board;
    let piece = next.grid.take(mv.from);
    next.grid.set(mv.to, piece);
    next.to_move = board.to_move.opposite();
    next
}

/// Legal destinations for the piece on `from`, for whichever side owns it
pub fn legal_destinations(board: &XiangqiBoard, from: Position) -> Vec<Position> {
    let Some(piece) = board.grid.get(from) else {
        return Vec::new();
    };
    pseudo_destinations(&board.grid, from)
        .into_iter()
        .filter(|to| {
            let after = play(board, XiangqiMove::new(from, *to));
            !is_in_check(&after.grid, piece.side) && !generals_facing(&after.grid)
        })
        .collect()
}

/// Every legal move for the side to move
pub fn all_legal_moves(board: &XiangqiBoard) -> Vec<XiangqiMove> {
    board
        .grid
        .pieces()
        .filter(|(_, piece)| piece.side == board.to_move)
        .flat_map(|(from, _)| {
            legal_destinations(board, from)
                .into_iter()
                .map(move |to| XiangqiMove::new(from, to))
        })
        .collect()
}

pub fn has_legal_move(board: &XiangqiBoard) -> bool {
    board
        .grid
        .pieces()
        .filter(|(_, piece)| piece.side == board.to_move)
        .any(|(from, _)| !legal_destinations(board, from).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xiangqi::piece::Piece;

    fn general(side: Side) -> Piece {
        Piece::new(PieceKind::General, side)
    }

    #[test]
    fn test_opening_move_count() {
        //! Red has 44 legal moves from the opening position
        assert_eq!(all_legal_moves(&XiangqiBoard::initial()).len(), 44);
    }

    #[test]
    fn test_generals_cannot_face() {
        //! The only piece between the generals is pinned to the file
        let board = XiangqiBoard::empty(Side::Red)
            .with_piece(Position::new(9, 4), general(Side::Red))
            .with_piece(Position::new(0, 4), general(Side::Black))
            .with_piece(Position::new(5, 4), Piece::new(PieceKind::Chariot, Side::Red));
        let moves = legal_destinations(&board, Position::new(5, 4));
        assert!(moves.iter().all(|to| to.col == 4), "{moves:?}");
        assert!(!moves.is_empty());
    }

    #[test]
    fn test_general_cannot_step_onto_open_file() {
        let board = XiangqiBoard::empty(Side::Red)
            .with_piece(Position::new(9, 3), general(Side::Red))
            .with_piece(Position::new(0, 4), general(Side::Black));
        let moves = legal_destinations(&board, Position::new(9, 3));
        assert!(!moves.contains(&Position::new(9, 4)));
        assert!(moves.contains(&Position::new(8, 3)));
    }

    #[test]
    fn test_chariot_check_detected() {
        let grid = XiangqiBoard::empty(Side::Red)
            .with_piece(Position::new(9, 4), general(Side::Red))
            .with_piece(Position::new(9, 0), Piece::new(PieceKind::Chariot, Side::Black))
            .grid;
        assert!(is_in_check(&grid, Side::Red));
        assert!(!is_in_check(&grid, Side::Black));
    }

    #[test]
    fn test_horse_check_respects_leg() {
        //! A hobbled horse gives no check
        let open = XiangqiBoard::empty(Side::Red)
            .with_piece(Position::new(9, 4), general(Side::Red))
            .with_piece(Position::new(7, 3), Piece::new(PieceKind::Horse, Side::Black));
        assert!(is_in_check(&open.grid, Side::Red));

        let hobbled = open.with_piece(
            Position::new(8, 3),
            Piece::new(PieceKind::Advisor, Side::Red),
        );
        assert!(!is_in_check(&hobbled.grid, Side::Red));
    }

    #[test]
    fn test_initial_no_facing() {
        assert!(!generals_facing(&XiangqiBoard::initial().grid));
    }
}
