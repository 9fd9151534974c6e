//! Checkers evaluation: 10 per man, 20 per king, plus a square table that
//! rewards edges and back rows.

use super::board::CheckersBoard;
use super::moves::{all_legal_moves, play, CheckersMove};
use crate::color::Color;
use crate::search::Searchable;

#[rustfmt::skip]
const POSITION_VALUES: [[i32; 8]; 8] = [
    [0, 4, 0, 4, 0, 4, 0, 4],
    [4, 0, 3, 0, 3, 0, 3, 0],
    [0, 3, 0, 2, 0, 2, 0, 4],
    [4, 0, 2, 0, 1, 0, 3, 0],
    [0, 3, 0, 1, 0, 2, 0, 4],
    [4, 0, 2, 0, 2, 0, 3, 0],
    [0, 3, 0, 3, 0, 3, 0, 4],
    [4, 0, 4, 0, 4, 0, 4, 0],
];

const MAN_VALUE: i32 = 10;
const KING_VALUE: i32 = 20;

/// Material and position for `perspective` minus the opponent's
pub fn evaluate(board: &CheckersBoard, perspective: Color) -> i32 {
    board
        .grid
        .pieces()
        .map(|(pos, piece)| {
            let base = if piece.king { KING_VALUE } else { MAN_VALUE };
            let value = base + POSITION_VALUES[pos.row as usize][pos.col as usize];
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

impl Searchable for CheckersBoard {
    type Move = CheckersMove;
    type Side = Color;

    fn side_to_move(&self) -> Color {
        self.to_move
    }

    fn moves(&self) -> Vec<CheckersMove> {
        all_legal_moves(self)
    }

    fn play(&self, mv: CheckersMove) -> Self {
        play(self, mv).0
    }

    fn evaluate(&self, perspective: Color) -> i32 {
        evaluate(self, perspective)
    }

    fn order_key(&self, mv: &CheckersMove) -> i32 {
        let king = self.grid.get(mv.from).is_some_and(|p| p.king);
        i32::from(mv.is_jump()) * 2 + i32::from(king)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::board::Checker;
    use crate::grid::Position;
    use crate::search::best_move;

    #[test]
    fn test_initial_balanced() {
        //! Scores for the two sides mirror each other
        let board = CheckersBoard::initial();
        assert_eq!(evaluate(&board, Color::White), -evaluate(&board, Color::Black));
    }

    #[test]
    fn test_king_worth_more() {
        let man = CheckersBoard::empty(Color::White)
            .with_piece(Position::new(3, 4), Checker::man(Color::White));
        let king = CheckersBoard::empty(Color::White)
            .with_piece(Position::new(3, 4), Checker::king(Color::White));
        assert!(evaluate(&king, Color::White) > evaluate(&man, Color::White));
    }

    #[test]
    fn test_search_prefers_double_jump() {
        //! The search sees through the continuation and wins both pieces
        let board = CheckersBoard::empty(Color::White)
            .with_piece(Position::new(7, 0), Checker::man(Color::White))
            .with_piece(Position::new(6, 1), Checker::man(Color::Black))
            .with_piece(Position::new(4, 3), Checker::man(Color::Black));
        let outcome = best_move(&board, 4).expect("white can jump");
        assert_eq!(outcome.best, CheckersMove::new(Position::new(7, 0), Position::new(5, 2)));
        assert_eq!(outcome.score, crate::search::NO_MOVES_SCORE);
    }
}
