//! Xiangqi board: 10 rows by 9 columns
//!
//! ```text
//!   0 1 2 3 4 5 6 7 8
//! 0 R H E A G A E H R    black
//! 2   C           C
//! 3 S   S   S   S   S
//! 4 ----- river -----
//! 6 S   S   S   S   S
//! 7   C           C
//! 9 R H E A G A E H R    red
//! ```

use super::piece::{Piece, PieceKind, Side};
use crate::grid::{Grid, Position};

pub const ROWS: usize = 10;
pub const COLS: usize = 9;

pub type XiangqiGrid = Grid<Piece, ROWS, COLS>;

const BACK_RANK: [PieceKind; COLS] = [
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::General,
    PieceKind::Advisor,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Chariot,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct XiangqiBoard {
    pub grid: XiangqiGrid,
    pub to_move: Side,
}

impl Default for XiangqiBoard {
    fn default() -> Self {
        Self::initial()
    }
}

impl XiangqiBoard {
    pub fn initial() -> Self {
        let mut grid = XiangqiGrid::empty();
        for (side, back, cannons, soldiers) in [(Side::Black, 0, 2, 3), (Side::Red, 9, 7, 6)] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                grid.set(Position::new(back, col as u8), Some(Piece::new(*kind, side)));
            }
            for col in [1, 7] {
                grid.set(
                    Position::new(cannons, col),
                    Some(Piece::new(PieceKind::Cannon, side)),
                );
            }
            for col in (0..COLS as u8).step_by(2) {
                grid.set(
                    Position::new(soldiers, col),
                    Some(Piece::new(PieceKind::Soldier, side)),
                );
            }
        }
        Self {
            grid,
            to_move: Side::Red,
        }
    }

    pub fn empty(to_move: Side) -> Self {
        Self {
            grid: XiangqiGrid::empty(),
            to_move,
        }
    }

    pub fn with_piece(mut self, pos: Position, piece: Piece) -> Self {
        self.grid.set(pos, Some(piece));
        self
    }

    pub fn general(&self, side: Side) -> Option<Position> {
        self.grid
            .find(|p| p.kind == PieceKind::General && p.side == side)
    }
}

/// Whether `pos` lies in `side`'s 3x3 palace
pub fn in_palace(side: Side, pos: Position) -> bool {
    (3..=5).contains(&pos.col) && side.palace_rows().contains(&pos.row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        //! 16 pieces a side, generals in the palace centres, red to move
        let board = XiangqiBoard::initial();
        assert_eq!(board.grid.pieces().count(), 32);
        assert_eq!(board.general(Side::Red), Some(Position::new(9, 4)));
        assert_eq!(board.general(Side::Black), Some(Position::new(0, 4)));
        assert_eq!(board.to_move, Side::Red);
        assert_eq!(
            board.grid.get(Position::new(2, 1)),
            Some(Piece::new(PieceKind::Cannon, Side::Black))
        );
        assert_eq!(
            board.grid.get(Position::new(6, 8)),
            Some(Piece::new(PieceKind::Soldier, Side::Red))
        );
    }

    #[test]
    fn test_palace_bounds() {
        assert!(in_palace(Side::Red, Position::new(7, 3)));
        assert!(!in_palace(Side::Red, Position::new(6, 4)));
        assert!(!in_palace(Side::Black, Position::new(0, 6)));
        assert!(in_palace(Side::Black, Position::new(2, 5)));
    }
}
