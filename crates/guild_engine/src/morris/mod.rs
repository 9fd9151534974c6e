//! Nine Men's Morris
//!
//! Each side places nine pieces, then slides them along the board lines;
//! a side reduced to three pieces flies to any empty point. Three in a
//! line (a mill) lets the mover remove an opposing piece.

pub mod ai;
pub mod graph;
pub mod state;

pub use ai::select_opponent_move;
pub use graph::{check_mill, removable_pieces, Points, ADJACENCY, MILLS, POINTS};
pub use state::{
    all_moves, apply_move, legal_moves, MorrisMove, MorrisState, MoveRecord, Phase,
    FLYING_THRESHOLD, PIECES_PER_SIDE,
};
