//! Go on 9x9, 13x13 or 19x19 boards
//!
//! Captures are in scope, territory scoring is not: a game ends only when
//! one side reaches the configured capture target. Suicide is forbidden and
//! ko is tracked as a single forbidden point.

pub mod ai;
pub mod board;
pub mod groups;
pub mod state;

pub use ai::select_opponent_move;
pub use board::{GoBoard, SUPPORTED_SIZES};
pub use groups::{group_at, groups, Group};
pub use state::{
    apply_move, can_place, legal_moves, legal_placements, place_stone, GoMove, GoState,
    MoveRecord, Placement, CAPTURE_TARGETS,
};
