//! Rule invariants checked over random playouts
//!
//! Each case is a list of choice indices; every ply takes the move at
//! `index % moves.len()` so shrinking yields short, readable games.

use proptest::prelude::*;

use guild_engine::checkers::{self, CheckersState};
use guild_engine::chess::{self, ChessState};
use guild_engine::go::{self, GoMove, GoState};
use guild_engine::morris::{self, MorrisMove, MorrisState};
use guild_engine::xiangqi::{self, XiangqiState};
use guild_engine::Position;

fn choices(max_len: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 0..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// No chess move offered to the mover leaves its own king attacked
    #[test]
    fn chess_moves_never_self_check(picks in choices(40)) {
        let mut state = ChessState::new();
        for pick in picks {
            let moves = chess::all_legal_moves(&state.board);
            if moves.is_empty() {
                break;
            }
            let mover = state.to_move();
            for mv in &moves {
                let after = chess::rules::play(&state.board, *mv);
                prop_assert!(!chess::is_in_check(&after.grid, mover), "{:?} leaves king hanging", mv);
            }
            state = chess::apply_move(&state, moves[pick % moves.len()]).unwrap();
        }
    }

    /// Same for the xiangqi general, including the facing-generals rule
    #[test]
    fn xiangqi_moves_never_self_check(picks in choices(40)) {
        let mut state = XiangqiState::new();
        for pick in picks {
            let moves = xiangqi::all_legal_moves(&state.board);
            if moves.is_empty() {
                break;
            }
            let mover = state.to_move();
            for mv in &moves {
                let after = xiangqi::rules::play(&state.board, *mv);
                prop_assert!(!xiangqi::is_in_check(&after.grid, mover));
                prop_assert!(!xiangqi::generals_facing(&after.grid));
            }
            state = xiangqi::apply_move(&state, moves[pick % moves.len()]).unwrap();
        }
    }

    /// While any jump exists, pieces without one have no destinations
    #[test]
    fn checkers_capture_is_forced(picks in choices(60)) {
        let mut state = CheckersState::new();
        for pick in picks {
            let board = state.board;
            if checkers::must_jump(&board.grid, board.to_move) {
                for (pos, piece) in board.grid.pieces() {
                    if piece.color == board.to_move && !checkers::can_jump(&board.grid, pos) {
                        prop_assert!(checkers::legal_moves(&state, pos).is_empty());
                    }
                }
            }
            let moves = checkers::all_legal_moves(&board);
            if moves.is_empty() {
                break;
            }
            state = checkers::apply_move(&state, moves[pick % moves.len()]).unwrap();
        }
    }

    /// After every placement each group on the board keeps a liberty
    #[test]
    fn go_groups_always_breathe(picks in choices(120)) {
        let mut state = GoState::new(9).unwrap();
        for pick in picks {
            let placements = go::legal_placements(&state);
            if placements.is_empty() {
                break;
            }
            let pos = placements[pick % placements.len()];
            state = go::apply_move(&state, GoMove::Place(pos)).unwrap();
            for group in go::groups(&state.board) {
                prop_assert!(!group.liberties.is_empty(), "dead group at {:?}", group.stones);
            }
            if let Some(ko) = state.ko_point {
                prop_assert!(state.board.is_empty(ko));
            }
        }
    }

    /// A piece standing in a mill is removable only when all are
    #[test]
    fn morris_mills_protect_pieces(picks in choices(80)) {
        let mut state = MorrisState::new();
        for pick in picks {
            let moves = morris::all_moves(&state);
            if moves.is_empty() {
                break;
            }
            if state.pending_removal {
                let victim = state.to_move.opposite();
                let exposed_exists = (0..morris::POINTS as u8).any(|p| {
                    state.points[p as usize] == Some(victim)
                        && !morris::check_mill(&state.points, p, victim)
                });
                for mv in &moves {
                    if let MorrisMove::Remove(point) = mv {
                        if exposed_exists {
                            prop_assert!(!morris::check_mill(&state.points, *point, victim));
                        }
                    }
                }
            }
            state = morris::apply_move(&state, moves[pick % moves.len()]).unwrap();
        }
    }

    /// `legal_moves` answers the same way twice for the same state
    #[test]
    fn legal_moves_is_repeatable(picks in choices(20), row in 0u8..8, col in 0u8..8) {
        let mut state = ChessState::new();
        for pick in picks {
            let moves = chess::all_legal_moves(&state.board);
            if moves.is_empty() {
                break;
            }
            state = chess::apply_move(&state, moves[pick % moves.len()]).unwrap();
        }
        let pos = Position::new(row, col);
        prop_assert_eq!(chess::legal_moves(&state, pos), chess::legal_moves(&state, pos));

        let checkers_state = CheckersState::new();
        prop_assert_eq!(
            checkers::legal_moves(&checkers_state, pos),
            checkers::legal_moves(&checkers_state, pos)
        );
        let point = (row * 3) % morris::POINTS as u8;
        let morris_state = MorrisState::new();
        prop_assert_eq!(
            morris::legal_moves(&morris_state, point),
            morris::legal_moves(&morris_state, point)
        );
    }
}
