//! Nine Men's Morris games through the public interface

use guild_engine::morris::{
    all_moves, apply_move, check_mill, legal_moves, MorrisMove, MorrisState, Phase,
};
use guild_engine::{Color, GameStatus, RulesError};

fn play(state: MorrisState, moves: &[MorrisMove]) -> MorrisState {
    moves
        .iter()
        .fold(state, |state, mv| apply_move(&state, *mv).unwrap())
}

#[test]
fn test_mill_then_removal() {
    //! White closes the top row and takes one black piece
    let state = play(
        MorrisState::new(),
        &[
            MorrisMove::Place(0),
            MorrisMove::Place(9),
            MorrisMove::Place(1),
            MorrisMove::Place(10),
            MorrisMove::Place(2),
        ],
    );
    assert!(check_mill(&state.points, 2, Color::White));
    assert!(state.pending_removal);
    assert_eq!(state.to_move, Color::White);
    assert_eq!(state.on_board(Color::Black), 2);

    let after = apply_move(&state, MorrisMove::Remove(9)).unwrap();
    assert_eq!(after.on_board(Color::Black), 1);
    assert_eq!(after.points[9], None);
    assert_eq!(after.to_move, Color::Black);
    assert_eq!(after.history.len(), 6);
}

#[test]
fn test_black_cannot_move_during_white_removal() {
    let state = play(
        MorrisState::new(),
        &[
            MorrisMove::Place(0),
            MorrisMove::Place(9),
            MorrisMove::Place(1),
            MorrisMove::Place(10),
            MorrisMove::Place(2),
        ],
    );
    assert!(legal_moves(&state, 11).is_empty());
    assert_eq!(
        apply_move(&state, MorrisMove::Place(11)).unwrap_err(),
        RulesError::RemovalPending
    );
}

#[test]
fn test_placing_hands_over_to_moving() {
    // Eighteen placements on points that never line up three of a kind.
    let placements: [u8; 18] = [
        1, 18, 10, 15, 4, 23, 16, 9, 0, 7, 22, 6, 8, 19, 12, 3, 14, 2,
    ];
    let mut state = MorrisState::new();
    for point in placements {
        assert_eq!(state.phase(state.to_move), Phase::Placing);
        state = apply_move(&state, MorrisMove::Place(point)).unwrap();
        assert!(!state.pending_removal, "mill after placing {point}");
    }
    assert_eq!(state.in_hand(Color::White), 0);
    assert_eq!(state.in_hand(Color::Black), 0);
    assert_eq!(state.phase(Color::White), Phase::Moving);
    assert!(all_moves(&state)
        .iter()
        .all(|mv| matches!(mv, MorrisMove::Slide { .. })));
    assert!(matches!(
        apply_move(&state, MorrisMove::Place(20)),
        Err(RulesError::WrongPhase { .. })
    ));
    assert_eq!(state.status, GameStatus::Playing);
}
