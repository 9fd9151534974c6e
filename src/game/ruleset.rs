//! Adapters from each engine to the session driver
//!
//! A [`Ruleset`] bundles one game's state type, move type and per-game
//! configuration (search depth, Go board size) behind a common interface so
//! [`super::session::Session`] can run any of them.

use std::fmt::Debug;

use guild_engine::{checkers, chess, go, morris, xiangqi};
use guild_engine::{Color, Difficulty, GameStatus, RulesResult};
use rand::rngs::StdRng;

/// One game's rules as seen by the session driver
pub trait Ruleset: Clone + Send + Sync + 'static {
    type State: Clone + Send + Sync + 'static;
    type Move: Copy + Debug + Send + 'static;
    type Side: Copy + Debug + Eq + Send + 'static;

    /// Short lowercase name used in logs
    const NAME: &'static str;

    fn initial_state(&self) -> RulesResult<Self::State>;

    fn side_to_move(state: &Self::State) -> Self::Side;

    fn status(state: &Self::State) -> GameStatus;

    fn winner(state: &Self::State) -> Option<Self::Side>;

    /// Apply `mv`, leaving `state` untouched on rejection
    fn apply(state: &Self::State, mv: Self::Move) -> RulesResult<Self::State>;

    /// Whether the side to move owes a choice outside the move list, such
    /// as a chess promotion piece
    fn awaiting_choice(_state: &Self::State) -> bool {
        false
    }

    /// Captured value, white (or red) minus black, for games that keep a
    /// capture tally
    fn material_balance(_state: &Self::State) -> Option<i32> {
        None
    }

    /// The opponent's choice for the side to move; `None` when it has none
    fn select(
        &self,
        state: &Self::State,
        difficulty: Difficulty,
        rng: &mut StdRng,
    ) -> Option<Self::Move>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChessRules {
    pub search_depth: u32,
}

impl ChessRules {
    /// Crown the pawn waiting on the last rank and pass the turn
    pub fn complete_promotion(
        state: &chess::ChessState,
        kind: chess::PieceKind,
    ) -> RulesResult<chess::ChessState> {
        chess::complete_promotion(state, kind)
    }
}

impl Default for ChessRules {
    fn default() -> Self {
        Self {
            search_depth: chess::DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl Ruleset for ChessRules {
    type State = chess::ChessState;
    type Move = chess::ChessMove;
    type Side = Color;

    const NAME: &'static str = "chess";

    fn initial_state(&self) -> RulesResult<Self::State> {
        Ok(chess::ChessState::new())
    }

    fn side_to_move(state: &Self::State) -> Color {
        state.to_move()
    }

    fn status(state: &Self::State) -> GameStatus {
        state.status
    }

    fn winner(state: &Self::State) -> Option<Color> {
        state.winner
    }

    fn apply(state: &Self::State, mv: Self::Move) -> RulesResult<Self::State> {
        chess::apply_move(state, mv)
    }

    fn awaiting_choice(state: &Self::State) -> bool {
        state.pending_promotion.is_some()
    }

    fn material_balance(state: &Self::State) -> Option<i32> {
        Some(state.captured.material_balance(|p| p.kind.value()))
    }

    fn select(
        &self,
        state: &Self::State,
        difficulty: Difficulty,
        rng: &mut StdRng,
    ) -> Option<Self::Move> {
        chess::select_opponent_move_at_depth(
            state,
            state.to_move(),
            difficulty,
            self.search_depth,
            rng,
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XiangqiRules;

impl Ruleset for XiangqiRules {
    type State = xiangqi::XiangqiState;
    type Move = xiangqi::XiangqiMove;
    type Side = xiangqi::Side;

    const NAME: &'static str = "xiangqi";

    fn initial_state(&self) -> RulesResult<Self::State> {
        Ok(xiangqi::XiangqiState::new())
    }

    fn side_to_move(state: &Self::State) -> xiangqi::Side {
        state.to_move()
    }

    fn status(state: &Self::State) -> GameStatus {
        state.status
    }

    fn winner(state: &Self::State) -> Option<xiangqi::Side> {
        state.winner
    }

    fn apply(state: &Self::State, mv: Self::Move) -> RulesResult<Self::State> {
        xiangqi::apply_move(state, mv)
    }

    fn material_balance(state: &Self::State) -> Option<i32> {
        // Scaled so a soldier weighs 10, like a chess pawn
        Some(state.captured.material_balance(|p| (p.kind.value() * 10.0).round() as i32))
    }

    fn select(
        &self,
        state: &Self::State,
        difficulty: Difficulty,
        rng: &mut StdRng,
    ) -> Option<Self::Move> {
        xiangqi::select_opponent_move(state, state.to_move(), difficulty, rng)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckersRules {
    pub search_depth: u32,
}

impl Default for CheckersRules {
    fn default() -> Self {
        Self {
            search_depth: checkers::DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl Ruleset for CheckersRules {
    type State = checkers::CheckersState;
    type Move = checkers::CheckersMove;
    type Side = Color;

    const NAME: &'static str = "checkers";

    fn initial_state(&self) -> RulesResult<Self::State> {
        Ok(checkers::CheckersState::new())
    }

    fn side_to_move(state: &Self::State) -> Color {
        state.to_move()
    }

    fn status(state: &Self::State) -> GameStatus {
        state.status
    }

    fn winner(state: &Self::State) -> Option<Color> {
        state.winner
    }

    fn apply(state: &Self::State, mv: Self::Move) -> RulesResult<Self::State> {
        checkers::apply_move(state, mv)
    }

    fn material_balance(state: &Self::State) -> Option<i32> {
        Some(state.captured.material_balance(|c| if c.king { 2 } else { 1 }))
    }

    fn select(
        &self,
        state: &Self::State,
        difficulty: Difficulty,
        rng: &mut StdRng,
    ) -> Option<Self::Move> {
        checkers::select_opponent_move_at_depth(
            state,
            state.to_move(),
            difficulty,
            self.search_depth,
            rng,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoRules {
    pub size: usize,
    pub capture_target: Option<u32>,
}

impl Default for GoRules {
    fn default() -> Self {
        Self {
            size: 19,
            capture_target: None,
        }
    }
}

impl Ruleset for GoRules {
    type State = go::GoState;
    type Move = go::GoMove;
    type Side = Color;

    const NAME: &'static str = "go";

    fn initial_state(&self) -> RulesResult<Self::State> {
        Ok(go::GoState::new(self.size)?.with_capture_target(self.capture_target))
    }

    fn side_to_move(state: &Self::State) -> Color {
        state.to_move
    }

    fn status(state: &Self::State) -> GameStatus {
        state.status
    }

    fn winner(state: &Self::State) -> Option<Color> {
        state.winner
    }

    fn apply(state: &Self::State, mv: Self::Move) -> RulesResult<Self::State> {
        go::apply_move(state, mv)
    }

    fn select(
        &self,
        state: &Self::State,
        difficulty: Difficulty,
        rng: &mut StdRng,
    ) -> Option<Self::Move> {
        go::select_opponent_move(state, state.to_move, difficulty, rng)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MorrisRules;

impl Ruleset for MorrisRules {
    type State = morris::MorrisState;
    type Move = morris::MorrisMove;
    type Side = Color;

    const NAME: &'static str = "morris";

    fn initial_state(&self) -> RulesResult<Self::State> {
        Ok(morris::MorrisState::new())
    }

    fn side_to_move(state: &Self::State) -> Color {
        state.to_move
    }

    fn status(state: &Self::State) -> GameStatus {
        state.status
    }

    fn winner(state: &Self::State) -> Option<Color> {
        state.winner
    }

    fn apply(state: &Self::State, mv: Self::Move) -> RulesResult<Self::State> {
        morris::apply_move(state, mv)
    }

    fn select(
        &self,
        state: &Self::State,
        difficulty: Difficulty,
        rng: &mut StdRng,
    ) -> Option<Self::Move> {
        morris::select_opponent_move(state, state.to_move, difficulty, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn opening_reply<R: Ruleset>(rules: R) {
        let mut rng = StdRng::seed_from_u64(17);
        let state = rules.initial_state().unwrap();
        assert_eq!(R::status(&state), GameStatus::Playing);
        for difficulty in Difficulty::ALL {
            let mv = rules.select(&state, difficulty, &mut rng).unwrap();
            let next = R::apply(&state, mv).unwrap();
            assert_ne!(R::side_to_move(&next), R::side_to_move(&state), "{}", R::NAME);
        }
    }

    #[test]
    fn test_every_ruleset_answers_the_opening() {
        opening_reply(ChessRules { search_depth: 2 });
        opening_reply(XiangqiRules);
        opening_reply(CheckersRules { search_depth: 2 });
        opening_reply(GoRules {
            size: 9,
            capture_target: None,
        });
        opening_reply(MorrisRules);
    }

    #[test]
    fn test_chess_promotion_choice_passes_the_turn() {
        use guild_engine::chess::{ChessBoard, ChessMove, ChessState, Piece, PieceKind};
        use guild_engine::Position;

        let board = ChessBoard::empty(Color::White)
            .with_piece(Position::new(7, 4), Piece::new(PieceKind::King, Color::White))
            .with_piece(Position::new(0, 7), Piece::new(PieceKind::King, Color::Black))
            .with_piece(Position::new(1, 0), Piece::new(PieceKind::Pawn, Color::White));
        let state = ChessState::from_board(board);

        let push = ChessMove::new(Position::new(1, 0), Position::new(0, 0));
        let waiting = ChessRules::apply(&state, push).unwrap();
        assert!(ChessRules::awaiting_choice(&waiting));
        assert_eq!(ChessRules::side_to_move(&waiting), Color::White);

        let done = ChessRules::complete_promotion(&waiting, PieceKind::Rook).unwrap();
        assert!(!ChessRules::awaiting_choice(&done));
        assert_eq!(ChessRules::side_to_move(&done), Color::Black);
        assert!(ChessRules::complete_promotion(&done, PieceKind::Rook).is_err());
    }

    #[test]
    fn test_material_balance_follows_captures() {
        use guild_engine::chess::ChessMove;
        use guild_engine::Position;

        let rules = ChessRules { search_depth: 1 };
        let mut state = rules.initial_state().unwrap();
        assert_eq!(ChessRules::material_balance(&state), Some(0));
        for (from, to) in [((6, 4), (4, 4)), ((1, 3), (3, 3)), ((4, 4), (3, 3))] {
            let mv = ChessMove::new(Position::new(from.0, from.1), Position::new(to.0, to.1));
            state = ChessRules::apply(&state, mv).unwrap();
        }
        assert_eq!(ChessRules::material_balance(&state), Some(10));

        let go = GoRules {
            size: 9,
            capture_target: None,
        };
        assert_eq!(GoRules::material_balance(&go.initial_state().unwrap()), None);
    }

    #[test]
    fn test_go_size_is_checked() {
        let rules = GoRules {
            size: 11,
            capture_target: None,
        };
        assert!(rules.initial_state().is_err());
    }
}
