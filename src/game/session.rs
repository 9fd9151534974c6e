//! One game in progress
//!
//! [`Session`] owns the single current state value. Human moves arrive
//! through [`Session::submit`]; the opponent's move is a two-step affair,
//! [`Session::start_opponent_turn`] then [`Session::finish_opponent_turn`].
//! Only one of these may be in flight: submissions are refused while the
//! opponent is thinking.

use std::time::Duration;

use guild_engine::chess::PieceKind;
use guild_engine::{Difficulty, GameStatus, Position, RulesError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::error::{SessionError, SessionResult};
use super::opponent::{spawn_opponent_task, PendingOpponentMove};
use super::ruleset::{ChessRules, Ruleset};

/// What [`Session::finish_opponent_turn`] found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentTurn<M> {
    /// The opponent's move was applied
    Applied(M),
    /// The opponent had no legal move
    NoMove,
    /// The task belonged to a game that has since been reset
    Discarded,
    /// No opponent turn was started
    Idle,
}

pub struct Session<R: Ruleset> {
    id: Uuid,
    rules: R,
    state: R::State,
    difficulty: Difficulty,
    think_delay: Duration,
    rng: StdRng,
    generation: u64,
    pending: Option<PendingOpponentMove<R::Move>>,
}

impl<R: Ruleset> Session<R> {
    /// Start a game; `seed` makes the opponent reproducible
    pub fn new(
        rules: R,
        difficulty: Difficulty,
        think_delay: Duration,
        seed: Option<u64>,
    ) -> SessionResult<Self> {
        let state = rules.initial_state()?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let id = Uuid::new_v4();
        info!("[SESSION] {} game {} started ({})", R::NAME, id, difficulty);
        Ok(Self {
            id,
            rules,
            state,
            difficulty,
            think_delay,
            rng,
            generation: 0,
            pending: None,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        R::status(&self.state)
    }

    pub fn winner(&self) -> Option<R::Side> {
        R::winner(&self.state)
    }

    pub fn side_to_move(&self) -> R::Side {
        R::side_to_move(&self.state)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Bumped by every [`Session::new_game`]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether an opponent task for the current game is outstanding
    pub fn is_thinking(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| p.generation == self.generation)
    }

    /// Apply a human move; `false` leaves the state unchanged
    pub fn submit(&mut self, mv: R::Move) -> bool {
        if self.is_thinking() {
            debug!("[SESSION] {:?} ignored while the opponent is thinking", mv);
            return false;
        }
        match R::apply(&self.state, mv) {
            Ok(next) => {
                self.state = next;
                self.log_if_over();
                true
            }
            Err(err @ RulesError::Occupied { .. }) => {
                warn!("[SESSION] {:?} rejected: {}", mv, err);
                false
            }
            Err(err) => {
                debug!("[SESSION] {:?} rejected: {}", mv, err);
                false
            }
        }
    }

    /// Launch the opponent for the side to move
    ///
    /// Returns `false` when the game is over, a task is already running, or
    /// the side to move still owes a choice such as a promotion piece.
    pub fn start_opponent_turn(&mut self) -> bool {
        if self.is_thinking() || self.status().is_terminal() || R::awaiting_choice(&self.state) {
            return false;
        }
        if let Some(stale) = self.pending.take() {
            stale.abort();
        }
        let task_rng = StdRng::seed_from_u64(self.rng.random());
        let delay = self.difficulty.think_delay(self.think_delay);
        self.pending = Some(spawn_opponent_task(
            self.rules.clone(),
            self.state.clone(),
            self.difficulty,
            delay,
            task_rng,
            self.generation,
        ));
        true
    }

    /// Wait for the opponent task and apply its move
    ///
    /// # Errors
    ///
    /// `OpponentTask` if the task panicked, `OpponentRejected` if the engine
    /// refuses the move its own selector produced.
    pub async fn finish_opponent_turn(&mut self) -> SessionResult<OpponentTurn<R::Move>> {
        let Some(pending) = self.pending.take() else {
            return Ok(OpponentTurn::Idle);
        };
        if pending.generation != self.generation {
            pending.abort();
            debug!(
                "[SESSION] discarding opponent task from generation {}",
                pending.generation
            );
            return Ok(OpponentTurn::Discarded);
        }

        let chosen = match pending.join().await {
            Ok(chosen) => chosen,
            Err(err) if err.is_cancelled() => return Ok(OpponentTurn::Discarded),
            Err(err) => return Err(SessionError::OpponentTask(err)),
        };
        let Some(mv) = chosen else {
            info!("[SESSION] {} opponent has no move", R::NAME);
            return Ok(OpponentTurn::NoMove);
        };
        self.state = R::apply(&self.state, mv)
            .map_err(|reason| SessionError::OpponentRejected { reason })?;
        debug!("[SESSION] opponent played {:?}", mv);
        self.log_if_over();
        Ok(OpponentTurn::Applied(mv))
    }

    /// Reset to the initial position, cancelling any opponent task
    pub fn new_game(&mut self) -> SessionResult<()> {
        if let Some(pending) = &self.pending {
            pending.abort();
        }
        self.state = self.rules.initial_state()?;
        self.generation += 1;
        info!(
            "[SESSION] {} game {} reset (generation {})",
            R::NAME,
            self.id,
            self.generation
        );
        Ok(())
    }

    fn log_if_over(&self) {
        let status = self.status();
        if status.is_terminal() {
            info!(
                "[SESSION] {} game {} over: {} (winner: {:?})",
                R::NAME,
                self.id,
                status,
                self.winner()
            );
        }
    }
}

impl Session<ChessRules> {
    /// Square of a pawn waiting for [`Session::complete_promotion`]
    pub fn pending_promotion(&self) -> Option<Position> {
        self.state.pending_promotion
    }

    /// Pick the piece for a pawn left on the last rank by [`Session::submit`]
    ///
    /// `false` leaves the state unchanged: nothing is pending, `kind` is a
    /// pawn or king, or the opponent is thinking.
    pub fn complete_promotion(&mut self, kind: PieceKind) -> bool {
        if self.is_thinking() {
            return false;
        }
        match ChessRules::complete_promotion(&self.state, kind) {
            Ok(next) => {
                self.state = next;
                self.log_if_over();
                true
            }
            Err(err) => {
                debug!("[SESSION] promotion to {} rejected: {}", kind, err);
                false
            }
        }
    }
}

impl<R: Ruleset> Drop for Session<R> {
    fn drop(&mut self) {
        if let Some(pending) = &self.pending {
            pending.abort();
        }
    }
}
