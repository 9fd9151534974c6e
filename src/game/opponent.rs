//! The opponent's turn as a background task
//!
//! The task first sleeps the cosmetic think delay, then runs the selector
//! on the blocking pool over its own copy of the state. The session keeps
//! the handle together with the generation it was started for, so a reset
//! can abort it and a late answer is recognised as stale.

use std::time::{Duration, Instant};

use guild_engine::Difficulty;
use rand::rngs::StdRng;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info};

use super::ruleset::Ruleset;

/// In-flight opponent computation
pub struct PendingOpponentMove<M> {
    pub(crate) generation: u64,
    handle: JoinHandle<Result<Option<M>, JoinError>>,
    started: Instant,
}

impl<M> PendingOpponentMove<M> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Wait for the selector; a cancelled task surfaces as a [`JoinError`]
    pub async fn join(self) -> Result<Option<M>, JoinError> {
        let outcome = self.handle.await?;
        debug!(
            "[AI] opponent answered after {:?}",
            self.started.elapsed()
        );
        outcome
    }
}

/// Spawn the opponent for the side to move in `state`
pub fn spawn_opponent_task<R: Ruleset>(
    rules: R,
    state: R::State,
    difficulty: Difficulty,
    delay: Duration,
    mut rng: StdRng,
    generation: u64,
) -> PendingOpponentMove<R::Move> {
    info!(
        "[AI] {} opponent thinking | Difficulty: {} | Delay: {:?}",
        R::NAME,
        difficulty,
        delay
    );
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        tokio::task::spawn_blocking(move || rules.select(&state, difficulty, &mut rng)).await
    });
    PendingOpponentMove {
        generation,
        handle,
        started: Instant::now(),
    }
}
