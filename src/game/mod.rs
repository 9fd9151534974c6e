//! Game sessions: engine adapters, the opponent task and the driver
//!
//! # Module Organization
//!
//! - `ruleset` - One adapter per engine behind the [`Ruleset`] trait
//! - `opponent` - Background opponent computation
//! - `session` - The state machine a front end talks to
//! - `error` - Session failures

pub mod error;
pub mod opponent;
pub mod ruleset;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use ruleset::{CheckersRules, ChessRules, GoRules, MorrisRules, Ruleset, XiangqiRules};
pub use session::{OpponentTurn, Session};
