//! Opponent strength levels
//!
//! The three tiers are shared by every game; what each tier does is decided
//! inside the game's own `ai` module.
//!
//! | Difficulty | Chess                 | Checkers         | Xiangqi / Go / Morris |
//! |------------|-----------------------|------------------|-----------------------|
//! | Easy       | top half, heuristic   | uniform random   | uniform random        |
//! | Medium     | top quarter           | jumps, kings     | prefer captures (60%) |
//! | Hard       | alpha-beta, depth 4   | alpha-beta       | one-ply heuristic     |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Opponent strength
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Cosmetic pause before the opponent answers
    ///
    /// Harder opponents pretend to think a little longer. `base` is the
    /// configured delay for Medium.
    pub fn think_delay(self, base: Duration) -> Duration {
        match self {
            Difficulty::Easy => base / 2,
            Difficulty::Medium => base,
            Difficulty::Hard => base + base / 2,
        }
    }

    /// Human-readable description for logs and menus
    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy (random, lightly guided)",
            Difficulty::Medium => "Medium (prefers good captures)",
            Difficulty::Hard => "Hard (search or full heuristic)",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(RulesError::UnknownDifficulty {
                name: other.to_string(),
            }),
        }
    }
}
