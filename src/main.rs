//! `guild`: headless computer-vs-computer matches

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use guild_engine::Difficulty;
use guild_of_games::core::{logging, GameSettings};
use guild_of_games::game::{
    CheckersRules, ChessRules, GoRules, MorrisRules, OpponentTurn, Ruleset, Session,
    XiangqiRules,
};
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GameKind {
    Chess,
    Xiangqi,
    Checkers,
    Go,
    Morris,
}

#[derive(Debug, Parser)]
#[command(name = "guild", version, about = "Play a computer-vs-computer match")]
struct Cli {
    #[arg(long, value_enum, default_value_t = GameKind::Chess)]
    game: GameKind,

    /// Overrides the saved difficulty
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Stop after this many moves even if the game is not over
    #[arg(long, default_value_t = 200)]
    max_plies: u32,

    /// Seed for reproducible matches
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file to use instead of the platform default
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Overrides the saved think delay
    #[arg(long)]
    think_delay_ms: Option<u64>,

    /// Go board size (9, 13 or 19)
    #[arg(long)]
    go_size: Option<usize>,

    /// Captures that win a Go game
    #[arg(long)]
    capture_target: Option<u32>,
}

impl Cli {
    fn settings(&self) -> anyhow::Result<GameSettings> {
        let mut settings = match &self.settings {
            Some(path) => GameSettings::load_from(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => GameSettings::load(),
        };
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        if let Some(ms) = self.think_delay_ms {
            settings.think_delay_ms = ms;
        }
        if let Some(size) = self.go_size {
            settings.go_board_size = size;
        }
        if self.capture_target.is_some() {
            settings.go_capture_target = self.capture_target;
        }
        settings.validate()?;
        Ok(settings)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // Settings choose the log filter, so their own warnings go to a
    // temporary subscriber.
    let settings = tracing::subscriber::with_default(logging::bootstrap(), || cli.settings())?;
    logging::init(&settings.log_filter);

    let delay = Duration::from_millis(settings.think_delay_ms);
    let difficulty = settings.difficulty;
    match cli.game {
        GameKind::Chess => {
            let rules = ChessRules {
                search_depth: settings.chess_search_depth,
            };
            play_match(rules, difficulty, delay, cli.seed, cli.max_plies).await
        }
        GameKind::Xiangqi => {
            play_match(XiangqiRules, difficulty, delay, cli.seed, cli.max_plies).await
        }
        GameKind::Checkers => {
            let rules = CheckersRules {
                search_depth: settings.checkers_search_depth,
            };
            play_match(rules, difficulty, delay, cli.seed, cli.max_plies).await
        }
        GameKind::Go => {
            let rules = GoRules {
                size: settings.go_board_size,
                capture_target: settings.go_capture_target,
            };
            play_match(rules, difficulty, delay, cli.seed, cli.max_plies).await
        }
        GameKind::Morris => {
            play_match(MorrisRules, difficulty, delay, cli.seed, cli.max_plies).await
        }
    }
}

async fn play_match<R: Ruleset>(
    rules: R,
    difficulty: Difficulty,
    delay: Duration,
    seed: Option<u64>,
    max_plies: u32,
) -> anyhow::Result<()> {
    let mut session = Session::new(rules, difficulty, delay, seed)?;
    info!("{} match, both sides {}", R::NAME, difficulty.description());
    let mut plies = 0;

    while plies < max_plies && !session.status().is_terminal() {
        let side = session.side_to_move();
        if !session.start_opponent_turn() {
            break;
        }
        match session.finish_opponent_turn().await? {
            OpponentTurn::Applied(mv) => {
                plies += 1;
                info!("{:>4}. {:?} plays {:?}", plies, side, mv);
            }
            OpponentTurn::NoMove => {
                info!("{:?} has no move", side);
                break;
            }
            OpponentTurn::Discarded | OpponentTurn::Idle => break,
        }
    }

    let winner = session
        .winner()
        .map_or_else(|| "none".to_string(), |side| format!("{side:?}"));
    match R::material_balance(session.state()) {
        Some(balance) => println!(
            "{}: {} after {} plies (winner: {}, material {:+})",
            R::NAME,
            session.status(),
            plies,
            winner,
            balance
        ),
        None => println!(
            "{}: {} after {} plies (winner: {})",
            R::NAME,
            session.status(),
            plies,
            winner
        ),
    }
    Ok(())
}
