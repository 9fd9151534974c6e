//! Guild of Games
//!
//! Session driver and settings around the [`guild_engine`] rule engines.

pub mod core;
pub mod game;
