//! Ambient services shared by every game: errors, settings, logging

pub mod error;
pub mod logging;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use settings::{settings_path, GameSettings};
