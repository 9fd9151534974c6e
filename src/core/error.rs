//! Error types for the core module
//!
//! Settings persistence and validation failures.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Settings parsed but hold a value no game accepts
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
