//! Dicebox CLI error types.

use dicebox_core::error::DiceError;
use dicebox_summary::SummaryError;
use thiserror::Error;

/// Startup and runtime errors for the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The `--die` value is not a usable die.
    #[error("invalid die: {0} (a die needs at least 2 faces)")]
    InvalidDie(f64),

    /// Generator construction or drawing failed.
    #[error(transparent)]
    Dice(#[from] DiceError),

    /// Summarising the results failed.
    #[error(transparent)]
    Summary(#[from] SummaryError),

    /// Rendering JSON output failed.
    #[error("output error: {0}")]
    Json(#[from] serde_json::Error),
}
