//! Summary layer error types.

use dicebox_core::error::DiceError;
use thiserror::Error;

/// Errors raised while summarising draw results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummaryError {
    /// Statistics need at least one value.
    #[error("cannot summarise an empty sample")]
    EmptySample,

    /// Expectile level outside `[0, 1]`.
    #[error("expectile level must be within [0, 1], got {0}")]
    InvalidAlpha(f64),

    /// Unrecognised distribution kind.
    #[error("unknown distribution kind: {0:?} (expected \"uniform\" or \"exploding\")")]
    UnknownKind(String),

    /// Sampling failed in the draw engine.
    #[error(transparent)]
    Dice(#[from] DiceError),
}
