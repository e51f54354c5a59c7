//! Domain error types.

use thiserror::Error;

/// Errors raised by generator construction and draw operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// The requested generator algorithm tag is not supported.
    #[error("unknown generator algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// A die must have at least two faces.
    #[error("invalid die: {0} (a die needs at least 2 faces)")]
    InvalidDie(i64),

    /// An exploding draw kept re-triggering past the safety ceiling.
    #[error("explosion limit exceeded on d{die_max}: {draws} draws without settling")]
    ExplosionLimitExceeded {
        /// Face count of the die being exploded.
        die_max: i64,
        /// Number of draws performed before giving up.
        draws: usize,
    },

    /// The accumulated total no longer fits in a `u64`.
    #[error("exploding total overflowed on d{die_max}")]
    TotalOverflow {
        /// Face count of the die being exploded.
        die_max: i64,
    },
}
