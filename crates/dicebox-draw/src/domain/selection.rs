//! Repeated sampling and advantage/disadvantage selection.

use dicebox_core::error::DiceError;
use dicebox_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};

use super::draw::{draw, explode, faces};

/// Two sequential draws from the same die, ordered high then low.
///
/// Advantage keeps `high`, disadvantage keeps `low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPair {
    /// The larger of the two draws.
    pub high: u64,
    /// The smaller of the two draws.
    pub low: u64,
}

impl DrawPair {
    /// Orders two draws into a pair.
    #[must_use]
    pub fn from_draws(first: u64, second: u64) -> Self {
        Self {
            high: first.max(second),
            low: first.min(second),
        }
    }
}

fn repeat(
    count: usize,
    die_max: i64,
    rng: &mut dyn DeterministicRng,
    single: fn(i64, &mut dyn DeterministicRng) -> Result<u64, DiceError>,
) -> Result<Vec<u64>, DiceError> {
    // Reject the die even when no draw would happen.
    faces(die_max)?;
    (0..count).map(|_| single(die_max, &mut *rng)).collect()
}

/// Performs `count` sequential plain draws, in call order.
///
/// # Errors
///
/// Returns `DiceError::InvalidDie` if `die_max < 2`. No partial results are
/// returned on failure.
pub fn draw_many(
    count: usize,
    die_max: i64,
    rng: &mut dyn DeterministicRng,
) -> Result<Vec<u64>, DiceError> {
    repeat(count, die_max, rng, draw)
}

/// Performs `count` sequential exploding draws, in call order.
///
/// # Errors
///
/// Propagates the first failure from [`explode`](super::draw::explode); no
/// partial results are returned.
pub fn explode_many(
    count: usize,
    die_max: i64,
    rng: &mut dyn DeterministicRng,
) -> Result<Vec<u64>, DiceError> {
    repeat(count, die_max, rng, explode)
}

fn pair_of(values: &[u64]) -> DrawPair {
    DrawPair::from_draws(values[0], values[1])
}

/// Rolls the same die twice and orders the results.
///
/// # Errors
///
/// Returns `DiceError::InvalidDie` if `die_max < 2`.
pub fn advantage(die_max: i64, rng: &mut dyn DeterministicRng) -> Result<DrawPair, DiceError> {
    let values = draw_many(2, die_max, rng)?;
    Ok(pair_of(&values))
}

/// Rolls the same exploding die twice and orders the results.
///
/// # Errors
///
/// Propagates any failure from the exploding draws.
pub fn explode_advantage(
    die_max: i64,
    rng: &mut dyn DeterministicRng,
) -> Result<DrawPair, DiceError> {
    let values = explode_many(2, die_max, rng)?;
    Ok(pair_of(&values))
}
