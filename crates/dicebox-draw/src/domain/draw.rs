//! Single-die uniform draws and the exploding variant.

use dicebox_core::error::DiceError;
use dicebox_core::rng::DeterministicRng;
use tracing::warn;

/// Most draws a single exploding roll may consume before it is abandoned.
///
/// A fair die re-triggers with probability `1/die_max`, so a healthy stream
/// reaching this many draws means the generator is degenerate.
pub const MAX_EXPLOSION_DRAWS: usize = 10_000;

/// Checks `die_max` and returns it as a face count.
pub(crate) fn faces(die_max: i64) -> Result<u64, DiceError> {
    if die_max < 2 {
        return Err(DiceError::InvalidDie(die_max));
    }
    Ok(die_max.unsigned_abs())
}

/// Draws one value uniformly from `[1, die_max]`, both ends inclusive.
///
/// Consumes exactly one sample from `rng`.
///
/// # Errors
///
/// Returns `DiceError::InvalidDie` if `die_max < 2`.
pub fn draw(die_max: i64, rng: &mut dyn DeterministicRng) -> Result<u64, DiceError> {
    let faces = faces(die_max)?;
    Ok(rng.next_u64_range(1, faces))
}

/// Rolls an exploding die starting from a zero total.
///
/// # Errors
///
/// See [`explode_from`].
pub fn explode(die_max: i64, rng: &mut dyn DeterministicRng) -> Result<u64, DiceError> {
    explode_from(die_max, 0, rng)
}

/// Rolls an exploding die on top of an existing total.
///
/// Draws and accumulates until the running total is not a multiple of
/// `die_max`. The check is on the cumulative total, so a starting total can
/// re-trigger on a non-maximal face.
///
/// # Errors
///
/// Returns `DiceError::InvalidDie` if `die_max < 2`,
/// `DiceError::ExplosionLimitExceeded` after [`MAX_EXPLOSION_DRAWS`] draws
/// without settling, and `DiceError::TotalOverflow` if the total no longer
/// fits in a `u64`.
pub fn explode_from(
    die_max: i64,
    start: u64,
    rng: &mut dyn DeterministicRng,
) -> Result<u64, DiceError> {
    let faces = faces(die_max)?;
    let mut total = start;

    for _ in 0..MAX_EXPLOSION_DRAWS {
        let face = rng.next_u64_range(1, faces);
        total = total
            .checked_add(face)
            .ok_or(DiceError::TotalOverflow { die_max })?;
        if total % faces != 0 {
            return Ok(total);
        }
    }

    warn!(die_max, total, draws = MAX_EXPLOSION_DRAWS, "exploding draw hit safety ceiling");
    Err(DiceError::ExplosionLimitExceeded {
        die_max,
        draws: MAX_EXPLOSION_DRAWS,
    })
}
