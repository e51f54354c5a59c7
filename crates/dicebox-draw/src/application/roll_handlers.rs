//! Roll handlers for the draw engine.
//!
//! These functions sit between callers (the CLI, the summary layer) and the
//! domain draw operations: pick the mechanic, run it, and log the outcome.

use dicebox_core::error::DiceError;
use dicebox_core::rng::DeterministicRng;
use tracing::{debug, instrument};

use crate::domain::requests::{Mechanic, RollOutcome, RollRequest};
use crate::domain::selection::{advantage, draw_many, explode_advantage, explode_many};

/// Handles a `RollRequest` using the caller's generator.
///
/// # Errors
///
/// Returns `DiceError` if the die is invalid or an exploding draw fails.
#[instrument(skip(rng), fields(mechanic = ?request.mechanic, die_max = request.die_max))]
pub fn handle_roll(
    request: &RollRequest,
    rng: &mut dyn DeterministicRng,
) -> Result<RollOutcome, DiceError> {
    let outcome = match request.mechanic {
        Mechanic::Plain => RollOutcome::Dice(draw_many(request.count, request.die_max, rng)?),
        Mechanic::Exploding => {
            RollOutcome::Dice(explode_many(request.count, request.die_max, rng)?)
        }
        Mechanic::Advantage => RollOutcome::Pair(advantage(request.die_max, rng)?),
        Mechanic::ExplodingAdvantage => {
            RollOutcome::Pair(explode_advantage(request.die_max, rng)?)
        }
    };

    debug!(?outcome, "roll handled");
    Ok(outcome)
}
