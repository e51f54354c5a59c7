//! Dicebox — Generator Manager.
//!
//! Creates, seeds, and spawns independent pseudo-random streams. Callers own
//! the generators they request; nothing here keeps a registry or shares
//! state between instances.

pub mod algorithm;
pub mod generator;
mod lineage;

use dicebox_core::error::DiceError;

pub use algorithm::Algorithm;
pub use generator::Generator;

/// Constructs a non-reproducible generator for the named algorithm tag.
///
/// # Errors
///
/// Returns `DiceError::UnknownAlgorithm` if the tag is not supported.
pub fn create(tag: &str) -> Result<Generator, DiceError> {
    let algorithm: Algorithm = tag.parse()?;
    Ok(Generator::from_entropy(algorithm))
}

/// Constructs a reproducible generator for the named algorithm tag.
///
/// # Errors
///
/// Returns `DiceError::UnknownAlgorithm` if the tag is not supported.
pub fn create_seeded(tag: &str, seed: u64) -> Result<Generator, DiceError> {
    let algorithm: Algorithm = tag.parse()?;
    Ok(Generator::seeded(algorithm, seed))
}

/// Derives one new generator, independent of `parent` and of its other
/// children. The parent's own output sequence is left untouched.
#[must_use]
pub fn spawn(parent: &mut Generator) -> Generator {
    parent.spawn()
}
