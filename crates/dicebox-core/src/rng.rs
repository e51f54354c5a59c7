//! Random number generator abstraction for determinism.
//!
//! In production, this is backed by a seeded `Generator`. In tests, a
//! scripted implementation is injected.
//!
//! Implementations carry mutable stream state. Sharing one instance across
//! threads requires external synchronisation; independent parallel work
//! should spawn a separate generator per worker instead.

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u64` in the range `[min, max]` inclusive.
    ///
    /// Each call consumes exactly one sample from the underlying stream.
    fn next_u64_range(&mut self, min: u64, max: u64) -> u64;
}
