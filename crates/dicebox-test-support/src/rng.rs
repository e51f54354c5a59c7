//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use dicebox_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min`. Suitable for tests that do not
/// depend on specific random values.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u64_range(&mut self, min: u64, _max: u64) -> u64 {
        min
    }
}

/// An RNG that returns values from a predetermined sequence, ignoring the
/// requested range. Panics if the sequence is exhausted. Used in tests that
/// need specific, repeatable faces (e.g., forcing an explosion chain).
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u64>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u64_range(&mut self, _min: u64, _max: u64) -> u64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}

/// An RNG that returns the same value forever and counts how often it was
/// asked. A degenerate stream for exercising safety limits.
#[derive(Debug)]
pub struct ConstantRng {
    value: u64,
    calls: usize,
}

impl ConstantRng {
    /// Create a new `ConstantRng` that always yields `value`.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self { value, calls: 0 }
    }

    /// Number of draws requested so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl DeterministicRng for ConstantRng {
    fn next_u64_range(&mut self, _min: u64, _max: u64) -> u64 {
        self.calls += 1;
        self.value
    }
}
