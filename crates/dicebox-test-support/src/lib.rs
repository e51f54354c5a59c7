//! Shared test doubles for the dicebox dice engine.

mod rng;

pub use rng::{ConstantRng, MockRng, SequenceRng};
