//! Dicebox Core — shared abstractions.
//!
//! This crate defines the randomness capability every draw operation is
//! written against, and the error taxonomy shared by all dicebox crates.
//! It contains no generator implementations.

pub mod error;
pub mod rng;
