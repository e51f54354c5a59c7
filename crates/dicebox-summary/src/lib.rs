//! Dicebox — Summary Layer.
//!
//! Turns raw draw results into human-readable strings and statistics. It
//! only consumes draw engine output; no draw logic lives here.

pub mod distribution;
pub mod error;
pub mod format;
pub mod stats;

pub use distribution::{Distribution, DistributionKind};
pub use error::SummaryError;
pub use format::{format_advantage, format_disadvantage, format_sum};
pub use stats::expectile;
