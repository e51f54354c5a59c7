//! Sampled outcome distributions.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use dicebox_core::rng::DeterministicRng;
use dicebox_draw::{draw_many, explode_many};
use serde::Serialize;
use tracing::debug;

use crate::error::SummaryError;
use crate::stats::expectile;

const BAR_WIDTH: u64 = 40;

/// Longest run of absent values still drawn as empty rows; longer runs
/// collapse into a single `...` line.
const MAX_EMPTY_ROWS: u64 = 3;

/// Which draw path a distribution samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionKind {
    /// Plain uniform draws.
    Uniform,
    /// Exploding draws.
    Exploding,
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DistributionKind::Uniform => "uniform",
            DistributionKind::Exploding => "exploding",
        })
    }
}

impl FromStr for DistributionKind {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uniform" => Ok(DistributionKind::Uniform),
            "exploding" => Ok(DistributionKind::Exploding),
            _ => Err(SummaryError::UnknownKind(s.to_owned())),
        }
    }
}

/// Per-value counts of a sample, with its expectile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    /// Draw path the sample came from.
    pub kind: DistributionKind,
    /// Face count of the die.
    pub die_max: i64,
    /// Number of values sampled.
    pub sample_size: usize,
    /// Largest value seen.
    pub max: u64,
    /// How often each value occurred.
    pub counts: BTreeMap<u64, u64>,
    /// Expectile level used for `expectile`.
    pub alpha: f64,
    /// The `alpha`-expectile of the sample.
    pub expectile: f64,
}

impl Distribution {
    /// Draws `sample_size` values from the chosen path and summarises them.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::Dice` if drawing fails, `EmptySample` for a
    /// zero-sized sample, and `InvalidAlpha` for a bad expectile level.
    pub fn sample(
        kind: DistributionKind,
        sample_size: usize,
        die_max: i64,
        alpha: f64,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Self, SummaryError> {
        let values = match kind {
            DistributionKind::Uniform => draw_many(sample_size, die_max, rng)?,
            DistributionKind::Exploding => explode_many(sample_size, die_max, rng)?,
        };
        debug!(%kind, die_max, sample_size, "sampled distribution");
        Self::from_values(kind, die_max, &values, alpha)
    }

    /// Summarises an existing sample.
    ///
    /// # Errors
    ///
    /// Returns `EmptySample` for an empty slice and `InvalidAlpha` for a bad
    /// expectile level.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_values(
        kind: DistributionKind,
        die_max: i64,
        values: &[u64],
        alpha: f64,
    ) -> Result<Self, SummaryError> {
        let as_float: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        let expectile = expectile(&as_float, alpha)?;

        let mut counts = BTreeMap::new();
        for &value in values {
            *counts.entry(value).or_insert(0) += 1;
        }

        Ok(Self {
            kind,
            die_max,
            sample_size: values.len(),
            max: values.iter().copied().max().unwrap_or(0),
            counts,
            alpha,
            expectile,
        })
    }

    /// Occurrences of `value` in the sample.
    #[must_use]
    pub fn count(&self, value: u64) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    fn write_row(
        f: &mut fmt::Formatter<'_>,
        value: u64,
        count: u64,
        peak: u64,
        label_width: usize,
    ) -> fmt::Result {
        let bar = usize::try_from(count * BAR_WIDTH / peak).unwrap_or(0);
        writeln!(f, "{value:>label_width$} | {} {count}", "#".repeat(bar))
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} distribution (d{}, n={})",
            self.kind, self.die_max, self.sample_size
        )?;

        let peak = self.counts.values().copied().max().unwrap_or(0).max(1);
        let label_width = self.max.to_string().len();

        // Rows follow the observed values, never the numeric range.
        let mut previous = 0;
        for (&value, &count) in &self.counts {
            if value.saturating_sub(previous + 1) > MAX_EMPTY_ROWS {
                writeln!(f, "{:>label_width$} |", "...")?;
            } else {
                for absent in previous + 1..value {
                    Self::write_row(f, absent, 0, peak, label_width)?;
                }
            }
            Self::write_row(f, value, count, peak, label_width)?;
            previous = value;
        }

        write!(f, "expectile({:.2}) = {:.2}", self.alpha, self.expectile)
    }
}
