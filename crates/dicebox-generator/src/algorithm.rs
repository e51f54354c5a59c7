//! Supported bit-stream algorithms.

use std::fmt;
use std::str::FromStr;

use dicebox_core::error::DiceError;
use serde::{Deserialize, Serialize};

/// Tag selecting the backend a `Generator` is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// ChaCha with 12 rounds. Selected by the `default` tag.
    #[default]
    #[serde(rename = "default")]
    ChaCha12,
    /// PCG XSL-RR 128/64.
    #[serde(rename = "PCG64")]
    Pcg64,
    /// PCG DXSM 128/64.
    #[serde(rename = "DXSM")]
    Pcg64Dxsm,
}

impl Algorithm {
    /// Every supported algorithm, in tag order.
    pub const ALL: [Algorithm; 3] = [Algorithm::ChaCha12, Algorithm::Pcg64, Algorithm::Pcg64Dxsm];

    /// The canonical tag string.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::ChaCha12 => "default",
            Algorithm::Pcg64 => "PCG64",
            Algorithm::Pcg64Dxsm => "DXSM",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| DiceError::UnknownAlgorithm(s.to_owned()))
    }
}
