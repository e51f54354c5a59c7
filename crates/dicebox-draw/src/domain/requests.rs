//! Roll requests and their outcomes.

use serde::{Deserialize, Serialize};

use super::selection::DrawPair;

/// Which die mechanic a request uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mechanic {
    /// Independent uniform draws.
    Plain,
    /// Independent exploding draws.
    Exploding,
    /// Two plain draws, ordered high/low.
    Advantage,
    /// Two exploding draws, ordered high/low.
    ExplodingAdvantage,
}

/// A request to roll one die mechanic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRequest {
    /// The mechanic to roll.
    pub mechanic: Mechanic,
    /// Face count of the die.
    pub die_max: i64,
    /// Number of dice for `Plain` and `Exploding`; pairs always roll two.
    pub count: usize,
}

/// The raw result of a roll request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollOutcome {
    /// One value per die, in draw order.
    Dice(Vec<u64>),
    /// An ordered advantage/disadvantage pair.
    Pair(DrawPair),
}
