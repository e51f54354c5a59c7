//! Command line arguments.

use clap::{Args, Parser, Subcommand};

/// Roll and summarise tabletop dice.
#[derive(Debug, Parser)]
#[command(name = "dicebox", version, about, long_about = None)]
pub struct Cli {
    /// Generator algorithm tag: default, PCG64 or DXSM
    #[arg(long, global = true, env = "DICEBOX_ALGORITHM", default_value = "default")]
    pub algorithm: String,

    /// Seed for a reproducible generator
    #[arg(long, global = true, env = "DICEBOX_SEED")]
    pub seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Roll plain dice and sum them
    Roll(DiceArgs),

    /// Roll exploding dice and sum them
    Explode(DiceArgs),

    /// Roll twice and keep the higher result
    Advantage(PairArgs),

    /// Roll twice and keep the lower result
    Disadvantage(PairArgs),

    /// Sample many rolls and show the outcome histogram
    Distribution(DistributionArgs),
}

#[derive(Debug, Args)]
pub struct DiceArgs {
    /// Number of faces on the die
    #[arg(short, long)]
    pub die: f64,

    /// How many dice to roll
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Flat modifier added to the total
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub modifier: i64,
}

#[derive(Debug, Args)]
pub struct PairArgs {
    /// Number of faces on the die
    #[arg(short, long)]
    pub die: f64,

    /// Flat modifier added to the kept result
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub modifier: i64,

    /// Use exploding draws for both rolls
    #[arg(short, long)]
    pub exploding: bool,
}

#[derive(Debug, Args)]
pub struct DistributionArgs {
    /// Draw path to sample: uniform or exploding
    #[arg(short, long, default_value = "uniform")]
    pub kind: String,

    /// Number of faces on the die
    #[arg(short, long)]
    pub die: f64,

    /// Number of rolls to sample
    #[arg(short = 'n', long, default_value_t = 10_000)]
    pub samples: usize,

    /// Expectile level in [0, 1]
    #[arg(long, default_value_t = 0.5)]
    pub alpha: f64,
}
