//! Command dispatch: one generator per invocation, one roll per command.

use dicebox_draw::application::roll_handlers::handle_roll;
use dicebox_draw::domain::requests::{Mechanic, RollOutcome, RollRequest};
use dicebox_draw::{DrawPair, truncate_die};
use dicebox_generator::{Algorithm, Generator, create, create_seeded};
use dicebox_summary::{
    Distribution, DistributionKind, format_advantage, format_disadvantage, format_sum,
};
use serde::Serialize;
use tracing::info;

use crate::cli::{Cli, Command, DiceArgs, DistributionArgs, PairArgs};
use crate::error::AppError;

/// Which die of a pair counts toward the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Keep {
    High,
    Low,
}

/// JSON body for plain and exploding rolls.
#[derive(Debug, Serialize)]
struct DiceReport<'a> {
    algorithm: Algorithm,
    seed: Option<u64>,
    die: i64,
    modifier: i64,
    exploding: bool,
    dice: &'a [u64],
    total: i128,
}

/// JSON body for advantage and disadvantage rolls.
#[derive(Debug, Serialize)]
struct PairReport {
    algorithm: Algorithm,
    seed: Option<u64>,
    die: i64,
    modifier: i64,
    keep: Keep,
    exploding: bool,
    pair: DrawPair,
    total: i128,
}

/// Runs the parsed command and returns the text to print.
///
/// # Errors
///
/// Returns `AppError` if the algorithm or die is invalid, drawing fails, or
/// the output cannot be rendered.
pub fn run(cli: &Cli) -> Result<String, AppError> {
    let mut generator = build_generator(cli)?;

    match &cli.command {
        Command::Roll(args) => roll_dice(cli, Mechanic::Plain, args, &mut generator),
        Command::Explode(args) => roll_dice(cli, Mechanic::Exploding, args, &mut generator),
        Command::Advantage(args) => roll_pair(cli, Keep::High, args, &mut generator),
        Command::Disadvantage(args) => roll_pair(cli, Keep::Low, args, &mut generator),
        Command::Distribution(args) => sample_distribution(cli, args, &mut generator),
    }
}

fn build_generator(cli: &Cli) -> Result<Generator, AppError> {
    let generator = match cli.seed {
        Some(seed) => create_seeded(&cli.algorithm, seed)?,
        None => create(&cli.algorithm)?,
    };
    info!(algorithm = %generator.algorithm(), seeded = cli.seed.is_some(), "generator ready");
    Ok(generator)
}

/// Validates a numeric die argument before any draw happens.
fn die_from(value: f64) -> Result<i64, AppError> {
    truncate_die(value).ok_or(AppError::InvalidDie(value))
}

/// How a roll outcome is rendered and totalled.
#[derive(Debug, Clone, Copy)]
struct RollContext {
    die: i64,
    modifier: i64,
    keep: Keep,
    exploding: bool,
}

fn roll_dice(
    cli: &Cli,
    mechanic: Mechanic,
    args: &DiceArgs,
    generator: &mut Generator,
) -> Result<String, AppError> {
    let die = die_from(args.die)?;
    let request = RollRequest {
        mechanic,
        die_max: die,
        count: args.count,
    };
    let outcome = handle_roll(&request, generator)?;

    let context = RollContext {
        die,
        modifier: args.modifier,
        keep: Keep::High,
        exploding: mechanic == Mechanic::Exploding,
    };
    render(cli, generator.algorithm(), context, &outcome)
}

fn roll_pair(
    cli: &Cli,
    keep: Keep,
    args: &PairArgs,
    generator: &mut Generator,
) -> Result<String, AppError> {
    let die = die_from(args.die)?;
    let mechanic = if args.exploding {
        Mechanic::ExplodingAdvantage
    } else {
        Mechanic::Advantage
    };
    let request = RollRequest {
        mechanic,
        die_max: die,
        count: 2,
    };
    let outcome = handle_roll(&request, generator)?;

    let context = RollContext {
        die,
        modifier: args.modifier,
        keep,
        exploding: args.exploding,
    };
    render(cli, generator.algorithm(), context, &outcome)
}

fn render(
    cli: &Cli,
    algorithm: Algorithm,
    context: RollContext,
    outcome: &RollOutcome,
) -> Result<String, AppError> {
    let modifier = i128::from(context.modifier);

    match outcome {
        RollOutcome::Dice(dice) if cli.json => {
            let report = DiceReport {
                algorithm,
                seed: cli.seed,
                die: context.die,
                modifier: context.modifier,
                exploding: context.exploding,
                dice,
                total: dice.iter().map(|&v| i128::from(v)).sum::<i128>() + modifier,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        RollOutcome::Dice(dice) => Ok(format_sum(dice, context.modifier)),
        RollOutcome::Pair(pair) if cli.json => {
            let kept = match context.keep {
                Keep::High => pair.high,
                Keep::Low => pair.low,
            };
            let report = PairReport {
                algorithm,
                seed: cli.seed,
                die: context.die,
                modifier: context.modifier,
                keep: context.keep,
                exploding: context.exploding,
                pair: *pair,
                total: i128::from(kept) + modifier,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        RollOutcome::Pair(pair) => Ok(match context.keep {
            Keep::High => format_advantage(*pair, context.modifier),
            Keep::Low => format_disadvantage(*pair, context.modifier),
        }),
    }
}

fn sample_distribution(
    cli: &Cli,
    args: &DistributionArgs,
    generator: &mut Generator,
) -> Result<String, AppError> {
    let die = die_from(args.die)?;
    let kind: DistributionKind = args.kind.parse()?;

    let distribution = Distribution::sample(kind, args.samples, die, args.alpha, generator)?;
    info!(%kind, die, samples = args.samples, expectile = distribution.expectile, "distribution sampled");

    if cli.json {
        Ok(serde_json::to_string_pretty(&distribution)?)
    } else {
        Ok(distribution.to_string())
    }
}
