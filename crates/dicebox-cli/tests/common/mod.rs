//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use clap::Parser;
use dicebox_cli::{AppError, Cli};
use serde_json::Value;

/// Parses `args` as if typed after `dicebox` and runs the command.
pub fn run_args(args: &[&str]) -> Result<String, AppError> {
    let cli = Cli::try_parse_from(std::iter::once("dicebox").chain(args.iter().copied()))
        .expect("arguments should parse");
    dicebox_cli::run(&cli)
}

/// Runs a command that is expected to succeed and strips terminal styling.
pub fn run_text(args: &[&str]) -> String {
    let output = run_args(args).expect("command should succeed");
    console::strip_ansi_codes(&output).into_owned()
}

/// Runs a command with `--json` and parses its output.
pub fn run_json(args: &[&str]) -> Value {
    let mut with_json = vec!["--json"];
    with_json.extend_from_slice(args);
    let output = run_args(&with_json).expect("command should succeed");
    serde_json::from_str(&output).expect("output should be JSON")
}
