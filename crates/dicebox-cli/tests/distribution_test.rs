//! Integration tests for the distribution command.

mod common;

use dicebox_cli::AppError;
use dicebox_summary::SummaryError;

#[test]
fn test_uniform_distribution_json() {
    let json = common::run_json(&[
        "--seed", "21", "distribution", "--kind", "uniform", "--die", "6", "--samples", "600",
    ]);

    let counts = json["counts"].as_object().unwrap();
    let total: u64 = counts.values().map(|v| v.as_u64().unwrap()).sum();

    assert_eq!(json["kind"], "uniform");
    assert_eq!(json["sample_size"], 600);
    assert_eq!(total, 600);
    assert!(counts.keys().all(|k| (1..=6).contains(&k.parse::<u64>().unwrap())));
}

#[test]
fn test_exploding_distribution_text() {
    let text = common::run_text(&[
        "--seed", "21", "distribution", "--kind", "exploding", "--die", "4", "--samples", "500",
    ]);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "exploding distribution (d4, n=500)");
    assert!(lines.last().unwrap().starts_with("expectile(0.50) = "));
}

#[test]
fn test_unknown_kind_is_rejected() {
    let result = common::run_args(&["distribution", "--kind", "normal", "--die", "6"]);
    assert!(matches!(
        result,
        Err(AppError::Summary(SummaryError::UnknownKind(_)))
    ));
}

#[test]
fn test_invalid_alpha_is_rejected() {
    let result = common::run_args(&[
        "--seed", "1", "distribution", "--die", "6", "--samples", "10", "--alpha", "2",
    ]);
    assert!(matches!(
        result,
        Err(AppError::Summary(SummaryError::InvalidAlpha(_)))
    ));
}
