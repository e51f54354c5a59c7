//! Dicebox command line entry point.

use std::error::Error;

use clap::Parser;
use dicebox_cli::Cli;
use dicebox_cli::config::{LogConfig, LogFormat};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Initialize tracing subscriber on stderr so stdout carries only results.
    let log_config = LogConfig::from_env()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&log_config.default_filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match log_config.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }

    tracing::debug!(command = ?cli.command, "starting dicebox");

    let output = dicebox_cli::run(&cli)?;
    println!("{output}");

    Ok(())
}
