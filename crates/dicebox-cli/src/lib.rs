//! Dicebox command line front end.
//!
//! Parses arguments, builds the requested generator, runs one roll or
//! distribution, and renders it as text or JSON.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use commands::run;
pub use error::AppError;
