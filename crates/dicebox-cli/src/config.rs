//! Runtime configuration read from the environment.

use crate::error::AppError;

/// Environment variable selecting the log line format.
pub const LOG_FORMAT_VAR: &str = "DICEBOX_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Line format.
    pub format: LogFormat,
    /// Filter directive applied when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl LogConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `DICEBOX_LOG_FORMAT` holds an unknown value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the log format value is unknown.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let format = match lookup(LOG_FORMAT_VAR).as_deref().map(str::trim) {
            None | Some("" | "text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "{LOG_FORMAT_VAR} must be \"text\" or \"json\", got {other:?}"
                )));
            }
        };

        Ok(Self {
            format,
            default_filter: DEFAULT_LOG_FILTER.to_owned(),
        })
    }
}
