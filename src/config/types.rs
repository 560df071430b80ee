use serde::{Deserialize, Serialize};

use crate::solver::{SolverConfiguration, DEFAULT_TIME_LIMIT_SECS};

/// Root configuration container for the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values used when the matching flag is absent from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Engine time limit in seconds (default: 3600).
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u64,
}

/// Diagnostic logging on stderr.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence (default: "warn").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_time_limit() -> u64 {
    DEFAULT_TIME_LIMIT_SECS
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            time_limit_secs: default_time_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Solver configuration holding every default, before flags are applied.
    pub fn base_solver_configuration(&self) -> SolverConfiguration {
        SolverConfiguration::with_time_limit(self.defaults.time_limit_secs)
    }
}
