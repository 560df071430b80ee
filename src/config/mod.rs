//! Optional settings file (`config.toml`).
//!
//! Supplies defaults for flags that are absent and the log filter. Flags on
//! the command line always take precedence.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults, LoggingConfig};
