//! ilprun — command-line driver for integer/linear programming engines.
//!
//! - [`args`] - Classify `-name=value` flags and file operands, check them
//!   against the flag registry and map them onto a solver configuration
//! - [`solver`] - The configuration, strategy codes and the engine boundary
//! - [`config`] - Optional settings file with defaults and the log filter
//! - [`report`] - Tab-separated run report
//! - [`timer`] - Wall-clock stopwatch around the engine call
//! - [`app`] - One complete run, returning an error value with its exit status

pub mod app;
pub mod args;
pub mod config;
pub mod logging;
pub mod report;
pub mod solver;
pub mod timer;
