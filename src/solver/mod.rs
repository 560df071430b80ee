//! Solver-facing types: the configuration, strategy codes, and the engine
//! boundary.
//!
//! The optimization itself happens inside a [`SolverEngine`]. The crate ships
//! [`DryRunEngine`], which reads the model without optimizing it.

mod config;
mod dry_run;
mod engine;
mod strategy;

pub use config::{SolverConfiguration, DEFAULT_TIME_LIMIT_SECS};
pub use dry_run::DryRunEngine;
pub use engine::{
    CutCounts, ModelDimensions, ModelSource, SolveOutcome, SolveStatus, SolverEngine,
    VariableValue,
};
pub use strategy::{LpAlgorithm, NodeSelection, VariableSelection};
