//! Engine boundary — what the driver hands over and what it gets back.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::solver::config::SolverConfiguration;

/// Where the model text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    File(PathBuf),
    Stdin,
}

impl ModelSource {
    /// Open the model for reading.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            ModelSource::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Unable to open file {} for input", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            ModelSource::Stdin => Ok(Box::new(io::stdin().lock())),
        }
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSource::File(path) => write!(f, "{}", path.display()),
            ModelSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Final status reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Optimal,
    /// Optimal within the engine's gap tolerance.
    OptimalTolerance,
    Infeasible,
    Unbounded,
    TimeLimit,
    NodeLimit,
    SolutionLimit,
    /// The engine read the model but did not optimize it.
    NotSolved,
    /// Any other engine-specific status code.
    Other(i32),
}

impl SolveStatus {
    /// Whether the status proves the reported answer. An infeasible verdict
    /// counts: it is a proof that no solution exists.
    pub fn is_proof(self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Infeasible)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "Optimal"),
            SolveStatus::OptimalTolerance => write!(f, "OptimalTol"),
            SolveStatus::Infeasible => write!(f, "Infeasible"),
            SolveStatus::Unbounded => write!(f, "Unbounded"),
            SolveStatus::TimeLimit => write!(f, "AbortTimeLim"),
            SolveStatus::NodeLimit => write!(f, "AbortNodeLim"),
            SolveStatus::SolutionLimit => write!(f, "AbortSolLim"),
            SolveStatus::NotSolved => write!(f, "NotSolved"),
            SolveStatus::Other(code) => write!(f, "{}", code),
        }
    }
}

/// Number of cuts added, by family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CutCounts {
    pub fractional: u64,
    pub clique: u64,
    pub cover: u64,
}

/// Size of the extracted model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelDimensions {
    pub variables: usize,
    pub constraints: usize,
    pub nonzeros: usize,
}

/// Value of one variable in the solution.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableValue {
    /// Empty when the model did not name the variable.
    pub name: String,
    pub value: f64,
    /// Declared integer or binary in the model.
    pub integer: bool,
}

/// Everything the engine reports about one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    pub status: SolveStatus,
    pub found: bool,
    /// Objective value of the best solution, if one was found.
    pub objective: Option<f64>,
    pub node_count: u64,
    pub iteration_count: u64,
    /// Time as measured by the engine itself.
    pub engine_time_secs: f64,
    pub cuts: CutCounts,
    pub dimensions: Option<ModelDimensions>,
    /// Variable values in model column order.
    pub values: Vec<VariableValue>,
}

impl SolveOutcome {
    pub fn proved_optimal(&self) -> bool {
        self.status.is_proof()
    }

    pub fn timed_out(&self) -> bool {
        self.status == SolveStatus::TimeLimit
    }
}

/// An optimization engine that can solve a model file under a configuration.
pub trait SolverEngine {
    /// Engine name and version, for the report banner.
    fn name(&self) -> String;

    /// Read the model and optimize it. Errors cover unreadable or malformed
    /// models and engine failures; an infeasible model is an `Ok` outcome.
    fn solve(&mut self, config: &SolverConfiguration, model: &ModelSource) -> Result<SolveOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infeasible_counts_as_proved() {
        assert!(SolveStatus::Optimal.is_proof());
        assert!(SolveStatus::Infeasible.is_proof());
        assert!(!SolveStatus::OptimalTolerance.is_proof());
        assert!(!SolveStatus::TimeLimit.is_proof());
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let source = ModelSource::File(PathBuf::from("/nonexistent/model.mps"));
        let err = source.open().err().unwrap();
        assert!(err.to_string().contains("/nonexistent/model.mps"));
    }

    #[test]
    fn stdin_displays_as_placeholder() {
        assert_eq!(ModelSource::Stdin.to_string(), "<stdin>");
    }
}
