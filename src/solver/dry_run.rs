//! Dry-run engine — reads the model, reports its size, does not optimize.

use std::collections::HashSet;
use std::io::{BufRead, BufReader};

use anyhow::{Context, Result};

use crate::solver::config::SolverConfiguration;
use crate::solver::engine::{
    CutCounts, ModelDimensions, ModelSource, SolveOutcome, SolveStatus, SolverEngine,
};

/// Engine used when no optimization backend is linked in.
///
/// It checks that the model can be read and, for MPS input, counts
/// variables, constraints and nonzeros. The outcome is always
/// [`SolveStatus::NotSolved`].
#[derive(Debug, Default)]
pub struct DryRunEngine;

impl SolverEngine for DryRunEngine {
    fn name(&self) -> String {
        format!("dry-run engine {}", env!("CARGO_PKG_VERSION"))
    }

    fn solve(&mut self, config: &SolverConfiguration, model: &ModelSource) -> Result<SolveOutcome> {
        let reader = BufReader::new(model.open()?);
        let dimensions =
            scan_mps(reader).with_context(|| format!("error while reading model {}", model))?;

        tracing::info!(
            %model,
            time_limit_secs = config.time_limit_secs,
            ?dimensions,
            "no optimization backend linked; model read only"
        );

        Ok(SolveOutcome {
            status: SolveStatus::NotSolved,
            found: false,
            objective: None,
            node_count: 0,
            iteration_count: 0,
            engine_time_secs: 0.0,
            cuts: CutCounts::default(),
            dimensions,
            values: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Rows,
    Columns,
    Other,
}

/// Count model dimensions from fixed or free MPS text.
///
/// Returns `Ok(None)` when the text has no `ROWS` section (for example LP
/// format input).
fn scan_mps<R: BufRead>(reader: R) -> std::io::Result<Option<ModelDimensions>> {
    let mut section = Section::Preamble;
    let mut saw_rows = false;
    let mut objective_rows: HashSet<String> = HashSet::new();
    let mut dims = ModelDimensions::default();
    let mut last_column: Option<String> = None;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('*') {
            continue;
        }

        if !line.starts_with(char::is_whitespace) {
            let keyword = line.split_whitespace().next().unwrap_or_default();
            section = match keyword {
                "ROWS" => {
                    saw_rows = true;
                    Section::Rows
                }
                "COLUMNS" => Section::Columns,
                "ENDATA" => break,
                _ => Section::Other,
            };
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match section {
            Section::Rows => {
                if let [kind, name, ..] = fields.as_slice() {
                    if kind.eq_ignore_ascii_case("N") {
                        objective_rows.insert((*name).to_string());
                    } else {
                        dims.constraints += 1;
                    }
                }
            }
            Section::Columns => {
                if fields.get(1) == Some(&"'MARKER'") {
                    continue;
                }
                let Some((column, entries)) = fields.split_first() else {
                    continue;
                };
                if last_column.as_deref() != Some(*column) {
                    dims.variables += 1;
                    last_column = Some((*column).to_string());
                }
                dims.nonzeros += entries
                    .chunks(2)
                    .filter(|pair| pair.len() == 2 && !objective_rows.contains(pair[0]))
                    .count();
            }
            Section::Preamble | Section::Other => {}
        }
    }

    Ok(saw_rows.then_some(dims))
}
