//! Run report on stdout: one `key\tvalue` pair per line, so runs can be
//! collected and compared with ordinary text tools.

use std::io::{self, Write};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::solver::{ModelSource, SolveOutcome, SolverConfiguration};

/// Banner identifying the driver and engine, with the wall-clock start time.
pub fn write_banner<W: Write>(
    out: &mut W,
    engine: &str,
    now: DateTime<Utc>,
) -> io::Result<()> {
    writeln!(out, "+++ ilprun, release {} +++", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "\t{}", engine)?;
    writeln!(out, "CurrentTime\t{}", now.format("%a %Y/%m/%d %H:%M:%S GMT"))
}

pub fn write_input<W: Write>(out: &mut W, model: &ModelSource) -> io::Result<()> {
    writeln!(out, "InputFile\t{}", model)
}

/// The parameter block, bracketed by its start and end markers.
pub fn write_parameters<W: Write>(out: &mut W, config: &SolverConfiguration) -> io::Result<()> {
    writeln!(out, "Parameter values for current run --")?;
    writeln!(out, "Timeout\t{}", config.time_limit_secs)?;
    match config.node_limit {
        Some(limit) => writeln!(out, "Node_limit\t{}", limit)?,
        None => writeln!(out, "Node_limit\tnone")?,
    }
    match config.solution_limit {
        Some(limit) => writeln!(out, "Solution_limit\t{}", limit)?,
        None => writeln!(out, "Solution_limit\tnone")?,
    }
    writeln!(out, "Target_cost\t{}", config.target_cost)?;
    writeln!(out, "Initial_UB\t{}", config.initial_upper_bound)?;
    writeln!(out, "Dependence indicator:\t{}", config.dependence_level)?;
    writeln!(out, "Feasibility indicator:\t{}", config.emphasis)?;
    writeln!(out, "Node_selection\t{}", config.node_selection.engine_value())?;
    writeln!(out, "Variable_selection\t{}", config.variable_selection.engine_value())?;
    writeln!(out, "Heuristic_Frequency\t{}", config.heuristic_frequency)?;
    writeln!(out, "RINS_Heur_Frequency\t{}", config.rins_frequency)?;
    writeln!(out, "LP_Algorithm\t{}", config.lp_algorithm.engine_value())?;
    writeln!(out, "FracCuts\t{}", cut_setting(config.aggressive_fractional_cuts))?;
    writeln!(out, "Covers\t{}", cut_setting(config.aggressive_cover_cuts))?;
    writeln!(out, "Probing\t{}", config.probing_level)?;
    writeln!(out, "Trace\t{}", config.trace_level)?;
    writeln!(out, "-- end of run parameters.")?;
    writeln!(out)
}

// Engine cut aggressiveness: 0 automatic, 2 aggressive.
fn cut_setting(aggressive: bool) -> i32 {
    if aggressive {
        2
    } else {
        0
    }
}

/// Results of one engine run, followed by the solution if requested.
pub fn write_outcome<W: Write>(
    out: &mut W,
    config: &SolverConfiguration,
    outcome: &SolveOutcome,
    wall_clock: Duration,
) -> io::Result<()> {
    if let Some(dims) = outcome.dimensions {
        writeln!(out, "Variables\t{}", dims.variables)?;
        writeln!(out, "Constraints\t{}", dims.constraints)?;
        writeln!(out, "NonZeros\t{}", dims.nonzeros)?;
    }
    writeln!(out, "runtime \t{}", wall_clock.as_secs_f64())?;
    writeln!(out, "EngineTime\t{}", outcome.engine_time_secs)?;
    writeln!(out, "TimedOut\t{}", u8::from(outcome.timed_out()))?;
    writeln!(out, "SolutionFound\t{}", u8::from(outcome.found))?;
    writeln!(out, "ProvedOptimal\t{}", u8::from(outcome.proved_optimal()))?;
    writeln!(out, "StatusCode\t{}", outcome.status)?;
    writeln!(out, "num_branches\t{}", outcome.node_count)?;
    if let Some(value) = outcome.objective.filter(|_| outcome.found) {
        writeln!(out, "value     \t{}", value)?;
    }
    writeln!(out, "iterations\t{}", outcome.iteration_count)?;
    writeln!(out, "frac_cuts  \t{}", outcome.cuts.fractional)?;
    writeln!(out, "clique_cuts\t{}", outcome.cuts.clique)?;
    writeln!(out, "cover_cuts\t{}", outcome.cuts.cover)?;

    if !outcome.found {
        return Ok(());
    }
    if config.verify {
        write_verification(out, config, outcome)?;
    }
    if config.print_solution {
        write_solution(out, outcome)?;
    }
    Ok(())
}

fn write_verification<W: Write>(
    out: &mut W,
    config: &SolverConfiguration,
    outcome: &SolveOutcome,
) -> io::Result<()> {
    if config.lp_only {
        writeln!(out, "Solution")?;
        for (i, var) in outcome.values.iter().enumerate() {
            writeln!(out, "x{:05}\t{}", i, var.value)?;
        }
    } else {
        write!(out, "Solution\t")?;
        // Shift by one half, then truncate toward zero.
        for var in &outcome.values {
            write!(out, "{}", (var.value + 0.5) as i64)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_solution<W: Write>(out: &mut W, outcome: &SolveOutcome) -> io::Result<()> {
    writeln!(out, "BeginSolution")?;
    for var in outcome.values.iter().filter(|v| !v.name.is_empty()) {
        if var.integer {
            // Engines may report integer variables slightly off integral.
            writeln!(out, "{}\t{}", var.name, var.value.round() as i64)?;
        } else {
            writeln!(out, "{}\t{}", var.name, var.value)?;
        }
    }
    writeln!(out, "EndSolution")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{CutCounts, SolveStatus, VariableValue};
    use chrono::TimeZone;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn solved(values: Vec<VariableValue>) -> SolveOutcome {
        SolveOutcome {
            status: SolveStatus::Optimal,
            found: true,
            objective: Some(7.0),
            node_count: 12,
            iteration_count: 40,
            engine_time_secs: 0.25,
            cuts: CutCounts {
                fractional: 3,
                clique: 0,
                cover: 1,
            },
            dimensions: None,
            values,
        }
    }

    fn var(name: &str, value: f64, integer: bool) -> VariableValue {
        VariableValue {
            name: name.to_string(),
            value,
            integer,
        }
    }

    #[test]
    fn banner_uses_gmt_timestamp() {
        let now = Utc.with_ymd_and_hms(2019, 5, 17, 20, 21, 26).unwrap();
        let text = render(|out| write_banner(out, "test engine", now));
        assert!(text.contains("CurrentTime\tFri 2019/05/17 20:21:26 GMT"));
        assert!(text.contains("\ttest engine\n"));
    }

    #[test]
    fn parameter_block_is_bracketed() {
        let text = render(|out| write_parameters(out, &SolverConfiguration::default()));
        assert!(text.starts_with("Parameter values for current run --\n"));
        assert!(text.contains("Timeout\t3600\n"));
        assert!(text.contains("Node_selection\t1\n"));
        assert!(text.contains(&format!("Target_cost\t{}\n", i64::MIN)));
        assert!(text.ends_with("-- end of run parameters.\n\n"));
    }

    #[test]
    fn verify_prints_rounded_integer_string() {
        let config = SolverConfiguration {
            verify: true,
            ..SolverConfiguration::default()
        };
        let outcome = solved(vec![var("a", 0.9999, true), var("b", 0.0001, true), var("c", 1.0, true)]);
        let text = render(|out| write_outcome(out, &config, &outcome, Duration::from_millis(10)));
        assert!(text.contains("Solution\t101\n"));
        assert!(text.contains("value     \t7\n"));
        assert!(text.contains("ProvedOptimal\t1\n"));
    }

    #[test]
    fn verify_truncates_shifted_negative_values_toward_zero() {
        let config = SolverConfiguration {
            verify: true,
            ..SolverConfiguration::default()
        };
        let outcome = solved(vec![var("a", -0.7, true), var("b", -1.2, true), var("c", 1.5, true)]);
        let text = render(|out| write_outcome(out, &config, &outcome, Duration::ZERO));
        // -0.2 → 0, -0.7 → 0, 2.0 → 2
        assert!(text.contains("Solution\t002\n"));
    }

    #[test]
    fn verify_in_lp_mode_prints_indexed_values() {
        let config = SolverConfiguration {
            verify: true,
            lp_only: true,
            ..SolverConfiguration::default()
        };
        let outcome = solved(vec![var("a", 0.5, false), var("b", 1.25, false)]);
        let text = render(|out| write_outcome(out, &config, &outcome, Duration::ZERO));
        assert!(text.contains("Solution\nx00000\t0.5\nx00001\t1.25\n"));
    }

    #[test]
    fn solution_rounds_negative_integers_away_from_zero() {
        let config = SolverConfiguration {
            print_solution: true,
            ..SolverConfiguration::default()
        };
        let outcome = solved(vec![var("x", -2.9999, true), var("", 4.0, true), var("y", 0.75, false)]);
        let text = render(|out| write_outcome(out, &config, &outcome, Duration::ZERO));
        assert!(text.contains("BeginSolution\nx\t-3\ny\t0.75\nEndSolution\n"));
    }

    #[test]
    fn nothing_printed_for_solution_when_none_found() {
        let config = SolverConfiguration {
            verify: true,
            print_solution: true,
            ..SolverConfiguration::default()
        };
        let outcome = SolveOutcome {
            status: SolveStatus::Infeasible,
            found: false,
            objective: None,
            ..solved(Vec::new())
        };
        let text = render(|out| write_outcome(out, &config, &outcome, Duration::ZERO));
        assert!(text.contains("SolutionFound\t0\n"));
        assert!(text.contains("ProvedOptimal\t1\n"));
        assert!(!text.contains("value"));
        assert!(!text.contains("BeginSolution"));
    }
}
