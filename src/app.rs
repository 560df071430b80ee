//! One complete run: interpret the command line, report the parameters,
//! invoke the engine under the wall-clock timer, report the outcome.

use std::ffi::OsString;
use std::io::{self, Write};
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;

use crate::args::{build_run_params, ArgsError};
use crate::config::Config;
use crate::report;
use crate::solver::SolverEngine;
use crate::timer::ClockTimer;

/// Exit status for failures after the command line was accepted.
pub const EXIT_FAILURE: u8 = 1;

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Args(#[from] ArgsError),

    /// The engine could not read the model or failed while solving.
    #[error("{0:#}")]
    Engine(anyhow::Error),

    #[error("Failed to write report: {0}")]
    Report(#[from] io::Error),
}

impl AppError {
    /// Map the error to the process exit status documented for it.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Args(err) => err.exit_code(),
            AppError::Engine(_) | AppError::Report(_) => EXIT_FAILURE,
        }
    }
}

/// Run the driver over `raw_args` (program name first).
///
/// The report goes to `out`; soft-validation warnings go to `diag`. Nothing
/// reaches the engine unless the whole configuration was built.
pub fn run<I, S, E, W, D>(
    raw_args: I,
    config: &Config,
    engine: &mut E,
    out: &mut W,
    diag: &mut D,
) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    E: SolverEngine,
    W: Write,
    D: Write,
{
    report::write_banner(out, &engine.name(), Utc::now())?;

    let params = build_run_params(raw_args, config.base_solver_configuration())?;
    for warning in &params.warnings {
        tracing::debug!(%warning, "soft validation");
        writeln!(diag, "Warning: {}", warning)?;
    }

    report::write_input(out, &params.model)?;
    report::write_parameters(out, &params.config)?;
    out.flush()?;

    let mut timer = ClockTimer::new();
    timer.set_limit(Duration::from_secs(params.config.time_limit_secs));
    timer.start();
    let result = engine.solve(&params.config, &params.model);
    timer.stop();

    let outcome = result.map_err(|err| {
        tracing::error!(elapsed_secs = timer.elapsed().as_secs_f64(), "engine failed");
        AppError::Engine(err)
    })?;

    if timer.limit_reached() && !outcome.timed_out() {
        tracing::warn!(
            elapsed_secs = timer.elapsed().as_secs_f64(),
            limit_secs = params.config.time_limit_secs,
            "engine ran past the time limit without reporting a timeout"
        );
    }

    report::write_outcome(out, &params.config, &outcome, timer.elapsed())?;
    out.flush()?;
    Ok(())
}
