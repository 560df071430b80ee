use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use ilprun::app::{run, AppError};
use ilprun::args::{flag_registry, usage, ArgsError};
use ilprun::config::Config;
use ilprun::logging::init_tracing;
use ilprun::solver::DryRunEngine;

fn main() -> ExitCode {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    init_tracing(&config.logging.filter);
    if let Some(err) = config_error {
        tracing::warn!("{}; using built-in defaults", err);
    }

    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let program = raw_args
        .first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ilprun".to_string());

    let mut engine = DryRunEngine;
    let result = {
        let mut out = io::stdout().lock();
        let mut diag = io::stderr().lock();
        run(raw_args, &config, &mut engine, &mut out, &mut diag)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&program, &err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Print the diagnostic for a failed run on stderr.
fn report_error(program: &str, err: &AppError) {
    match err {
        AppError::Args(ArgsError::UnknownFlags(names)) => {
            for name in names {
                eprintln!(" Unknown option: {}", name);
            }
        }
        _ => eprintln!("{}", err),
    }

    if let AppError::Args(args_err) = err {
        if args_err.wants_usage() {
            eprint!("{}", usage(program, &flag_registry()));
        }
    }
}
