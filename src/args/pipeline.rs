//! Pipeline — ties all argument processing stages together.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::args::classifier::classify;
use crate::args::error::ArgsError;
use crate::args::legality::{flags_are_legal, unknown_flags};
use crate::args::mapper::map_configuration;
use crate::args::registry::{flag_registry, legal_flag_names};
use crate::solver::{ModelSource, SolverConfiguration};

/// Everything needed to invoke the engine.
#[derive(Debug, Clone)]
pub struct RunParams {
    /// Program name as given on the command line.
    pub program: String,
    /// Where the model is read from.
    pub model: ModelSource,
    pub config: SolverConfiguration,
    /// Soft-validation warnings produced while mapping flags.
    pub warnings: Vec<String>,
}

/// Build run parameters from the full argument vector, program name first.
///
/// This is the main entry point for the argument pipeline.
///
/// # Arguments
///
/// * `raw_args` - The process arguments, including the program name
/// * `base` - Configuration whose values are kept for absent flags
///
/// # Errors
///
/// Returns the first error that ends the run: a wrong number of file
/// operands, unrecognized flags, or a hard-validation failure.
pub fn build_run_params<I, S>(raw_args: I, base: SolverConfiguration) -> Result<RunParams, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let registry = flag_registry();

    // Stage 1: Classify arguments
    let store = classify(raw_args);

    // Stage 2: Exactly one model file
    if store.number_of_files() != 1 {
        return Err(ArgsError::Usage {
            found: store.number_of_files(),
        });
    }

    // Stage 3: Legality gate
    let legal = legal_flag_names(&registry);
    if !flags_are_legal(&store, &legal) {
        let unknown = unknown_flags(&store, &legal)
            .into_iter()
            .map(String::from)
            .collect();
        return Err(ArgsError::UnknownFlags(unknown));
    }

    // Stage 4: Map flags onto the configuration
    let mapping = map_configuration(&store, &registry, base)?;

    let model = match store.file(1) {
        Some(path) if !path.is_empty() => ModelSource::File(PathBuf::from(path)),
        _ => ModelSource::Stdin,
    };

    Ok(RunParams {
        program: store.program_name().to_string_lossy().into_owned(),
        model,
        config: mapping.config,
        warnings: mapping.warnings,
    })
}
