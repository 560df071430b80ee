//! Command-line interpretation for ilprun.
//!
//! This module turns the raw argument vector into a solver configuration:
//!
//! ```text
//! argv → Classify → Operand check → Legality gate → Map → RunParams
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.
//! Failures come back as [`ArgsError`] values; only `main` turns them into a
//! diagnostic and an exit status.

mod classifier;
mod error;
mod legality;
mod mapper;
mod pipeline;
mod registry;
mod store;
mod usage;

pub use classifier::classify;
pub use error::{
    ArgsError, FlagError, EXIT_MISSING_FLAG, EXIT_TYPE_COERCION, EXIT_UNKNOWN_FLAG, EXIT_USAGE,
};
pub use legality::{flags_are_legal, unknown_flags};
pub use mapper::{map_configuration, Mapping};
pub use pipeline::{build_run_params, RunParams};
pub use registry::{
    flag_registry, legal_flag_names, ChoiceParam, FlagDef, IntParam, SwitchParam, Validation,
};
pub use store::{FlagStore, PRESENCE_VALUE};
pub use usage::usage;
