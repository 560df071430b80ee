//! Error types for argument interpretation.
//!
//! Nothing in `args` terminates the process. Every failure is returned as one
//! of these values and `main` maps it to a diagnostic and an exit status.

use thiserror::Error;

/// Exit status for a wrong number of file operands.
pub const EXIT_USAGE: u8 = 101;
/// Exit status when at least one flag is not recognized.
pub const EXIT_UNKNOWN_FLAG: u8 = 102;
/// Exit status when an accessor is asked for a flag that was never given.
pub const EXIT_MISSING_FLAG: u8 = 103;
/// Exit status when a value cannot be read as the requested type.
pub const EXIT_TYPE_COERCION: u8 = 104;

/// Errors raised by the typed accessors of [`FlagStore`](crate::args::FlagStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    #[error("Command-line flag: -{flag} was not present")]
    Missing { flag: String },

    #[error("Flag value is expected to be {expected}, flag = -{flag}, value = {value}")]
    Coercion {
        flag: String,
        value: String,
        expected: &'static str,
    },
}

/// Errors that end a run before the solver is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("Should have exactly one file name on the command line (found {found}).")]
    Usage { found: usize },

    #[error("Unknown option(s): {}", .0.join(", "))]
    UnknownFlags(Vec<String>),

    #[error(transparent)]
    Flag(#[from] FlagError),

    /// A hard-validated flag carried a malformed or out-of-range value.
    #[error("Bad {label} {value} -- should be {requirement}.")]
    BadValue {
        flag: &'static str,
        label: &'static str,
        value: String,
        requirement: &'static str,
        exit_code: u8,
    },
}

impl ArgsError {
    /// Map the error to the process exit status documented for it.
    pub fn exit_code(&self) -> u8 {
        match self {
            ArgsError::Usage { .. } => EXIT_USAGE,
            ArgsError::UnknownFlags(_) => EXIT_UNKNOWN_FLAG,
            ArgsError::Flag(FlagError::Missing { .. }) => EXIT_MISSING_FLAG,
            ArgsError::Flag(FlagError::Coercion { .. }) => EXIT_TYPE_COERCION,
            ArgsError::BadValue { exit_code, .. } => *exit_code,
        }
    }

    /// Whether the usage synopsis should accompany the diagnostic.
    pub fn wants_usage(&self) -> bool {
        matches!(self, ArgsError::Usage { .. } | ArgsError::UnknownFlags(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion_message_names_flag_and_value() {
        let err = FlagError::Coercion {
            flag: "cost".into(),
            value: "12x".into(),
            expected: "integer",
        };
        assert_eq!(
            err.to_string(),
            "Flag value is expected to be integer, flag = -cost, value = 12x"
        );
    }

    #[test]
    fn exit_codes_are_distinct() {
        let errors = [
            ArgsError::Usage { found: 0 },
            ArgsError::UnknownFlags(vec!["x".into()]),
            ArgsError::Flag(FlagError::Missing { flag: "x".into() }),
            ArgsError::Flag(FlagError::Coercion {
                flag: "x".into(),
                value: "y".into(),
                expected: "integer",
            }),
        ];
        let mut codes: Vec<u8> = errors.iter().map(ArgsError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn only_operand_and_flag_name_errors_print_usage() {
        assert!(ArgsError::Usage { found: 2 }.wants_usage());
        assert!(ArgsError::UnknownFlags(vec![]).wants_usage());
        assert!(!ArgsError::Flag(FlagError::Missing { flag: "a".into() }).wants_usage());
    }
}
