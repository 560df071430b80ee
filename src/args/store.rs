//! Flag store — parsed flags and file operands with typed lookup.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::str::FromStr;

use crate::args::error::FlagError;

/// Value recorded for a flag given without `=`.
pub const PRESENCE_VALUE: &str = "0";

const FALSE_WORDS: [&str; 3] = ["0", "false", "no"];
const TRUE_WORDS: [&str; 3] = ["1", "true", "yes"];

/// Flags and file operands from one command line.
///
/// Built once by [`classify`](crate::args::classify) and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagStore {
    flags: BTreeMap<String, String>,
    /// Index 0 is the program name; an empty entry means standard input.
    /// Kept as given by the OS so non-UTF-8 paths survive.
    files: Vec<OsString>,
}

impl FlagStore {
    pub(crate) fn new(program: OsString) -> Self {
        Self {
            flags: BTreeMap::new(),
            files: vec![program],
        }
    }

    /// Record a flag; a later definition replaces an earlier one.
    pub(crate) fn insert_flag(&mut self, name: &str, value: &str) {
        self.flags.insert(name.to_string(), value.to_string());
    }

    pub(crate) fn push_file(&mut self, file: OsString) {
        self.files.push(file);
    }

    pub fn flag_present(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// Names of all flags given, in name order.
    pub fn flag_names(&self) -> impl Iterator<Item = &str> {
        self.flags.keys().map(String::as_str)
    }

    /// Raw value of a flag.
    pub fn string_value(&self, name: &str) -> Result<&str, FlagError> {
        self.flags
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| FlagError::Missing {
                flag: name.to_string(),
            })
    }

    /// Value of a flag as a signed integer.
    ///
    /// Surrounding whitespace is accepted; any other trailing text is not.
    pub fn int_value(&self, name: &str) -> Result<i64, FlagError> {
        self.parse_value(name, "integer")
    }

    /// Value of a flag as a double precision float.
    ///
    /// Only finite numbers are accepted: `nan`, `inf` and values that
    /// overflow to infinity are coercion errors.
    pub fn double_value(&self, name: &str) -> Result<f64, FlagError> {
        let value: f64 = self.parse_value(name, "double")?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(coercion(name, self.string_value(name)?, "double"))
        }
    }

    /// Value of a flag as a boolean: `0`/`false`/`no` or `1`/`true`/`yes`.
    pub fn bool_value(&self, name: &str) -> Result<bool, FlagError> {
        let raw = self.string_value(name)?;
        if FALSE_WORDS.contains(&raw) {
            Ok(false)
        } else if TRUE_WORDS.contains(&raw) {
            Ok(true)
        } else {
            Err(coercion(name, raw, "boolean"))
        }
    }

    fn parse_value<T: FromStr>(&self, name: &str, expected: &'static str) -> Result<T, FlagError> {
        let raw = self.string_value(name)?;
        raw.trim()
            .parse()
            .map_err(|_| coercion(name, raw, expected))
    }

    /// Number of file operands, not counting the program name.
    pub fn number_of_files(&self) -> usize {
        self.files.len() - 1
    }

    /// All file entries, program name first.
    pub fn files(&self) -> &[OsString] {
        &self.files
    }

    /// The `i`-th file entry; `0` is the program name.
    pub fn file(&self, i: usize) -> Option<&OsStr> {
        self.files.get(i).map(OsString::as_os_str)
    }

    pub fn program_name(&self) -> &OsStr {
        &self.files[0]
    }
}

fn coercion(flag: &str, value: &str, expected: &'static str) -> FlagError {
    FlagError::Coercion {
        flag: flag.to_string(),
        value: value.to_string(),
        expected,
    }
}
