//! Argument classifier — raw args → flags and file operands.

use std::ffi::OsString;

use crate::args::store::{FlagStore, PRESENCE_VALUE};

/// Classify a full argument vector, program name first.
///
/// - `-name=value` sets `name` to `value` (either side may be empty).
/// - `-name` sets `name` to `"0"` so it can act as a presence switch.
/// - `-` alone is a file operand meaning standard input, stored as `""`.
/// - Anything else is a file operand, kept verbatim (bytes included).
///
/// Flag tokens that are not valid UTF-8 are read lossily; file operands never
/// are. A repeated flag keeps the value of its last occurrence.
/// Classification never fails.
pub fn classify<I, S>(raw_args: I) -> FlagStore
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut iter = raw_args.into_iter().map(Into::<OsString>::into);
    let mut store = FlagStore::new(iter.next().unwrap_or_default());

    for arg in iter {
        if !arg.as_encoded_bytes().starts_with(b"-") {
            store.push_file(arg);
            continue;
        }

        let token = arg.to_string_lossy();
        match &token[1..] {
            "" => store.push_file(OsString::new()),
            definition => {
                let (name, value) = definition
                    .split_once('=')
                    .unwrap_or((definition, PRESENCE_VALUE));
                store.insert_flag(name, value);
            }
        }
    }

    store
}
