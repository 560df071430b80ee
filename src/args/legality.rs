//! Legality check — flags given vs. flags recognized.

use crate::args::store::FlagStore;

/// Every flag name in `store` that is not in `legal`, in name order.
pub fn unknown_flags<'a>(store: &'a FlagStore, legal: &[&str]) -> Vec<&'a str> {
    store
        .flag_names()
        .filter(|name| !legal.contains(name))
        .collect()
}

/// True iff every flag in `store` is in `legal`.
///
/// Each unrecognized flag is logged, not just the first. Never aborts; the
/// caller decides what an illegal flag set means and how to report it.
pub fn flags_are_legal(store: &FlagStore, legal: &[&str]) -> bool {
    let unknown = unknown_flags(store, legal);
    for name in &unknown {
        tracing::debug!(flag = %name, "unrecognized flag");
    }
    unknown.is_empty()
}
