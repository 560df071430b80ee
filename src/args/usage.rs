//! Usage synopsis, generated from the flag registry.

use crate::args::registry::FlagDef;

/// Full usage text for `program`.
pub fn usage(program: &str, registry: &[FlagDef]) -> String {
    let mut text = format!("Usage: {} [flags] inputfile\n", program);
    text.push_str("   where inputfile is a file in mps or lp format (- reads standard input).\n");
    text.push_str("   Flags are 0 or more of the following, in any order:\n");
    for def in registry {
        for line in def.help {
            text.push_str("     ");
            text.push_str(line);
            text.push('\n');
        }
    }
    text
}
