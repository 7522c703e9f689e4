// crates/dnsfsd-convert-core/src/guard.rs
//
// Refuses to run against an interactive terminal: the converters are filters
// and would otherwise sit waiting for keyboard input.

use std::io::IsTerminal;

use crate::error::{ConvertError, Result};

pub fn ensure_piped(input: &impl IsTerminal) -> Result<()> {
    if input.is_terminal() {
        return Err(ConvertError::NoInput);
    }
    Ok(())
}
