//! The fixed command set: `add`, `median`, `rand`, `help`. Each command is
//! a thin routine over [`crate::console::ReplayConsole`]; the replay
//! engine in `console.rs`/`state.rs` is what makes them resumable.

pub mod add;
pub mod help;
pub mod median;
pub mod rand;

use crate::console::{Console, ReplayConsole};
use crate::error::CalcError;

/// Read a line, trim it, and parse it as a signed decimal integer.
///
/// A parse failure is fatal and propagates out of the interpreter. This is
/// deliberate, not an oversight: the user is trusted to supply well-formed
/// numeric input, and a malformed line leaves the partial snapshot in
/// storage so the same bad line is replayed (and fails again) on the next
/// run.
pub fn read_number<C: Console>(console: &mut ReplayConsole<C>) -> Result<i64, CalcError> {
    let line = console.read_line()?;
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map_err(|source| CalcError::MalformedNumber {
            text: trimmed.to_string(),
            source,
        })
}
