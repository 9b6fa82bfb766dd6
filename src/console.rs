//! The raw console collaborator and the replay-mediating wrapper built on
//! top of it.

use std::io::{self, BufRead, Write};

use crate::error::{CalcError, ConsoleError};
use crate::state::SessionState;
use crate::storage::Storage;

/// Raw console capability: read one line, write one line plus a newline.
pub trait Console {
    fn read_line(&mut self) -> Result<String, ConsoleError>;
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;
}

/// The real stdin/stdout console.
pub struct StdConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        let mut lock = self.stdin.lock();
        let n = lock.read_line(&mut line)?;
        if n == 0 {
            // End-of-input has no defined handling here; an empty line is
            // the closest well-defined fallback rather than inventing a
            // new error variant for it.
            return Ok(String::new());
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        let mut lock = self.stdout.lock();
        writeln!(lock, "{line}")?;
        lock.flush()?;
        Ok(())
    }
}

/// Wraps a [`Console`] so that `read_line` first drains previously-logged
/// answers and `write_line` first skips previously-emitted output lines.
/// Every newly-recorded answer and newly-emitted line triggers a snapshot
/// save, so a crash at any point leaves storage consistent with exactly
/// what the user has observed so far.
pub struct ReplayConsole<'a, C: Console + ?Sized> {
    pub(crate) inner: &'a mut C,
    state: &'a mut SessionState,
    storage: &'a mut dyn Storage,
}

impl<'a, C: Console + ?Sized> ReplayConsole<'a, C> {
    pub fn new(
        inner: &'a mut C,
        state: &'a mut SessionState,
        storage: &'a mut dyn Storage,
    ) -> Self {
        Self {
            inner,
            state,
            storage,
        }
    }

    /// Replay a previously-logged answer if one is queued, otherwise read a
    /// live line, log it, and save.
    pub fn read_line(&mut self) -> Result<String, CalcError> {
        if let Some(line) = self.state.loaded_queries.pop_front() {
            return Ok(line);
        }
        let line = self.inner.read_line()?;
        self.state.queries_so_far.push_back(line.clone());
        self.state.save(self.storage)?;
        Ok(line)
    }

    /// Silently discard an already-emitted line if one is still pending,
    /// otherwise write it live, count it, and save.
    pub fn write_line(&mut self, line: &str) -> Result<(), CalcError> {
        if self.state.lines_to_skip > 0 {
            self.state.lines_to_skip -= 1;
            return Ok(());
        }
        self.inner.write_line(line)?;
        self.state.lines_so_far += 1;
        self.state.save(self.storage)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{MemStorage, ScriptedConsole};

    #[test]
    fn live_read_is_logged_and_saved() {
        let mut state = SessionState::default();
        let mut storage = MemStorage::default();
        let mut inner = ScriptedConsole::with_inputs(["2"]);
        let mut console = ReplayConsole::new(&mut inner, &mut state, &mut storage);
        let line = console.read_line().unwrap();
        assert_eq!(line, "2");
        assert_eq!(state.queries_so_far, vec!["2".to_string()]);
        // A save happened: reloading storage shows the recorded query.
        let reloaded = SessionState::load_or_default(&mut storage).unwrap();
        assert_eq!(reloaded.loaded_queries, vec!["2".to_string()]);
    }

    #[test]
    fn replayed_read_does_not_touch_inner_console_or_save() {
        let mut state = SessionState::default();
        state.loaded_queries.push_back("add".to_string());
        let mut storage = MemStorage::default();
        let mut inner = ScriptedConsole::with_inputs::<&str>([]);
        let mut console = ReplayConsole::new(&mut inner, &mut state, &mut storage);

        let line = console.read_line().unwrap();
        assert_eq!(line, "add");
        assert!(console.inner.reads_consumed() == 0);
        assert!(storage.read().unwrap().is_empty());
    }

    #[test]
    fn live_write_is_emitted_and_saved() {
        let mut state = SessionState::default();
        let mut storage = MemStorage::default();
        let mut inner = ScriptedConsole::with_inputs::<&str>([]);
        let mut console = ReplayConsole::new(&mut inner, &mut state, &mut storage);
        console.write_line("5").unwrap();
        assert_eq!(console.inner.outputs(), &["5".to_string()]);
        assert_eq!(state.lines_so_far, 1);
        let reloaded = SessionState::load_or_default(&mut storage).unwrap();
        assert_eq!(reloaded.lines_to_skip, 1);
    }

    #[test]
    fn skipped_write_is_suppressed() {
        let mut state = SessionState::default();
        state.lines_to_skip = 1;
        let mut storage = MemStorage::default();
        let mut inner = ScriptedConsole::with_inputs::<&str>([]);
        let mut console = ReplayConsole::new(&mut inner, &mut state, &mut storage);
        console.write_line("5").unwrap();
        assert!(console.inner.outputs().is_empty());
        assert_eq!(state.lines_to_skip, 0);
        assert_eq!(state.lines_so_far, 0);
    }
}
