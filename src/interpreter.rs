//! The top-level dispatcher over the fixed command set.
//!
//! Holds the session's [`SessionState`] and the raw [`Console`] for the
//! session's lifetime, wrapping both in a fresh [`ReplayConsole`] for each
//! command dispatch. After a command completes, `ClearCommand` resets the
//! per-command log so the next command starts a fresh replay window, with
//! an empty replay queue and zero skip counters.

use crate::commands;
use crate::console::{Console, ReplayConsole};
use crate::error::CalcError;
use crate::state::{SessionState, DEFAULT_SEED};
use crate::storage::Storage;

const UNKNOWN_COMMAND: &str = "Такой команды нет, используйте help для списка команд";

/// The interpreter loop over one session.
pub struct Interpreter<C: Console> {
    state: SessionState,
    console: C,
}

impl<C: Console> Interpreter<C> {
    pub fn new(console: C) -> Self {
        Self {
            state: SessionState::default(),
            console,
        }
    }

    /// Run until a clean `exit` (or a fatal error propagates). Bootstraps
    /// from `storage` and seeds `last_random_number` to 420 if this is the
    /// session's first run ever.
    pub fn run(&mut self, storage: &mut dyn Storage) -> Result<(), CalcError> {
        self.state = SessionState::load_or_default(storage)?;
        if self.state.last_random_number.is_none() {
            self.state.last_random_number = Some(DEFAULT_SEED);
        }

        loop {
            let command = {
                let mut wrapped = ReplayConsole::new(&mut self.console, &mut self.state, storage);
                wrapped.read_line()?
            };
            let command = command.trim();

            match command {
                "exit" => {
                    SessionState::clear_storage(storage)?;
                    return Ok(());
                }
                "add" => {
                    let mut wrapped = ReplayConsole::new(&mut self.console, &mut self.state, storage);
                    commands::add::run(&mut wrapped)?;
                }
                "median" => {
                    let mut wrapped = ReplayConsole::new(&mut self.console, &mut self.state, storage);
                    commands::median::run(&mut wrapped)?;
                }
                "help" => {
                    let mut wrapped = ReplayConsole::new(&mut self.console, &mut self.state, storage);
                    commands::help::run(&mut wrapped)?;
                }
                "rand" => {
                    let seed = self.state.last_random_number.unwrap_or(DEFAULT_SEED);
                    let next_seed = {
                        let mut wrapped =
                            ReplayConsole::new(&mut self.console, &mut self.state, storage);
                        commands::rand::run(&mut wrapped, seed)?
                    };
                    self.state.last_random_number = Some(next_seed);
                }
                _ => {
                    let mut wrapped = ReplayConsole::new(&mut self.console, &mut self.state, storage);
                    wrapped.write_line(UNKNOWN_COMMAND)?;
                }
            }

            self.state.clear_command(storage)?;
        }
    }
}
