//! The durable session record.
//!
//! `SessionState` is the sole persisted object. It tracks, for the
//! in-flight command, which input lines have already been consumed and
//! how many output lines have already been emitted, so that a restarted
//! process can replay exactly up to the point a crash interrupted it.
//!
//! ## On-disk lifecycle
//!
//! - [`SessionState::load_or_default`] reads the blob and reinterprets the
//!   previous run's "consumed so far" counters as this run's "replay
//!   window" (see the load transform rationale below).
//! - [`SessionState::save`] is called after every live read and every live
//!   write by [`crate::console::ReplayConsole`] — this implementation must
//!   not batch saves, or the replay guarantee breaks.
//! - [`SessionState::clear_command`] resets the per-command log once a
//!   command completes, so `loaded_queries`/`queries_so_far` are empty and
//!   `lines_to_skip`/`lines_so_far` are zero going into the next command.
//! - [`SessionState::clear_storage`] wipes the blob on clean `exit`.

use std::collections::VecDeque;

use crate::codec;
use crate::error::StorageError;
use crate::storage::Storage;

/// The seed value used the first time a session ever runs `rand`.
pub const DEFAULT_SEED: i64 = 420;

/// The durable snapshot of session progress.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    /// Inputs recorded during the in-flight command before the crash.
    /// Drained from the front during replay.
    pub loaded_queries: VecDeque<String>,
    /// Inputs accumulated during the in-flight command in this run.
    pub queries_so_far: VecDeque<String>,
    /// Output lines still to be silently discarded before live output resumes.
    pub lines_to_skip: u32,
    /// Output lines emitted during the in-flight command in this run.
    pub lines_so_far: u32,
    /// Park–Miller LCG seed; absent until the first `rand` ever runs.
    pub last_random_number: Option<i64>,
}

impl SessionState {
    /// Read the blob and build the state the next run should start from.
    ///
    /// An empty or undecodable blob yields a fresh state with empty queues,
    /// zero counters, and an absent seed — a decode failure is recovered
    /// here, it never propagates.
    pub fn load_or_default(storage: &mut dyn Storage) -> Result<Self, StorageError> {
        let bytes = storage.read()?;
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let decoded = match codec::decode(&bytes) {
            Ok(state) => state,
            Err(_) => return Ok(Self::default()),
        };

        Ok(Self {
            loaded_queries: decoded.queries_so_far.clone(),
            queries_so_far: decoded.queries_so_far,
            lines_to_skip: decoded.lines_so_far,
            lines_so_far: decoded.lines_so_far,
            last_random_number: decoded.last_random_number,
        })
    }

    /// Encode `self` and overwrite the blob.
    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        storage.write(&codec::encode(self))
    }

    /// Reset the per-command log, preserving `last_random_number`, and save.
    pub fn clear_command(&mut self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        self.loaded_queries.clear();
        self.queries_so_far.clear();
        self.lines_to_skip = 0;
        self.lines_so_far = 0;
        self.save(storage)
    }

    /// Overwrite the blob with zero bytes (the fresh-session marker).
    pub fn clear_storage(storage: &mut dyn Storage) -> Result<(), StorageError> {
        storage.write(&[])
    }
}
