//! In-memory test doubles for the [`crate::console::Console`] and
//! [`crate::storage::Storage`] capability interfaces, used throughout this
//! crate's `#[cfg(test)]` modules.

use std::collections::VecDeque;

use crate::console::Console;
use crate::error::{ConsoleError, StorageError};
use crate::storage::Storage;

/// A `Storage` backed by an in-memory byte buffer.
#[derive(Default)]
pub struct MemStorage {
    bytes: Vec<u8>,
}

impl MemStorage {
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl Storage for MemStorage {
    fn read(&mut self) -> Result<Vec<u8>, StorageError> {
        Ok(self.bytes.clone())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        self.bytes = bytes.to_vec();
        Ok(())
    }
}

/// A `Console` driven by a scripted queue of input lines, capturing every
/// line written to it for assertions.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    reads_consumed: usize,
    outputs: Vec<String>,
}

impl ScriptedConsole {
    pub fn with_inputs<S: Into<String>>(inputs: impl IntoIterator<Item = S>) -> Self {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            reads_consumed: 0,
            outputs: Vec::new(),
        }
    }

    pub fn reads_consumed(&self) -> usize {
        self.reads_consumed
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.reads_consumed += 1;
        Ok(self.inputs.pop_front().unwrap_or_default())
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.outputs.push(line.to_string());
        Ok(())
    }
}
