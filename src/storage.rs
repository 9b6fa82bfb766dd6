//! The raw storage collaborator: whole-blob read/write of an opaque byte
//! sequence, assumed to replace the blob atomically.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::StorageError;

/// Whole-blob storage capability. The entire session's durability rests on
/// `write` being an atomic replacement; a partial write is not a case this
/// crate handles.
pub trait Storage {
    /// The entire current blob; empty when never written or after a clear.
    fn read(&mut self) -> Result<Vec<u8>, StorageError>;
    /// Atomically replace the blob.
    fn write(&mut self, bytes: &[u8]) -> Result<(), StorageError>;
}

/// File-backed storage adapter. Writes go to a sibling temp file which is
/// then renamed over the target path, so a crash mid-write never leaves a
/// half-written blob in place of a good one.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut temp = self.path.clone();
        let file_name = temp
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        temp.set_file_name(format!("{file_name}.tmp"));
        temp
    }
}

impl Storage for FileStorage {
    fn read(&mut self) -> Result<Vec<u8>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        let temp = self.temp_path();
        fs::write(&temp, bytes).map_err(StorageError::Io)?;
        fs::rename(&temp, &self.path).map_err(StorageError::Io)?;
        Ok(())
    }
}
