//! Error taxonomy and cause-chain formatting for CLI diagnostics.
//!
//! Mirrors the shape of errors elsewhere in this lineage of CLI tooling:
//! one `thiserror` enum per failure domain, plus an `ErrorChain` wrapper
//! used to print a fatal error with its full cause chain before exit.

use std::fmt;

/// Failure to decode a persisted [`crate::state::SessionState`] blob.
///
/// Recovered locally by [`crate::state::SessionState::load_or_default`];
/// never propagates out of this crate.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("corrupt state: {0}")]
    CorruptState(String),
}

/// Failure reading or writing a line through the raw console collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure reading or writing the storage blob.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fatal errors that propagate out of the interpreter loop to `main`.
///
/// `MalformedNumber` is deliberately fatal: per the replay contract, a
/// `ReadNumber` parse failure is not recovered, it tears the interpreter
/// down with the partial snapshot left in storage.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("malformed number {text:?}: {source}")]
    MalformedNumber {
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("storage failure")]
    Storage(#[from] StorageError),
    #[error("console failure")]
    Console(#[from] ConsoleError),
}

/// A primary error message plus an ordered chain of underlying causes,
/// formatted for human-readable CLI output.
#[derive(Debug, Clone)]
pub struct ErrorChain {
    pub primary: String,
    pub causes: Vec<String>,
}

impl ErrorChain {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            causes: Vec::new(),
        }
    }

    pub fn caused_by(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    /// Build a chain from a [`CalcError`], walking `std::error::Error::source`.
    pub fn from_error(err: &CalcError) -> Self {
        let mut chain = ErrorChain::new(err.to_string());
        let mut cause = std::error::Error::source(err);
        while let Some(c) = cause {
            chain = chain.caused_by(c.to_string());
            cause = c.source();
        }
        chain
    }

    pub fn format_for_display(&self) -> String {
        let mut out = self.primary.clone();
        for cause in &self.causes {
            out.push_str("\n  caused by: ");
            out.push_str(cause);
        }
        out
    }
}

impl fmt::Display for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_for_display())
    }
}
