//! # CLI Error Type
//!
//! Unified error type for the `kirana` binary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CLI                            │
//! │                                                                     │
//! │  LedgerError (reducer)  ─┐                                          │
//! │  StoreError (disk)      ─┼──► CliError ──► "error: <message>"       │
//! │  resolver failures      ─┘                 on stderr, exit code 1   │
//! │                                                                     │
//! │  The rejected command was never applied, so nothing is saved.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use kirana_core::error::LedgerError;
use kirana_store::StoreError;

/// Errors surfaced to the terminal.
#[derive(Debug, Error)]
pub enum CliError {
    /// The ledger rejected the command.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Persistence failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Terminal interaction failed (confirmation prompt).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A name/id argument matched nothing.
    #[error("{kind} not found: {needle}")]
    NotFound { kind: &'static str, needle: String },

    /// A name/id argument matched more than one record.
    #[error("{kind} '{needle}' is ambiguous, matches: {candidates}")]
    Ambiguous {
        kind: &'static str,
        needle: String,
        candidates: String,
    },
}

/// Convenience type alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;
