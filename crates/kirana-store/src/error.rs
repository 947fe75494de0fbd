//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  std::io::Error / serde_json::Error / toml errors                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← adds the failed-operation context       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  CliError (in app) ← printed to stderr                              │
//! │                                                                     │
//! │  NOTE: a corrupt document on LOAD is not an error; the store        │
//! │  logs a warning and falls back to the empty default.                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File read/write/delete failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the document or config failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Serializing the config file failed.
    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// No home/data directory could be determined on this platform.
    #[error("Could not determine a data directory for this platform")]
    NoDataDir,
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
