//! # kirana-store: Persistence Layer for Kirana Khata
//!
//! One JSON document on disk holds the entire shop state. This crate
//! loads it, saves it, resets it, writes the CSV report files, and
//! keeps the small app.toml configuration.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Kirana Khata Data Flow                         │
//! │                                                                     │
//! │  CLI command (sales add ...)                                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Store::load ──► StoreData ──► apply(Command) ──► Store::save       │
//! │       │                                                │            │
//! │       ▼                                                ▼            │
//! │  ~/.local/share/khata/store_data_v1.json    (whole-document write)  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`error`] - Persistence error types
//! - [`export`] - CSV encoding and report file writing
//! - [`config`] - app.toml (active language)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kirana_store::Store;
//!
//! let store = Store::open_default()?;
//! let mut data = store.load();
//! // ... apply ledger commands ...
//! store.save(&data)?;
//! # Ok::<(), kirana_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod export;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::AppConfig;
pub use error::{StoreError, StoreResult};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use kirana_core::types::StoreData;

/// File name of the persisted document (the single fixed storage key).
pub const STORE_FILE: &str = "store_data_v1.json";

// =============================================================================
// Store
// =============================================================================

/// Handle to the persisted shop document.
///
/// The whole [`StoreData`] aggregate is the unit of persistence:
/// every save rewrites the file, every load reads all of it. There is
/// no partial persistence, no migration, no multi-process conflict
/// handling.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Opens the store at the platform data directory
    /// (e.g. `~/.local/share/khata/store_data_v1.json` on Linux).
    pub fn open_default() -> StoreResult<Self> {
        let dirs = directories::ProjectDirs::from("com", "kirana", "khata")
            .ok_or(StoreError::NoDataDir)?;
        Ok(Store {
            path: dirs.data_dir().join(STORE_FILE),
        })
    }

    /// Opens the store at an explicit file path (tests, `--data-file`).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    /// The document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document.
    ///
    /// Missing file and unparseable content both produce the empty
    /// default; corruption is logged but never surfaced as an error
    /// (the original front-end behaved the same way).
    pub fn load(&self) -> StoreData {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No store document yet, starting empty");
                return StoreData::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read store document, starting empty");
                return StoreData::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to parse store document, starting empty");
                StoreData::default()
            }
        }
    }

    /// Serializes and writes the whole document. Called after every
    /// ledger mutation.
    pub fn save(&self, data: &StoreData) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), "Store document saved");
        Ok(())
    }

    /// Deletes the document. The next load starts from the empty
    /// default.
    pub fn reset(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
