//! # App Configuration
//!
//! The small per-user configuration kept outside the shop document
//! (the original stored the UI language under its own storage key).
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                           │
//! │                                                                     │
//! │  1. Environment variable (highest)                                  │
//! │     KIRANA_LANG=ne                                                  │
//! │                                                                     │
//! │  2. TOML config file                                                │
//! │     ~/.config/khata/app.toml (Linux)                                │
//! │                                                                     │
//! │  3. Default values (lowest)                                         │
//! │     language = "en"                                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # app.toml
//! language = "ne"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use kirana_core::i18n::Language;

/// File name of the configuration document.
pub const CONFIG_FILE: &str = "app.toml";

// =============================================================================
// App Config
// =============================================================================

/// Per-user application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Active UI language.
    #[serde(default)]
    pub language: Language,
}

impl AppConfig {
    /// Loads configuration from file and environment.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (app.toml)
    /// 3. KIRANA_LANG environment variable
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                debug!(path = %path.display(), "Loading app config");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents).unwrap_or_else(|e| {
                    warn!(path = %path.display(), error = %e, "Unparseable app config, using defaults");
                    Self::default()
                });
            }
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads config or returns the default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load app config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file (after a language switch).
    pub fn save(&self, config_path: Option<PathBuf>) -> StoreResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(StoreError::NoDataDir)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;
        debug!(path = %path.display(), "App config saved");
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(lang) = std::env::var("KIRANA_LANG") {
            match lang.parse() {
                Ok(parsed) => {
                    debug!(lang = %lang, "Overriding language from environment");
                    self.language = parsed;
                }
                Err(_) => warn!(lang = %lang, "Unknown language in KIRANA_LANG, ignoring"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "kirana", "khata")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
