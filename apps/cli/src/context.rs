//! # Command Context
//!
//! Everything a view needs: the store handle, the active language and
//! "today". Built once in main and passed by reference to every
//! command (the original passed the data blob and an update callback
//! into each page the same way).

use chrono::NaiveDate;

use kirana_core::i18n::{translate, Language};
use kirana_store::Store;

/// Shared state for one CLI invocation.
pub struct Context {
    pub store: Store,
    pub lang: Language,
    /// Skip confirmation prompts (--yes).
    pub assume_yes: bool,
    /// Sampled once at startup; core code never reads the clock.
    pub today: NaiveDate,
}

impl Context {
    /// Translation lookup for the active language.
    pub fn t<'a>(&self, path: &'a str) -> &'a str {
        translate(self.lang, path)
    }
}
