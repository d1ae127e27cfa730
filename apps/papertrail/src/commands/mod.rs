//! Subcommand implementations
//!
//! Each command writes its user-facing output to the given writer so the
//! commands can be exercised without a terminal.

pub mod add;
pub mod bibliography;
pub mod list;

use papertrail_store::CitationStore;

use crate::config::PaperTrailConfig;

/// Open store plus loaded configuration
pub struct Session {
    pub store: CitationStore,
    pub config: PaperTrailConfig,
}

impl Session {
    pub fn new(store: CitationStore, config: PaperTrailConfig) -> Self {
        Self { store, config }
    }

    /// Store backed by memory and default configuration
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(
            CitationStore::in_memory().expect("in-memory store"),
            PaperTrailConfig::default(),
        )
    }
}
