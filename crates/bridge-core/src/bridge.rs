//! Bridge storage container
//!
//! Wires every accessor to one shared store. Presentation code holds a
//! `BridgeStorage` and re-reads through it; nothing is cached here.

use std::sync::Arc;

use bridge_storage::{Database, MemoryStore, SharedStore};

use crate::config::Config;
use crate::pending::PendingTxLedger;
use crate::preferences::Preferences;
use crate::tokens::CustomTokenRegistry;
use crate::Result;

#[derive(Clone)]
pub struct BridgeStorage {
    config: Config,
    preferences: Preferences,
    pending_txs: PendingTxLedger,
    custom_tokens: CustomTokenRegistry,
}

impl BridgeStorage {
    /// Open the SQLite database at the configured path
    pub fn new(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;

        tracing::info!(path = %config.database_path.display(), "Opened bridge storage");

        Ok(Self::with_store(config, Arc::new(db)))
    }

    /// Volatile storage, lost when dropped
    pub fn in_memory(config: Config) -> Self {
        Self::with_store(config, Arc::new(MemoryStore::new()))
    }

    pub fn with_store(config: Config, store: SharedStore) -> Self {
        Self {
            preferences: Preferences::new(Arc::clone(&store), config.preferred_currency),
            pending_txs: PendingTxLedger::new(Arc::clone(&store)),
            custom_tokens: CustomTokenRegistry::new(store),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn pending_txs(&self) -> &PendingTxLedger {
        &self.pending_txs
    }

    pub fn custom_tokens(&self) -> &CustomTokenRegistry {
        &self.custom_tokens
    }
}
