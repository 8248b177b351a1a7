//! Key-value store capability
//!
//! The bridge keeps all of its state behind this interface. Operations on a
//! single key are atomic; read-modify-write sequences are not.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::Result;

pub trait KeyValueStore: Send + Sync {
    /// Raw text stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the text stored under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Store handle shared between accessors
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Volatile store backed by a `HashMap`. Clones share contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
