//! In-memory key-value store.
//!
//! Used as the runtime fallback when the on-disk store cannot be opened, and
//! as the injectable fake in tests. State lives behind an `Arc<Mutex<_>>` so
//! a test can keep a cloned handle (to flip fault flags or inspect raw
//! values) while the store itself is owned by the adapter.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::kv::KeyValueStore;
use crate::types::errors::StorageError;

#[derive(Default)]
struct Inner {
    entries: HashMap<String, String>,
    fail_writes: bool,
    unavailable: bool,
}

/// Shared-state in-memory store with injectable fault flags.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail, simulating quota exhaustion.
    /// Reads keep working and reflect the last successful write.
    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.fail_writes = fail;
        }
    }

    /// Makes every operation fail, simulating disabled storage.
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.unavailable = unavailable;
        }
    }

    /// Raw stored value for a key, bypassing the fault flags.
    pub fn raw_value(&self, key: &str) -> Option<String> {
        self.inner
            .lock()
            .ok()
            .and_then(|inner| inner.entries.get(key).cloned())
    }

    /// Number of stored keys, bypassing the fault flags.
    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, StorageError> {
        self.inner
            .lock()
            .map_err(|_| StorageError::Backend("poisoned store lock".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.lock()?;
        if inner.unavailable {
            return Err(StorageError::Unavailable("storage disabled".to_string()));
        }
        Ok(inner.entries.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.lock()?;
        if inner.unavailable {
            return Err(StorageError::Unavailable("storage disabled".to_string()));
        }
        if inner.fail_writes {
            return Err(StorageError::Backend("quota exceeded".to_string()));
        }
        inner.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_raw(&mut self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.lock()?;
        if inner.unavailable {
            return Err(StorageError::Unavailable("storage disabled".to_string()));
        }
        inner.entries.remove(key);
        Ok(())
    }
}
