//! Fault-swallowing store adapter.
//!
//! Wraps a raw [`KeyValueStore`] behind a never-raises interface: reads fall
//! back to a caller-supplied default, writes and removals report success with
//! a flag. Every absorbed fault is routed through a single injectable
//! [`StorageEventHook`] so tests can assert on them without changing the
//! external behavior.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::storage::kv::KeyValueStore;
use crate::types::errors::StorageError;

/// A fault absorbed by the store adapter (or a layer on top of it).
#[derive(Debug)]
pub enum StorageFault {
    ReadFailed(StorageError),
    WriteFailed(StorageError),
    RemoveFailed(StorageError),
    /// A stored value (or a single record within one) failed to parse.
    Malformed(String),
}

impl fmt::Display for StorageFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageFault::ReadFailed(err) => write!(f, "read failed: {}", err),
            StorageFault::WriteFailed(err) => write!(f, "write failed: {}", err),
            StorageFault::RemoveFailed(err) => write!(f, "remove failed: {}", err),
            StorageFault::Malformed(msg) => write!(f, "malformed value: {}", msg),
        }
    }
}

/// Observability hook receiving every fault the adapter absorbs.
pub trait StorageEventHook {
    fn on_fault(&self, key: &str, fault: &StorageFault);
}

/// Default hook: logs absorbed faults to stderr.
pub struct StderrHook;

impl StorageEventHook for StderrHook {
    fn on_fault(&self, key: &str, fault: &StorageFault) {
        eprintln!("[storage] {}: {}", key, fault);
    }
}

/// Safe wrapper over a raw key-value store. Never raises.
pub struct StoreAdapter {
    store: Box<dyn KeyValueStore>,
    hook: Box<dyn StorageEventHook>,
}

impl StoreAdapter {
    /// Creates an adapter with the default stderr hook.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_hook(store, Box::new(StderrHook))
    }

    /// Creates an adapter with a custom observability hook.
    pub fn with_hook(store: Box<dyn KeyValueStore>, hook: Box<dyn StorageEventHook>) -> Self {
        Self { store, hook }
    }

    /// Returns the deserialized value stored at `key`, or `default` if the
    /// key is absent, the value is malformed, or the store is unavailable.
    /// Every call re-reads from the store; there is no cache layer.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.store.get_raw(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    self.hook
                        .on_fault(key, &StorageFault::Malformed(e.to_string()));
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                self.hook.on_fault(key, &StorageFault::ReadFailed(e));
                default
            }
        }
    }

    /// Serializes and stores `value` at `key`. On any fault the prior stored
    /// state is left untouched and `false` is returned.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                self.hook.on_fault(
                    key,
                    &StorageFault::WriteFailed(StorageError::Serialization(e.to_string())),
                );
                return false;
            }
        };
        match self.store.set_raw(key, &raw) {
            Ok(()) => true,
            Err(e) => {
                self.hook.on_fault(key, &StorageFault::WriteFailed(e));
                false
            }
        }
    }

    /// Deletes `key`. Absence of the key is not an error.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.store.remove_raw(key) {
            Ok(()) => true,
            Err(e) => {
                self.hook.on_fault(key, &StorageFault::RemoveFailed(e));
                false
            }
        }
    }

    /// Reports a fault observed by a layer built on top of the adapter
    /// (e.g. a single unparseable record inside an otherwise valid list).
    pub fn report(&self, key: &str, fault: StorageFault) {
        self.hook.on_fault(key, &fault);
    }
}
