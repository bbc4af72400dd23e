//! SkyCast storage layer.
//!
//! Provides the flat key-value store the history subsystem persists into:
//! a raw backend interface ([`KeyValueStore`]), a SQLite-backed
//! implementation ([`SqliteStore`]), an in-memory fake for tests
//! ([`MemoryStore`]), and the fault-swallowing [`StoreAdapter`] the rest of
//! the app talks to.
//!
//! # Usage
//!
//! ```no_run
//! use skycast::storage::{SqliteStore, StoreAdapter};
//!
//! let store = SqliteStore::open("skycast.db").expect("failed to open store");
//! let adapter = StoreAdapter::new(Box::new(store));
//!
//! // Reads never fail: absent, malformed, or unreadable values yield the default.
//! let names: Vec<String> = adapter.get("recent-names", Vec::new());
//! ```

pub mod adapter;
pub mod kv;
pub mod memory;
pub mod sqlite;

pub use adapter::{StderrHook, StorageEventHook, StorageFault, StoreAdapter};
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
