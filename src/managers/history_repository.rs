//! History Repository for SkyCast.
//!
//! Implements `HistoryRepositoryTrait` — the two bounded search-history
//! lists (active and recently-removed) held in the key-value store, with
//! dedup-by-city, capacity, and move-on-remove/restore semantics.

use serde_json::Value;

use crate::storage::adapter::{StorageFault, StoreAdapter};
use crate::types::history::SearchEntry;

/// Store key for the active search-history list.
pub const SEARCH_HISTORY_KEY: &str = "weather-app-search-history";
/// Store key for the recently-removed list.
pub const REMOVED_ITEMS_KEY: &str = "weather-app-removed-items";

/// Maximum number of active history entries.
pub const MAX_HISTORY_ITEMS: usize = 10;
/// Maximum number of recently-removed entries kept for undo.
pub const MAX_REMOVED_ITEMS: usize = 5;

/// Trait defining history repository operations.
///
/// None of these return errors: storage faults are absorbed by the store
/// adapter, and unknown ids are no-ops reported as `None`/`false`.
pub trait HistoryRepositoryTrait {
    fn list_active(&self) -> Vec<SearchEntry>;
    fn list_removed(&self) -> Vec<SearchEntry>;
    fn add(&mut self, entry: SearchEntry);
    fn remove_by_id(&mut self, id: &str) -> Option<SearchEntry>;
    fn restore_by_id(&mut self, id: &str) -> bool;
    fn clear_active(&mut self);
    fn clear_removed(&mut self);
}

/// History repository backed by an injected store adapter.
///
/// The repository is the sole mutator of the two list keys. It holds no
/// in-memory copy of the lists: every operation re-reads from the store, so
/// state after a failed write always reflects the last successful one.
pub struct HistoryRepository {
    store: StoreAdapter,
}

impl HistoryRepository {
    /// Creates a new `HistoryRepository` over the provided store adapter.
    pub fn new(store: StoreAdapter) -> Self {
        Self { store }
    }

    /// Reads and deserializes a stored list. A record that fails to parse is
    /// dropped (and reported through the storage hook) rather than failing
    /// the whole list load.
    fn read_list(&self, key: &str) -> Vec<SearchEntry> {
        let raw: Vec<Value> = self.store.get(key, Vec::new());
        let mut entries = Vec::with_capacity(raw.len());
        for value in raw {
            match serde_json::from_value(value) {
                Ok(entry) => entries.push(entry),
                Err(e) => self
                    .store
                    .report(key, StorageFault::Malformed(e.to_string())),
            }
        }
        entries
    }
}

impl HistoryRepositoryTrait for HistoryRepository {
    fn list_active(&self) -> Vec<SearchEntry> {
        self.read_list(SEARCH_HISTORY_KEY)
    }

    fn list_removed(&self) -> Vec<SearchEntry> {
        self.read_list(REMOVED_ITEMS_KEY)
    }

    /// Prepends `entry` to the active list, first dropping any existing
    /// entry for the same city (case-insensitive, regardless of id), then
    /// truncating to capacity. An entry with an empty trimmed city name is
    /// silently ignored. The removed list is not touched.
    fn add(&mut self, entry: SearchEntry) {
        if entry.city_name.trim().is_empty() {
            return;
        }
        let mut entries = self.list_active();
        entries.retain(|e| !e.matches_city(&entry.city_name));
        entries.insert(0, entry);
        entries.truncate(MAX_HISTORY_ITEMS);
        self.store.set(SEARCH_HISTORY_KEY, &entries);
    }

    /// Moves the entry with `id` from the active list to the head of the
    /// removed list (truncated to its own capacity) and returns it.
    /// An unknown id is a no-op returning `None`.
    fn remove_by_id(&mut self, id: &str) -> Option<SearchEntry> {
        let mut entries = self.list_active();
        let index = entries.iter().position(|e| e.id == id)?;
        let removed = entries.remove(index);
        self.store.set(SEARCH_HISTORY_KEY, &entries);

        let mut removed_items = self.list_removed();
        removed_items.insert(0, removed.clone());
        removed_items.truncate(MAX_REMOVED_ITEMS);
        self.store.set(REMOVED_ITEMS_KEY, &removed_items);

        Some(removed)
    }

    /// Moves the entry with `id` from the removed list back into the active
    /// list via the same logic as `add` — so a restore can itself displace a
    /// same-city entry or be truncated away if the active list is full of
    /// newer distinct cities. An unknown id is a no-op returning `false`.
    fn restore_by_id(&mut self, id: &str) -> bool {
        let mut removed_items = self.list_removed();
        let Some(index) = removed_items.iter().position(|e| e.id == id) else {
            return false;
        };
        let entry = removed_items.remove(index);
        self.store.set(REMOVED_ITEMS_KEY, &removed_items);
        self.add(entry);
        true
    }

    /// Deletes the active list key entirely. The removed list is untouched.
    fn clear_active(&mut self) {
        self.store.remove(SEARCH_HISTORY_KEY);
    }

    /// Deletes the removed list key entirely. The active list is untouched.
    fn clear_removed(&mut self) {
        self.store.remove(REMOVED_ITEMS_KEY);
    }
}

/// Case-insensitive exact-match lookup over an in-memory list snapshot.
/// Read-only helper; does not touch the store.
pub fn find_by_city_name<'a>(
    entries: &'a [SearchEntry],
    city_name: &str,
) -> Option<&'a SearchEntry> {
    entries.iter().find(|e| e.matches_city(city_name))
}
