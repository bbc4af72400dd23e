//! History View-Model for SkyCast.
//!
//! The UI-facing stateful façade over the history repository: holds the two
//! observable list snapshots and re-reads them after every mutation so the
//! render layer never sees stale lists. History persistence is non-critical
//! to the search flow — nothing here ever surfaces an error to the caller.

use crate::managers::history_repository::{
    find_by_city_name, HistoryRepository, HistoryRepositoryTrait,
};
use crate::types::history::SearchEntry;
use crate::types::weather::WeatherSnapshot;

/// Stateful façade consumed by the render layer.
pub struct HistoryViewModel {
    repository: HistoryRepository,
    search_history: Vec<SearchEntry>,
    removed_items: Vec<SearchEntry>,
}

impl HistoryViewModel {
    /// Creates the view-model, loading both lists from the repository once.
    pub fn new(repository: HistoryRepository) -> Self {
        let search_history = repository.list_active();
        let removed_items = repository.list_removed();
        Self {
            repository,
            search_history,
            removed_items,
        }
    }

    /// Current active-history snapshot, most recent first.
    pub fn search_history(&self) -> &[SearchEntry] {
        &self.search_history
    }

    /// Current recently-removed snapshot, most recent first.
    pub fn removed_items(&self) -> &[SearchEntry] {
        &self.removed_items
    }

    /// Records a search. An empty trimmed city name is silently dropped.
    /// The removed list is untouched, so only the active snapshot is re-read.
    pub fn add_to_history(
        &mut self,
        city_name: &str,
        country: &str,
        region: &str,
        weather_snapshot: Option<WeatherSnapshot>,
    ) {
        if city_name.trim().is_empty() {
            return;
        }
        let entry = SearchEntry::new(city_name, country, region, weather_snapshot);
        self.repository.add(entry);
        self.search_history = self.repository.list_active();
    }

    /// Removes an entry by id, moving it to the removed list. Returns
    /// whether anything changed.
    pub fn remove_from_history(&mut self, id: &str) -> bool {
        if self.repository.remove_by_id(id).is_some() {
            self.refresh();
            true
        } else {
            false
        }
    }

    /// Restores a previously removed entry by id. Returns whether anything
    /// changed.
    pub fn restore_item(&mut self, id: &str) -> bool {
        if self.repository.restore_by_id(id) {
            self.refresh();
            true
        } else {
            false
        }
    }

    /// Clears both lists, in the store and in the observable state.
    pub fn clear_history(&mut self) {
        self.repository.clear_active();
        self.repository.clear_removed();
        self.search_history.clear();
        self.removed_items.clear();
    }

    /// Case-insensitive lookup against the in-memory active snapshot.
    /// Does not touch the store.
    pub fn get_history_item(&self, city_name: &str) -> Option<&SearchEntry> {
        find_by_city_name(&self.search_history, city_name)
    }

    fn refresh(&mut self) {
        self.search_history = self.repository.list_active();
        self.removed_items = self.repository.list_removed();
    }
}
