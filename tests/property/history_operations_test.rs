//! Property-based tests for the history repository invariants.
//!
//! For arbitrary sequences of adds and removals the repository must keep the
//! active list bounded, deduplicated case-insensitively, and most-recent
//! first, and must treat remove/restore as moves between the two lists.

use proptest::prelude::*;
use skycast::managers::history_repository::{
    HistoryRepository, HistoryRepositoryTrait, MAX_HISTORY_ITEMS, MAX_REMOVED_ITEMS,
};
use skycast::storage::{MemoryStore, StoreAdapter};
use skycast::types::history::SearchEntry;

fn fresh_repo() -> HistoryRepository {
    HistoryRepository::new(StoreAdapter::new(Box::new(MemoryStore::new())))
}

/// Strategy for city names: non-empty, mixed-case ASCII words.
fn arb_city() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z]{0,11}"
}

fn arb_cities(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(arb_city(), 1..=max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // Adding any sequence of cities keeps the active list bounded, dedups
    // case-insensitively, and puts the last-added city at the head.
    #[test]
    fn active_list_stays_bounded_and_deduplicated(cities in arb_cities(30)) {
        let mut repo = fresh_repo();
        for city in &cities {
            repo.add(SearchEntry::new(city, "X", "", None));
        }

        let active = repo.list_active();
        prop_assert!(active.len() <= MAX_HISTORY_ITEMS);
        prop_assert_eq!(&active[0].city_name, cities.last().unwrap());

        let mut seen: Vec<String> = Vec::new();
        for entry in &active {
            let lowered = entry.city_name.to_lowercase();
            prop_assert!(
                !seen.contains(&lowered),
                "duplicate city in active list: {}",
                entry.city_name
            );
            seen.push(lowered);
        }
    }

    // Removing then restoring any entry returns it to the active list with
    // its data intact, and both operations behave as moves.
    #[test]
    fn remove_then_restore_round_trips(cities in arb_cities(5), pick in any::<prop::sample::Index>()) {
        let mut repo = fresh_repo();
        for city in &cities {
            repo.add(SearchEntry::new(city, "X", "", None));
        }

        let active = repo.list_active();
        let target = active[pick.index(active.len())].clone();

        let removed = repo.remove_by_id(&target.id);
        prop_assert_eq!(removed.as_ref(), Some(&target));
        prop_assert!(repo.list_active().iter().all(|e| e.id != target.id));
        prop_assert_eq!(&repo.list_removed()[0], &target);

        prop_assert!(repo.restore_by_id(&target.id));
        prop_assert!(repo.list_removed().iter().all(|e| e.id != target.id));
        let restored = repo.list_active();
        prop_assert_eq!(&restored[0], &target);
    }

    // The removed list never exceeds its cap no matter how many entries are
    // removed.
    #[test]
    fn removed_list_stays_bounded(cities in arb_cities(12)) {
        let mut repo = fresh_repo();
        for city in &cities {
            repo.add(SearchEntry::new(city, "X", "", None));
        }

        let ids: Vec<String> = repo.list_active().iter().map(|e| e.id.clone()).collect();
        for id in &ids {
            repo.remove_by_id(id);
        }

        prop_assert!(repo.list_active().is_empty());
        prop_assert!(repo.list_removed().len() <= MAX_REMOVED_ITEMS);
        prop_assert_eq!(
            repo.list_removed().len(),
            ids.len().min(MAX_REMOVED_ITEMS)
        );
    }

    // Unknown-id operations leave both lists exactly as they were.
    #[test]
    fn unknown_id_operations_change_nothing(cities in arb_cities(8), bogus in "[0-9a-f]{12}") {
        let mut repo = fresh_repo();
        for city in &cities {
            repo.add(SearchEntry::new(city, "X", "", None));
        }

        let active_before = repo.list_active();
        let removed_before = repo.list_removed();

        prop_assert!(repo.remove_by_id(&bogus).is_none());
        prop_assert!(!repo.restore_by_id(&bogus));

        prop_assert_eq!(repo.list_active(), active_before);
        prop_assert_eq!(repo.list_removed(), removed_before);
    }
}
