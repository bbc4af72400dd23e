//! Property-based tests for SearchEntry serialization.
//!
//! The persisted representation uses camelCase keys and an ISO-8601
//! `searchDate`; round-tripping through it must preserve every field and
//! reconstruct the timestamp as the same instant.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use skycast::types::history::SearchEntry;

/// Strategy for timestamps within a plausible range (2000-01-01 onwards),
/// with sub-second precision.
fn arb_timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (946_684_800i64..4_102_444_800i64, 0u32..1_000_000_000u32).prop_filter_map(
        "valid timestamp",
        |(secs, nanos)| Utc.timestamp_opt(secs, nanos).single(),
    )
}

fn arb_entry() -> impl Strategy<Value = SearchEntry> {
    (
        "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
        "[A-Za-z][A-Za-z ]{0,15}[A-Za-z]",
        "[A-Za-z]{2,12}",
        proptest::option::of("[A-Za-z]{2,12}"),
        arb_timestamp(),
    )
        .prop_map(|(id, city_name, country, region, search_date)| SearchEntry {
            id,
            city_name,
            country,
            region: region.unwrap_or_default(),
            search_date,
            weather_snapshot: None,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn entry_round_trips_through_json(entry in arb_entry()) {
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: SearchEntry = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(&parsed, &entry);
        // The timestamp is the same instant, not merely a close one
        prop_assert_eq!(parsed.search_date, entry.search_date);
    }

    #[test]
    fn serialized_form_uses_the_persisted_key_layout(entry in arb_entry()) {
        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();

        prop_assert!(object.contains_key("cityName"));
        prop_assert!(object.contains_key("searchDate"));
        prop_assert!(object.contains_key("country"));
        prop_assert!(object.contains_key("region"));
        // Absent snapshots are omitted entirely
        prop_assert!(!object.contains_key("weatherSnapshot"));

        // searchDate is ISO-8601 text
        let date = object.get("searchDate").unwrap().as_str().unwrap();
        prop_assert!(date.parse::<DateTime<Utc>>().is_ok(), "not ISO-8601: {}", date);
    }
}
