use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::weather::WeatherSnapshot;

/// One remembered search.
///
/// Serialized with camelCase keys and an ISO-8601 `searchDate` so the
/// persisted lists stay compatible with the
/// `weather-app-search-history` / `weather-app-removed-items` layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    /// Opaque unique identifier, stable for the entry's lifetime.
    pub id: String,
    pub city_name: String,
    pub country: String,
    #[serde(default)]
    pub region: String,
    /// When the entry was created. A re-search replaces the entry rather
    /// than updating this field.
    pub search_date: DateTime<Utc>,
    /// Last-known weather payload at the moment of search. Opaque to the
    /// history repository; used only for inline temperature display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_snapshot: Option<WeatherSnapshot>,
}

impl SearchEntry {
    /// Creates a new entry with a freshly generated id and the current time.
    /// Display fields are stored trimmed.
    pub fn new(
        city_name: &str,
        country: &str,
        region: &str,
        weather_snapshot: Option<WeatherSnapshot>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            city_name: city_name.trim().to_string(),
            country: country.trim().to_string(),
            region: region.trim().to_string(),
            search_date: Utc::now(),
            weather_snapshot,
        }
    }

    /// Case-insensitive match on the city name.
    pub fn matches_city(&self, name: &str) -> bool {
        self.city_name.to_lowercase() == name.to_lowercase()
    }
}
