//! App Core for SkyCast.
//!
//! Composition root wiring the persistent store, the history subsystem, and
//! the weather client together.

use std::fs;
use std::path::Path;

use crate::managers::history_repository::HistoryRepository;
use crate::managers::history_view_model::HistoryViewModel;
use crate::platform;
use crate::storage::{KeyValueStore, MemoryStore, SqliteStore, StoreAdapter};

#[cfg(feature = "network")]
use crate::services::config::WeatherApiConfig;
#[cfg(feature = "network")]
use crate::services::weather_api::WeatherApiService;
#[cfg(feature = "network")]
use crate::types::errors::WeatherError;
#[cfg(feature = "network")]
use crate::types::weather::WeatherSnapshot;

/// Central application struct holding the history view-model and, with the
/// `network` feature, the weather API client.
pub struct App {
    pub history: HistoryViewModel,
    #[cfg(feature = "network")]
    pub weather: WeatherApiService,
}

impl App {
    /// Creates a new App.
    ///
    /// If `db_path` is `None`, the SQLite store is opened under the
    /// platform-specific data directory. When the on-disk store cannot be
    /// opened, the app falls back to an in-memory store: everything keeps
    /// working, merely without cross-session memory.
    pub fn new(db_path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let store = Self::open_store(db_path);
        let repository = HistoryRepository::new(StoreAdapter::new(store));
        let history = HistoryViewModel::new(repository);

        #[cfg(feature = "network")]
        let weather = WeatherApiService::new(WeatherApiConfig::load())?;

        Ok(Self {
            history,
            #[cfg(feature = "network")]
            weather,
        })
    }

    fn open_store(db_path: Option<&Path>) -> Box<dyn KeyValueStore> {
        let path = match db_path {
            Some(p) => p.to_path_buf(),
            None => {
                let dir = platform::get_data_dir();
                let _ = fs::create_dir_all(&dir);
                dir.join("skycast.db")
            }
        };
        match SqliteStore::open(&path) {
            Ok(store) => Box::new(store),
            Err(e) => {
                eprintln!("[storage] falling back to in-memory store: {}", e);
                Box::new(MemoryStore::new())
            }
        }
    }

    /// Performs a full search: fetches current weather with a one-day
    /// forecast and records the result in the search history. A failed
    /// fetch surfaces the typed error and never touches the history lists.
    #[cfg(feature = "network")]
    pub async fn search(&mut self, query: &str) -> Result<WeatherSnapshot, WeatherError> {
        let snapshot = self.weather.forecast(query, 1).await?;
        self.history.add_to_history(
            &snapshot.location.name,
            &snapshot.location.country,
            &snapshot.location.region,
            Some(snapshot.clone()),
        );
        Ok(snapshot)
    }
}
