// SkyCast weather API configuration
// Loaded from a JSON file at the platform-specific config path, with the
// WEATHER_API_KEY environment variable taking precedence over the file.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::platform;
use crate::types::weather::TemperatureUnit;

/// Configuration for the weather API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherApiConfig {
    pub api_key: String,
    pub base_url: String,
    pub units: TemperatureUnit,
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.weatherapi.com/v1".to_string(),
            units: TemperatureUnit::Celsius,
        }
    }
}

impl WeatherApiConfig {
    /// Loads configuration from `config.json` under the platform config
    /// directory, then applies the `WEATHER_API_KEY` environment override.
    /// A missing or malformed file falls back to defaults.
    pub fn load() -> Self {
        let path = platform::get_config_dir().join("config.json");
        let mut config = Self::load_from(&path);
        if let Ok(key) = env::var("WEATHER_API_KEY") {
            if !key.trim().is_empty() {
                config.api_key = key;
            }
        }
        config
    }

    /// Loads configuration from an explicit file path.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
