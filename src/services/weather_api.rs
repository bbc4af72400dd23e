//! Weather API client for SkyCast.
//!
//! Wraps the WeatherAPI.com HTTP API behind `reqwest`, translating HTTP
//! failures into typed [`WeatherError`] values. This is the external
//! collaborator of the history subsystem: a successful fetch feeds the
//! add-to-history path; a failed fetch surfaces the error and never touches
//! the history lists.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::services::config::WeatherApiConfig;
use crate::types::errors::WeatherError;
use crate::types::weather::{TemperatureUnit, WeatherSnapshot};

/// Error body returned by WeatherAPI.com on non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// HTTP client for WeatherAPI.com.
pub struct WeatherApiService {
    client: Client,
    config: WeatherApiConfig,
}

impl WeatherApiService {
    /// Creates a new client with a 10-second request timeout.
    ///
    /// # Errors
    /// Returns `WeatherError::InvalidQuery` when no API key is configured.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherError> {
        if config.api_key.is_empty() {
            return Err(WeatherError::InvalidQuery(
                "weather API key is not configured (set WEATHER_API_KEY)".to_string(),
            ));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| WeatherError::Network(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Configured temperature unit preference.
    pub fn units(&self) -> TemperatureUnit {
        self.config.units
    }

    /// Strips characters outside letters, whitespace, and `,.-` from a city
    /// query, and trims it.
    pub fn sanitize_city_name(name: &str) -> String {
        name.trim()
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace() || matches!(c, ',' | '.' | '-'))
            .collect()
    }

    /// Clamps a forecast window to the API's valid 1..=10 day range.
    pub fn clamp_days(days: u8) -> u8 {
        days.clamp(1, 10)
    }

    /// Fetches current weather for a city name.
    pub async fn current(&self, city_name: &str) -> Result<WeatherSnapshot, WeatherError> {
        let query = Self::validated_city(city_name)?;
        self.fetch("current.json", &[("q", query.as_str()), ("aqi", "no")])
            .await
    }

    /// Fetches current weather for a latitude/longitude pair.
    pub async fn current_by_coords(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherSnapshot, WeatherError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(WeatherError::InvalidQuery(format!(
                "invalid coordinates: {},{}",
                lat, lon
            )));
        }
        let query = format!("{},{}", lat, lon);
        self.fetch("current.json", &[("q", query.as_str()), ("aqi", "no")])
            .await
    }

    /// Fetches current weather plus a forecast of up to `days` days
    /// (clamped to 1..=10).
    pub async fn forecast(
        &self,
        city_name: &str,
        days: u8,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let query = Self::validated_city(city_name)?;
        let days = Self::clamp_days(days).to_string();
        self.fetch(
            "forecast.json",
            &[
                ("q", query.as_str()),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ],
        )
        .await
    }

    fn validated_city(name: &str) -> Result<String, WeatherError> {
        if name.trim().is_empty() {
            return Err(WeatherError::InvalidQuery("city name is required".to_string()));
        }
        let sanitized = Self::sanitize_city_name(name);
        if sanitized.is_empty() {
            return Err(WeatherError::InvalidQuery(format!(
                "invalid city name format: {}",
                name
            )));
        }
        Ok(sanitized)
    }

    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/{}", self.config.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<WeatherSnapshot>()
                .await
                .map_err(|e| WeatherError::Network(e.to_string()));
        }

        // The service wraps failures in {"error": {"code": ..., "message": ...}}.
        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.error.message)
            .unwrap_or_default();
        Err(WeatherError::from_status(status.as_u16(), &message))
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Network(err.to_string())
    }
}
