// SkyCast services
// Services wrap external collaborators: weather API configuration and the
// HTTP client for WeatherAPI.com.

pub mod config;

#[cfg(feature = "network")]
pub mod weather_api;
