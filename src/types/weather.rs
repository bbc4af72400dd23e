//! Weather payload types mirroring the WeatherAPI.com response subset the
//! app consumes, plus the unit-aware display helpers built on top of them.

use serde::{Deserialize, Serialize};

/// Temperature unit preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

/// A weather reading for one location, as returned by the weather API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: CurrentWeather,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Forecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub region: String,
    pub country: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
    #[serde(default)]
    pub localtime: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temp_c: f64,
    pub temp_f: f64,
    #[serde(default)]
    pub feelslike_c: f64,
    #[serde(default)]
    pub feelslike_f: f64,
    #[serde(default)]
    pub humidity: i32,
    #[serde(default)]
    pub wind_kph: f64,
    #[serde(default)]
    pub pressure_mb: f64,
    #[serde(default)]
    pub vis_km: f64,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub code: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub day: DaySummary,
    #[serde(default)]
    pub astro: Astro,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    #[serde(default)]
    pub maxtemp_f: f64,
    #[serde(default)]
    pub mintemp_f: f64,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Astro {
    #[serde(default)]
    pub sunrise: String,
    #[serde(default)]
    pub sunset: String,
}

impl WeatherSnapshot {
    /// Current temperature in the requested unit.
    pub fn current_temp(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.current.temp_c,
            TemperatureUnit::Fahrenheit => self.current.temp_f,
        }
    }

    /// Feels-like temperature in the requested unit.
    pub fn feels_like(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.current.feelslike_c,
            TemperatureUnit::Fahrenheit => self.current.feelslike_f,
        }
    }

    /// Min/max temperatures from the first forecast day. Falls back to the
    /// current temperature when no forecast data is present.
    pub fn min_max_temp(&self, unit: TemperatureUnit) -> (f64, f64) {
        match self.first_forecast_day() {
            Some(day) => match unit {
                TemperatureUnit::Celsius => (day.day.mintemp_c, day.day.maxtemp_c),
                TemperatureUnit::Fahrenheit => (day.day.mintemp_f, day.day.maxtemp_f),
            },
            None => {
                let current = self.current_temp(unit);
                (current, current)
            }
        }
    }

    /// Sunrise/sunset from the first forecast day, or `--:--` placeholders.
    pub fn sun_times(&self) -> (String, String) {
        match self.first_forecast_day() {
            Some(day) if !day.astro.sunrise.is_empty() => {
                (day.astro.sunrise.clone(), day.astro.sunset.clone())
            }
            _ => ("--:--".to_string(), "--:--".to_string()),
        }
    }

    /// Absolute URL for the current condition icon. The API returns
    /// protocol-relative paths like `//cdn.weatherapi.com/...`.
    pub fn icon_url(&self) -> String {
        let icon = &self.current.condition.icon;
        if icon.starts_with("http") {
            icon.clone()
        } else {
            format!("https:{}", icon)
        }
    }

    fn first_forecast_day(&self) -> Option<&ForecastDay> {
        self.forecast.as_ref()?.forecastday.first()
    }
}

/// Formats a temperature as a rounded value with a unit suffix, e.g. `17°C`.
pub fn format_temperature(temp: f64, unit: TemperatureUnit) -> String {
    match unit {
        TemperatureUnit::Celsius => format!("{}°C", temp.round() as i64),
        TemperatureUnit::Fahrenheit => format!("{}°F", temp.round() as i64),
    }
}

/// Formats a wind speed in km/h.
pub fn format_wind_speed(kph: f64) -> String {
    format!("{} km/h", kph.round() as i64)
}

/// Formats an atmospheric pressure in millibars.
pub fn format_pressure(mb: f64) -> String {
    format!("{} mb", mb.round() as i64)
}

/// Formats a visibility distance in kilometers.
pub fn format_visibility(km: f64) -> String {
    format!("{} km", km.round() as i64)
}
