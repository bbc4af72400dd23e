use std::fmt;

// === StorageError ===

/// Errors raised by key-value store backends.
///
/// These never cross the store adapter boundary: the adapter absorbs them and
/// hands callers a default value or a failure flag instead.
#[derive(Debug)]
pub enum StorageError {
    /// The underlying store could not be opened or is disabled.
    Unavailable(String),
    /// The backend rejected the operation (I/O failure, quota exceeded).
    Backend(String),
    /// A stored value could not be serialized or deserialized.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Backend(msg) => write!(f, "Storage backend error: {}", msg),
            StorageError::Serialization(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// === WeatherError ===

/// Errors returned by the weather API client.
#[derive(Debug)]
pub enum WeatherError {
    /// Could not reach the weather service at all.
    Network(String),
    /// The service rejected the request as malformed (HTTP 400).
    BadRequest(String),
    /// The configured API key was rejected (HTTP 401).
    InvalidApiKey,
    /// API key quota exceeded or access forbidden (HTTP 403).
    AccessForbidden,
    /// No location matched the query (HTTP 404).
    LocationNotFound(String),
    /// Too many requests (HTTP 429).
    RateLimited,
    /// The weather service is temporarily unavailable (HTTP 500).
    ServerError,
    /// Any other non-success status.
    Api(u16, String),
    /// The query was rejected locally before any request was made.
    InvalidQuery(String),
}

impl WeatherError {
    /// Maps an HTTP status code (and the service's error message, if any)
    /// to a typed error.
    pub fn from_status(status: u16, message: &str) -> Self {
        match status {
            400 => {
                let msg = if message.is_empty() {
                    "Bad request. Please check your input.".to_string()
                } else {
                    message.to_string()
                };
                WeatherError::BadRequest(msg)
            }
            401 => WeatherError::InvalidApiKey,
            403 => WeatherError::AccessForbidden,
            404 => WeatherError::LocationNotFound(message.to_string()),
            429 => WeatherError::RateLimited,
            500 => WeatherError::ServerError,
            _ => WeatherError::Api(status, message.to_string()),
        }
    }
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherError::Network(msg) => {
                write!(f, "Network error. Please check your connection: {}", msg)
            }
            WeatherError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            WeatherError::InvalidApiKey => {
                write!(f, "Invalid API key. Please check your configuration.")
            }
            WeatherError::AccessForbidden => {
                write!(f, "API key quota exceeded or access forbidden.")
            }
            WeatherError::LocationNotFound(msg) => {
                if msg.is_empty() {
                    write!(f, "Location not found. Please check the spelling.")
                } else {
                    write!(f, "Location not found: {}", msg)
                }
            }
            WeatherError::RateLimited => {
                write!(f, "Too many requests. Please try again later.")
            }
            WeatherError::ServerError => {
                write!(f, "Weather service is temporarily unavailable.")
            }
            WeatherError::Api(status, msg) => {
                write!(f, "Weather API error (status {}): {}", status, msg)
            }
            WeatherError::InvalidQuery(msg) => write!(f, "Invalid query: {}", msg),
        }
    }
}

impl std::error::Error for WeatherError {}
