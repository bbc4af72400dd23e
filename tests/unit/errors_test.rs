//! Unit tests for the error types: Display formatting and the mapping from
//! HTTP status codes to typed weather errors.

use skycast::types::errors::{StorageError, WeatherError};

#[test]
fn test_storage_error_display() {
    let err = StorageError::Unavailable("disabled".to_string());
    assert_eq!(err.to_string(), "Storage unavailable: disabled");

    let err = StorageError::Backend("quota exceeded".to_string());
    assert_eq!(err.to_string(), "Storage backend error: quota exceeded");

    let err = StorageError::Serialization("bad json".to_string());
    assert_eq!(err.to_string(), "Storage serialization error: bad json");
}

#[test]
fn test_weather_error_from_status_mapping() {
    assert!(matches!(
        WeatherError::from_status(400, "missing q"),
        WeatherError::BadRequest(_)
    ));
    assert!(matches!(
        WeatherError::from_status(401, ""),
        WeatherError::InvalidApiKey
    ));
    assert!(matches!(
        WeatherError::from_status(403, ""),
        WeatherError::AccessForbidden
    ));
    assert!(matches!(
        WeatherError::from_status(404, "No matching location found."),
        WeatherError::LocationNotFound(_)
    ));
    assert!(matches!(
        WeatherError::from_status(429, ""),
        WeatherError::RateLimited
    ));
    assert!(matches!(
        WeatherError::from_status(500, ""),
        WeatherError::ServerError
    ));
}

#[test]
fn test_weather_error_from_status_unknown_carries_status() {
    match WeatherError::from_status(503, "maintenance") {
        WeatherError::Api(status, message) => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("Expected Api variant, got {:?}", other),
    }
}

#[test]
fn test_bad_request_falls_back_to_generic_message() {
    match WeatherError::from_status(400, "") {
        WeatherError::BadRequest(msg) => {
            assert!(!msg.is_empty(), "400 with no body should get a default message");
        }
        other => panic!("Expected BadRequest, got {:?}", other),
    }
}

#[test]
fn test_weather_error_display_is_user_readable() {
    let err = WeatherError::from_status(404, "No matching location found.");
    let text = err.to_string();
    assert!(text.contains("Location not found"), "got: {}", text);

    let err = WeatherError::RateLimited;
    assert!(err.to_string().contains("Too many requests"));

    let err = WeatherError::InvalidQuery("city name is required".to_string());
    assert!(err.to_string().contains("city name is required"));
}

#[test]
fn test_errors_implement_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&StorageError::Backend("x".to_string()));
    assert_error(&WeatherError::ServerError);
}
