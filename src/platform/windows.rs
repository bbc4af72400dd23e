// SkyCast platform paths for Windows
// Config: %APPDATA%/SkyCast
// Data:   %APPDATA%/SkyCast

use std::env;
use std::path::PathBuf;

fn appdata_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata)
}

/// Returns the configuration directory for SkyCast on Windows.
/// `%APPDATA%/SkyCast`
pub fn get_config_dir() -> PathBuf {
    appdata_dir().join("SkyCast")
}

/// Returns the data directory for SkyCast on Windows.
/// `%APPDATA%/SkyCast`
pub fn get_data_dir() -> PathBuf {
    appdata_dir().join("SkyCast")
}
