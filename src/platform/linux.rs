// SkyCast platform paths for Linux
// Config: ~/.config/skycast
// Data:   ~/.local/share/skycast

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for SkyCast on Linux.
/// Uses `$XDG_CONFIG_HOME/skycast` if set, otherwise `~/.config/skycast`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("skycast")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("skycast")
    }
}

/// Returns the data directory for SkyCast on Linux.
/// Uses `$XDG_DATA_HOME/skycast` if set, otherwise `~/.local/share/skycast`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("skycast")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("skycast")
    }
}
