use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::{ConfigError, Settings};

/// Reads settings from a JSON file and validates them.
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&data)?;
    settings.validate()?;
    info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Writes settings as pretty JSON, creating parent directories as needed.
pub fn save_settings(path: impl AsRef<Path>, settings: &Settings) -> Result<(), ConfigError> {
    let path = path.as_ref();
    settings.validate()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}
