use super::paths::{default_log_path, CONFIG_ENV, ROOT_ENV, SCRIPT_KEYS_ENV};
use super::{ConfigError, Settings};
use crate::menu::{parse_scripted_keys, MenuKey};
use std::path::{Path, PathBuf};

pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_with(|name| std::env::var(name).ok())
}

/// Resolves settings from the optional YAML file plus environment overrides.
pub fn load_settings_with<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match lookup(CONFIG_ENV).filter(|raw| !raw.trim().is_empty()) {
        Some(path) => Settings::from_path(Path::new(path.trim()))?,
        None => Settings::default(),
    };
    if let Some(root) = lookup(ROOT_ENV).filter(|raw| !raw.trim().is_empty()) {
        settings.root = PathBuf::from(root.trim());
    }
    if let Some(keys) = lookup(SCRIPT_KEYS_ENV) {
        settings.script_keys = Some(keys);
    }
    if settings.log_path.is_none() {
        settings.log_path = default_log_path(lookup("HOME").as_deref());
    }
    settings.validate()?;
    Ok(settings)
}

pub fn scripted_keys(settings: &Settings) -> Result<Option<Vec<MenuKey>>, ConfigError> {
    let Some(raw) = settings.script_keys.as_deref() else {
        return Ok(None);
    };
    parse_scripted_keys(raw)
        .map(Some)
        .map_err(|message| ConfigError::ScriptKeys {
            variable: SCRIPT_KEYS_ENV.to_string(),
            message,
        })
}
