//! Persisted filter settings
//!
//! The settings live in a TOML file under the user's config directory:
//! ```toml
//! [pause-click]
//! mouse-button = "A"
//! double-click = true
//! double-click-delay = 300
//! ```
//! Each key under `[pause-click]` maps to the host key
//! `pause-click-<key>`.

use anyhow::{Context, Result};
use pauseclick_core::settings::{
    declaration, SettingValue, DOUBLE_CLICK_DEFAULT, DOUBLE_CLICK_DELAY_DEFAULT,
    DOUBLE_CLICK_DELAY_KEY, DOUBLE_CLICK_KEY, MOUSE_BUTTON_DEFAULT, MOUSE_BUTTON_KEY,
};
use pauseclick_core::{SettingsStore, SETTINGS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const KEY_PREFIX: &str = "pause-click-";

/// Top-level layout of the settings file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemConfig {
    #[serde(rename = "pause-click", default)]
    pub pause_click: PauseClickSection,
}

/// `[pause-click]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct PauseClickSection {
    /// Trigger button code ("A" = left ... "G" = scroll right)
    pub mouse_button: String,
    /// Ignore double clicks
    pub double_click: bool,
    /// Double click interval in milliseconds (20-5000)
    pub double_click_delay: i64,
}

impl Default for PauseClickSection {
    fn default() -> Self {
        Self {
            mouse_button: MOUSE_BUTTON_DEFAULT.to_string(),
            double_click: DOUBLE_CLICK_DEFAULT,
            double_click_delay: DOUBLE_CLICK_DELAY_DEFAULT,
        }
    }
}

impl SystemConfig {
    /// Check every value against its declaration
    pub fn validate(&self) -> Result<()> {
        for decl in SETTINGS.iter() {
            let value = self
                .get(decl.key)
                .with_context(|| format!("Missing value for {}", decl.key))?;
            decl.check(&value)?;
        }
        Ok(())
    }

    /// Value stored for a host key (`pause-click-double-click`) or its
    /// short form (`double-click`)
    pub fn get(&self, key: &str) -> Option<SettingValue> {
        let section = &self.pause_click;
        match full_key(key).as_str() {
            MOUSE_BUTTON_KEY => Some(SettingValue::String(section.mouse_button.clone())),
            DOUBLE_CLICK_KEY => Some(SettingValue::Bool(section.double_click)),
            DOUBLE_CLICK_DELAY_KEY => Some(SettingValue::Integer(section.double_click_delay)),
            _ => None,
        }
    }

    /// Parse `raw` for `key` and store it
    pub fn set(&mut self, key: &str, raw: &str) -> Result<()> {
        let key = full_key(key);
        let decl = declaration(&key).with_context(|| {
            format!("Unknown config key: {}. Use 'pclick config list' to see available keys.", key)
        })?;

        match SettingValue::parse_for(decl, raw)? {
            SettingValue::String(code) => self.pause_click.mouse_button = code,
            SettingValue::Bool(b) => self.pause_click.double_click = b,
            SettingValue::Integer(i) => self.pause_click.double_click_delay = i,
        }
        Ok(())
    }

    /// Live settings store seeded from this file
    pub fn to_store(&self) -> Result<SettingsStore> {
        let store = SettingsStore::with_defaults();
        for decl in SETTINGS.iter() {
            if let Some(value) = self.get(decl.key) {
                store.set(decl.key, value)?;
            }
        }
        Ok(store)
    }
}

/// Expand a short key to the host key
pub fn full_key(key: &str) -> String {
    if key.starts_with(KEY_PREFIX) {
        key.to_string()
    } else {
        format!("{}{}", KEY_PREFIX, key)
    }
}

/// Default location of the settings file
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pause-click").join("config.toml"))
}

/// Settings file to use: `explicit` when given, the default location otherwise
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => config_file_path().context("Could not determine config file path"),
    }
}

/// Load settings from `path`; a missing file yields the defaults
pub fn load_from(path: &Path) -> Result<SystemConfig> {
    if !path.exists() {
        tracing::debug!("No settings file at {}, using defaults", path.display());
        return Ok(SystemConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: SystemConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid settings in {}", path.display()))?;
    Ok(config)
}

/// Write settings to `path`, creating parent directories
pub fn save_to(path: &Path, config: &SystemConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let serialized = toml::to_string_pretty(config).context("Failed to serialize settings")?;
    std::fs::write(path, serialized)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Create the settings file with defaults if it does not exist
pub fn init_if_missing(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save_to(path, &SystemConfig::default())?;
    Ok(true)
}

/// Commented example settings file
pub fn example_config() -> String {
    let mut out = String::from("# Pause click settings\n[pause-click]\n");
    for decl in SETTINGS.iter() {
        let short = decl.key.trim_start_matches(KEY_PREFIX);
        out.push_str(&format!("\n# {}\n# {}\n", decl.label, decl.help));
        let value = match decl.default_value() {
            SettingValue::String(s) => format!("\"{}\"", s),
            other => other.to_string(),
        };
        out.push_str(&format!("{} = {}\n", short, value));
    }
    out
}
