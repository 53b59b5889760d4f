//! Configuration management command
//!
//! Provides CLI interface to view and edit the persisted filter settings.

use crate::system_config::{self, full_key};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use pauseclick_core::settings::SettingKind;
use pauseclick_core::{MouseButton, MOUSE_BUTTONS, SETTINGS};
use std::path::Path;

/// List all configuration values
pub async fn run_list(settings: Option<&Path>) -> Result<()> {
    let config_path = system_config::resolve_path(settings)?;
    let config = system_config::load_from(&config_path)?;

    println!("{}", "Pause Click Configuration".bold());
    println!("{}: {}\n", "Location".dimmed(), config_path.display().dimmed());

    println!("{}", "[pause-click]".yellow());
    for decl in SETTINGS.iter() {
        let short = decl.key.trim_start_matches("pause-click-");
        let value = config
            .get(decl.key)
            .with_context(|| format!("Missing value for {}", decl.key))?;
        let hint = match decl.kind {
            SettingKind::Choice { .. } => MouseButton::from_code(&value.to_string())
                .map(|button| format!("({})", button.name()))
                .unwrap_or_default(),
            SettingKind::Integer { .. } => format!("({}ms)", value),
            SettingKind::Bool { .. } => String::new(),
        };
        println!("  {} = {} {}", short.cyan(), value, hint.dimmed());
    }

    println!("\n{}", "Valid Values:".bold());
    let buttons: Vec<String> = MOUSE_BUTTONS
        .iter()
        .map(|(button, code, _)| format!("{}={}", code, button.alias()))
        .collect();
    println!("  mouse-button: {}", buttons.join(", "));
    println!("  double-click: true, false");
    for decl in SETTINGS.iter() {
        if let SettingKind::Integer { min, max, .. } = decl.kind {
            println!("  {}: {}-{}", decl.key.trim_start_matches("pause-click-"), min, max);
        }
    }

    Ok(())
}

/// Get a single configuration value
pub async fn run_get(settings: Option<&Path>, key: &str) -> Result<()> {
    let config = system_config::load_from(&system_config::resolve_path(settings)?)?;

    let value = config.get(key).with_context(|| {
        format!(
            "Unknown config key: {}. Use 'pclick config list' to see available keys.",
            full_key(key)
        )
    })?;

    println!("{}", value);
    Ok(())
}

/// Set a configuration value
pub async fn run_set(settings: Option<&Path>, key: &str, value: &str) -> Result<()> {
    let config_path = system_config::resolve_path(settings)?;
    let mut config = system_config::load_from(&config_path)?;

    config
        .set(key, value)
        .with_context(|| format!("Invalid value for {}", full_key(key)))?;

    // Validate before saving
    config.validate().context("Invalid configuration value")?;

    system_config::save_to(&config_path, &config)?;

    let stored = config.get(key).map(|v| v.to_string()).unwrap_or_default();
    println!("{} {} = {}", "✓".green(), full_key(key).cyan(), stored);

    Ok(())
}

/// Show the config file path and optionally create it
pub async fn run_path(settings: Option<&Path>, create: bool) -> Result<()> {
    let config_path = system_config::resolve_path(settings)?;

    if create && system_config::init_if_missing(&config_path)? {
        println!("{} Created config file at: {}", "✓".green(), config_path.display());
    } else if config_path.exists() {
        println!("{}", config_path.display());
    } else {
        println!("{}", config_path.display());
        println!("{}", "File does not exist. Use --create to create it.".yellow());
    }

    Ok(())
}

/// Show example configuration
pub async fn run_example() -> Result<()> {
    let example = system_config::example_config();
    println!("{}", example);
    Ok(())
}
