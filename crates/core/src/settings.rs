//! Settings declarations and configuration sources
//!
//! The filter never caches its configuration: every mouse event reads the
//! values it needs through a `ConfigSource`, so a user changing a setting
//! while the video plays takes effect on the next click.

use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;

use parking_lot::RwLock;
use thiserror::Error;

/// Trigger button (config code, see `MouseButton::code`)
pub const MOUSE_BUTTON_KEY: &str = "pause-click-mouse-button";
/// Ignore double clicks
pub const DOUBLE_CLICK_KEY: &str = "pause-click-double-click";
/// Double click interval in milliseconds
pub const DOUBLE_CLICK_DELAY_KEY: &str = "pause-click-double-click-delay";

pub const MOUSE_BUTTON_DEFAULT: &str = "A";
pub const DOUBLE_CLICK_DEFAULT: bool = true;
pub const DOUBLE_CLICK_DELAY_DEFAULT: i64 = 300;
pub const DOUBLE_CLICK_DELAY_RANGE: RangeInclusive<i64> = 20..=5000;

/// Errors raised while reading configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("setting '{0}' is not set")]
    Missing(String),

    #[error("setting '{key}' is not a {expected}")]
    WrongType { key: String, expected: &'static str },

    #[error("setting '{key}' = {value} is outside {min}..={max}")]
    OutOfRange { key: String, value: i64, min: i64, max: i64 },

    #[error("unknown mouse button '{0}'")]
    InvalidButton(String),

    #[error("unknown setting '{0}'")]
    UnknownKey(String),
}

/// Kind and default of a declared setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingKind {
    /// One of a fixed list of string codes
    Choice { default: &'static str },
    Bool { default: bool },
    Integer { default: i64, min: i64, max: i64 },
}

/// A setting the filter declares to the host
#[derive(Debug, Clone)]
pub struct SettingDecl {
    pub key: &'static str,
    pub label: &'static str,
    pub help: &'static str,
    pub kind: SettingKind,
}

impl SettingDecl {
    /// Default value of this setting
    pub fn default_value(&self) -> SettingValue {
        match self.kind {
            SettingKind::Choice { default } => SettingValue::String(default.to_string()),
            SettingKind::Bool { default } => SettingValue::Bool(default),
            SettingKind::Integer { default, .. } => SettingValue::Integer(default),
        }
    }

    /// Check `value` against this declaration
    pub fn check(&self, value: &SettingValue) -> Result<(), ConfigError> {
        match (&self.kind, value) {
            (SettingKind::Choice { .. }, SettingValue::String(code)) => {
                crate::button::MouseButton::from_code(code).map(|_| ())
            }
            (SettingKind::Bool { .. }, SettingValue::Bool(_)) => Ok(()),
            (SettingKind::Integer { min, max, .. }, SettingValue::Integer(v)) => {
                if (*min..=*max).contains(v) {
                    Ok(())
                } else {
                    Err(ConfigError::OutOfRange {
                        key: self.key.to_string(),
                        value: *v,
                        min: *min,
                        max: *max,
                    })
                }
            }
            (kind, _) => Err(ConfigError::WrongType {
                key: self.key.to_string(),
                expected: kind_name(kind),
            }),
        }
    }
}

fn kind_name(kind: &SettingKind) -> &'static str {
    match kind {
        SettingKind::Choice { .. } => "string",
        SettingKind::Bool { .. } => "boolean",
        SettingKind::Integer { .. } => "integer",
    }
}

/// Settings declared by the filter
pub static SETTINGS: [SettingDecl; 3] = [
    SettingDecl {
        key: MOUSE_BUTTON_KEY,
        label: "Mouse button",
        help: "Defines the mouse button that will pause/play the video.",
        kind: SettingKind::Choice { default: MOUSE_BUTTON_DEFAULT },
    },
    SettingDecl {
        key: DOUBLE_CLICK_KEY,
        label: "Ignore double clicks",
        help: "Useful if you don't want the video to pause when double clicking \
               to fullscreen. Note that enabling this will delay pause/play \
               action by the double click interval, so the experience might not \
               be as snappy as with this option disabled.",
        kind: SettingKind::Bool { default: DOUBLE_CLICK_DEFAULT },
    },
    SettingDecl {
        key: DOUBLE_CLICK_DELAY_KEY,
        label: "Double click interval (milliseconds)",
        help: "Two clicks made during this time interval will be \
               treated as a double click and will be ignored.",
        kind: SettingKind::Integer {
            default: DOUBLE_CLICK_DELAY_DEFAULT,
            min: *DOUBLE_CLICK_DELAY_RANGE.start(),
            max: *DOUBLE_CLICK_DELAY_RANGE.end(),
        },
    },
];

/// Look up the declaration of `key`
pub fn declaration(key: &str) -> Option<&'static SettingDecl> {
    SETTINGS.iter().find(|decl| decl.key == key)
}

/// A typed configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    String(String),
    Bool(bool),
    Integer(i64),
}

impl SettingValue {
    /// Parse `raw` into the type `decl` expects
    pub fn parse_for(decl: &SettingDecl, raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        let value = match decl.kind {
            SettingKind::Choice { .. } => {
                let button: crate::button::MouseButton = raw.parse()?;
                SettingValue::String(button.code().to_string())
            }
            SettingKind::Bool { .. } => match raw {
                "true" | "1" | "yes" | "on" => SettingValue::Bool(true),
                "false" | "0" | "no" | "off" => SettingValue::Bool(false),
                _ => {
                    return Err(ConfigError::WrongType {
                        key: decl.key.to_string(),
                        expected: "boolean",
                    })
                }
            },
            SettingKind::Integer { .. } => {
                let v = raw.parse::<i64>().map_err(|_| ConfigError::WrongType {
                    key: decl.key.to_string(),
                    expected: "integer",
                })?;
                SettingValue::Integer(v)
            }
        };
        decl.check(&value)?;
        Ok(value)
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::String(s) => f.write_str(s),
            SettingValue::Bool(b) => write!(f, "{}", b),
            SettingValue::Integer(i) => write!(f, "{}", i),
        }
    }
}

/// Read access to the host's configuration
///
/// Read on the event path, possibly from a different thread than the one
/// that changes the values.
pub trait ConfigSource: Send + Sync {
    fn string(&self, key: &str) -> Result<String, ConfigError>;
    fn boolean(&self, key: &str) -> Result<bool, ConfigError>;
    fn integer(&self, key: &str) -> Result<i64, ConfigError>;
}

/// Thread-safe in-memory settings, seeded with declared defaults
#[derive(Debug)]
pub struct SettingsStore {
    values: RwLock<HashMap<String, SettingValue>>,
}

impl SettingsStore {
    /// Store holding the default of every declared setting
    pub fn with_defaults() -> Self {
        let values = SETTINGS
            .iter()
            .map(|decl| (decl.key.to_string(), decl.default_value()))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }

    /// Store holding nothing; every read fails with `Missing`
    pub fn empty() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Set a value, replacing any previous one
    ///
    /// Declared settings are type-checked here; range checks happen on read
    /// so a host writing an out-of-range value is still observable.
    pub fn set(&self, key: &str, value: SettingValue) -> Result<(), ConfigError> {
        let decl = declaration(key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        if let Err(err @ ConfigError::WrongType { .. }) = decl.check(&value) {
            return Err(err);
        }
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }

    /// Parse and set a value from its textual form
    pub fn set_str(&self, key: &str, raw: &str) -> Result<(), ConfigError> {
        let decl = declaration(key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        let value = SettingValue::parse_for(decl, raw)?;
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }

    /// Remove a value; subsequent reads fail with `Missing`
    pub fn remove(&self, key: &str) -> Option<SettingValue> {
        self.values.write().remove(key)
    }

    /// Current value of `key`, if any
    pub fn get(&self, key: &str) -> Option<SettingValue> {
        self.values.read().get(key).cloned()
    }

    fn lookup(&self, key: &str) -> Result<SettingValue, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::Missing(key.to_string()))
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ConfigSource for SettingsStore {
    fn string(&self, key: &str) -> Result<String, ConfigError> {
        match self.lookup(key)? {
            SettingValue::String(s) => Ok(s),
            _ => Err(ConfigError::WrongType {
                key: key.to_string(),
                expected: "string",
            }),
        }
    }

    fn boolean(&self, key: &str) -> Result<bool, ConfigError> {
        match self.lookup(key)? {
            SettingValue::Bool(b) => Ok(b),
            _ => Err(ConfigError::WrongType {
                key: key.to_string(),
                expected: "boolean",
            }),
        }
    }

    fn integer(&self, key: &str) -> Result<i64, ConfigError> {
        let value = self.lookup(key)?;
        if let Some(decl) = declaration(key) {
            decl.check(&value)?;
        }
        match value {
            SettingValue::Integer(i) => Ok(i),
            _ => Err(ConfigError::WrongType {
                key: key.to_string(),
                expected: "integer",
            }),
        }
    }
}
