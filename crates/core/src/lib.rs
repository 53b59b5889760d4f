//! Pause Click - pause/play playback on a mouse click
//!
//! This crate provides the filter logic a video host plugs in:
//! - Mouse button table and mouse state transitions
//! - Settings declarations and live configuration sources
//! - One-shot timer used to debounce single clicks
//! - Click debouncer that tells a single click from a double click
//! - Filter lifecycle wrapper (open, picture pass-through, mouse, close)

pub mod button;
pub mod mouse;
pub mod settings;
pub mod playback;
pub mod timer;
pub mod debounce;
pub mod filter;

// Re-exports
pub use button::{MouseButton, MOUSE_BUTTONS};
pub use mouse::{has_pressed, MouseState, MouseStatus};
pub use settings::{ConfigError, ConfigSource, SettingValue, SettingsStore, SETTINGS};
pub use playback::{toggle_playback, PlaybackControl, PlaybackRequest, PlaybackStatus, Player};
pub use timer::{Scheduler, Timer, TimerCallback, TimerError};
pub use debounce::ClickDebouncer;
pub use filter::{FilterError, ModuleInfo, PauseClickFilter, MODULE_INFO};
