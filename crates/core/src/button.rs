//! Mouse buttons that can trigger pause/play
//!
//! Buttons are stored in the settings as a single character code
//! (`'A' + value`), so the table below is the only place that maps
//! between codes, display names and enumerators.

use std::fmt;
use std::str::FromStr;

use crate::settings::ConfigError;

/// A mouse button the host can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left = 0,
    Middle = 1,
    Right = 2,
    WheelUp = 3,
    WheelDown = 4,
    WheelLeft = 5,
    WheelRight = 6,
}

/// Button table: (button, config code, display name)
pub const MOUSE_BUTTONS: [(MouseButton, &str, &str); 7] = [
    (MouseButton::Left, "A", "Left Button"),
    (MouseButton::Middle, "B", "Middle Button"),
    (MouseButton::Right, "C", "Right Button"),
    (MouseButton::WheelUp, "D", "Scroll Up"),
    (MouseButton::WheelDown, "E", "Scroll Down"),
    (MouseButton::WheelLeft, "F", "Scroll Left"),
    (MouseButton::WheelRight, "G", "Scroll Right"),
];

impl MouseButton {
    /// Parse a stored config code
    ///
    /// Only the first character is significant, matching how the
    /// host stores list selections.
    pub fn from_code(code: &str) -> Result<Self, ConfigError> {
        let first = code
            .chars()
            .next()
            .ok_or_else(|| ConfigError::InvalidButton(code.to_string()))?;

        MOUSE_BUTTONS
            .iter()
            .find(|(_, c, _)| c.starts_with(first))
            .map(|(button, _, _)| *button)
            .ok_or_else(|| ConfigError::InvalidButton(code.to_string()))
    }

    /// Config code stored in the settings (`"A"` for the left button)
    pub fn code(self) -> &'static str {
        MOUSE_BUTTONS[self as usize].1
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        MOUSE_BUTTONS[self as usize].2
    }

    /// Bit of this button inside `MouseState::pressed`
    pub fn mask(self) -> u32 {
        1 << self as u32
    }

    /// Short alias used by scripts (`left`, `wheel-up`, ...)
    pub fn alias(self) -> &'static str {
        match self {
            MouseButton::Left => "left",
            MouseButton::Middle => "middle",
            MouseButton::Right => "right",
            MouseButton::WheelUp => "wheel-up",
            MouseButton::WheelDown => "wheel-down",
            MouseButton::WheelLeft => "wheel-left",
            MouseButton::WheelRight => "wheel-right",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MouseButton {
    type Err = ConfigError;

    /// Accepts a config code (`"C"`) or an alias (`"right"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some((button, _, _)) = MOUSE_BUTTONS
            .iter()
            .find(|(button, _, _)| button.alias() == lower)
        {
            return Ok(*button);
        }

        if s.trim().len() == 1 {
            return Self::from_code(s.trim());
        }

        Err(ConfigError::InvalidButton(s.to_string()))
    }
}
