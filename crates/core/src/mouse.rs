//! Mouse state snapshots delivered by the host

use crate::button::MouseButton;

/// Snapshot of the mouse as seen by the video output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseState {
    /// Cursor position in picture coordinates
    pub x: i32,
    pub y: i32,
    /// Bitmask of pressed buttons (see `MouseButton::mask`)
    pub pressed: u32,
    /// Set by the host when this event completes a double click
    pub double_click: bool,
}

impl MouseState {
    /// Whether `button` is held in this snapshot
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.pressed & button.mask() != 0
    }

    /// Copy of this state with `button` held
    pub fn press(mut self, button: MouseButton) -> Self {
        self.pressed |= button.mask();
        self
    }

    /// Copy of this state with `button` released
    pub fn release(mut self, button: MouseButton) -> Self {
        self.pressed &= !button.mask();
        self
    }

    /// Copy of this state with the double click signal set or cleared
    pub fn with_double_click(mut self, double_click: bool) -> Self {
        self.double_click = double_click;
        self
    }

    /// Any button held or a double click signalled
    pub fn has_any_input(&self) -> bool {
        self.pressed != 0 || self.double_click
    }
}

/// `button` went from released in `old` to pressed in `new`
pub fn has_pressed(old: &MouseState, new: &MouseState, button: MouseButton) -> bool {
    !old.is_pressed(button) && new.is_pressed(button)
}

/// What the host should do with the mouse state after the filter saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseStatus {
    /// Forward the (possibly modified) state downstream
    Propagate,
    /// Do not propagate; the filter consumed or ignored the event
    Consumed,
}
