//! Video filter lifecycle
//!
//! The host opens the filter once per video output, feeds it every picture
//! and every mouse transition, and closes it when the output goes away.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::debounce::ClickDebouncer;
use crate::mouse::{MouseState, MouseStatus};
use crate::playback::PlaybackControl;
use crate::settings::{ConfigSource, SettingDecl, SETTINGS};
use crate::timer::TimerError;

/// Filter startup failures
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("cannot start pause click filter: {0}")]
    Timer(#[from] TimerError),
}

/// What the filter registers with the host
#[derive(Debug, Clone, Copy)]
pub struct ModuleInfo {
    pub description: &'static str,
    pub shortname: &'static str,
    pub capability: &'static str,
    pub settings: &'static [SettingDecl],
}

pub static MODULE_INFO: ModuleInfo = ModuleInfo {
    description: "Pause/Play video on mouse click",
    shortname: "Pause click",
    capability: "video filter2",
    settings: &SETTINGS,
};

/// Pause/play on mouse click
pub struct PauseClickFilter {
    debouncer: ClickDebouncer,
}

impl PauseClickFilter {
    /// Start the filter
    ///
    /// Fails if the timer cannot be created; the host must not use the
    /// filter then.
    pub fn open(
        config: Arc<dyn ConfigSource>,
        playback: Arc<dyn PlaybackControl>,
    ) -> Result<Self, FilterError> {
        let debouncer = ClickDebouncer::start(config, playback)?;
        info!("{} filter opened", MODULE_INFO.shortname);
        Ok(Self { debouncer })
    }

    /// Pictures go through untouched
    pub fn filter_picture<P>(&self, picture: P) -> P {
        picture
    }

    /// Mouse transition from `old` to `new`
    pub fn mouse(&self, old: &MouseState, new: &MouseState) -> MouseStatus {
        self.debouncer.on_mouse(old, new)
    }

    /// Whether a single click is waiting for its window to close
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Stop the filter; a pending toggle is dropped
    pub fn close(self) {
        self.debouncer.stop();
        info!("{} filter closed", MODULE_INFO.shortname);
    }
}
