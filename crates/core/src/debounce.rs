//! Click debouncing
//!
//! Turns raw mouse transitions into a single pause/play toggle. With double
//! click suppression on, a qualifying click only arms the timer; a second
//! qualifying event inside the window disarms it, so a double click (for
//! example to go fullscreen) never toggles playback.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::button::MouseButton;
use crate::mouse::{has_pressed, MouseState, MouseStatus};
use crate::playback::{toggle_playback, PlaybackControl};
use crate::settings::{
    ConfigError, ConfigSource, DOUBLE_CLICK_DELAY_KEY, DOUBLE_CLICK_DELAY_RANGE,
    DOUBLE_CLICK_KEY, MOUSE_BUTTON_KEY,
};
use crate::timer::{Scheduler, Timer, TimerCallback, TimerError};

/// No toggle armed
const IDLE: u64 = 0;

/// State shared between the event thread and the timer callback
struct Shared {
    /// Generation of the toggle armed on the scheduler and not yet
    /// consumed, `IDLE` if none
    pending: AtomicU64,
    /// Last generation handed out
    generation: AtomicU64,
    playback: Arc<dyn PlaybackControl>,
}

impl Shared {
    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Timer callback for the arm tagged `generation`
    fn fire(&self, generation: u64) {
        // Whoever clears the slot owns the pending toggle. A cancel that got
        // here first, or a newer arm, leaves nothing to do.
        if generation == IDLE
            || self
                .pending
                .compare_exchange(generation, IDLE, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
        {
            trace!("Timer fired for stale arm {}", generation);
            return;
        }

        debug!("No second click within the window, toggling");
        toggle_playback(self.playback.as_ref());
    }
}

/// Single click / double click disambiguation
pub struct ClickDebouncer<S: Scheduler = Timer> {
    config: Arc<dyn ConfigSource>,
    scheduler: S,
    shared: Arc<Shared>,
}

impl ClickDebouncer<Timer> {
    /// Create a debouncer backed by a fresh `Timer`
    pub fn start(
        config: Arc<dyn ConfigSource>,
        playback: Arc<dyn PlaybackControl>,
    ) -> Result<Self, TimerError> {
        Self::with_scheduler(config, playback, |callback| Timer::create(callback))
    }

    /// Destroy the timer; no toggle fires after this returns
    pub fn stop(self) {
        self.scheduler.destroy();
    }
}

impl<S: Scheduler> ClickDebouncer<S> {
    /// Create a debouncer around a scheduler built by `make_scheduler`
    ///
    /// `make_scheduler` receives the callback the scheduler must run when
    /// its slot fires.
    pub fn with_scheduler<F, E>(
        config: Arc<dyn ConfigSource>,
        playback: Arc<dyn PlaybackControl>,
        make_scheduler: F,
    ) -> Result<Self, E>
    where
        F: FnOnce(TimerCallback) -> Result<S, E>,
    {
        let shared = Arc::new(Shared {
            pending: AtomicU64::new(IDLE),
            generation: AtomicU64::new(IDLE),
            playback,
        });

        let callback_shared = shared.clone();
        let scheduler =
            make_scheduler(Box::new(move |generation| callback_shared.fire(generation)))?;

        Ok(Self {
            config,
            scheduler,
            shared,
        })
    }

    /// Whether a toggle is armed and waiting for the window to close
    pub fn is_pending(&self) -> bool {
        self.shared.pending.load(Ordering::Acquire) != IDLE
    }

    /// Handle one mouse transition
    ///
    /// Always returns `MouseStatus::Consumed`: mouse input never travels
    /// past this filter, whether it triggered anything or not.
    pub fn on_mouse(&self, old: &MouseState, new: &MouseState) -> MouseStatus {
        if !new.has_any_input() {
            return MouseStatus::Consumed;
        }

        let button = match self.trigger_button() {
            Ok(button) => button,
            Err(err) => {
                warn!("Ignoring mouse event: {}", err);
                return MouseStatus::Consumed;
            }
        };

        if !qualifies(old, new, button) {
            trace!("Mouse event does not involve {}", button);
            return MouseStatus::Consumed;
        }

        let suppress_double_click = match self.config.boolean(DOUBLE_CLICK_KEY) {
            Ok(suppress) => suppress,
            Err(err) => {
                warn!("Ignoring mouse event: {}", err);
                return MouseStatus::Consumed;
            }
        };

        if !suppress_double_click {
            toggle_playback(self.shared.playback.as_ref());
            return MouseStatus::Consumed;
        }

        if self.shared.pending.swap(IDLE, Ordering::AcqRel) != IDLE {
            debug!("Double click, dropping pending toggle");
            if let Err(err) = self.scheduler.cancel() {
                debug!("Cancel not delivered: {}", err);
            }
            return MouseStatus::Consumed;
        }

        let delay = match self.double_click_delay() {
            Ok(delay) => delay,
            Err(err) => {
                warn!("Ignoring mouse event: {}", err);
                return MouseStatus::Consumed;
            }
        };

        let generation = self.shared.next_generation();
        debug!("Possible single click, toggling in {:?}", delay);
        self.shared.pending.store(generation, Ordering::Release);
        if let Err(err) = self.scheduler.schedule(delay, generation) {
            warn!("Dropping click, cannot arm timer: {}", err);
            let _ = self.shared.pending.compare_exchange(
                generation,
                IDLE,
                Ordering::AcqRel,
                Ordering::Acquire,
            );
        }

        MouseStatus::Consumed
    }

    fn trigger_button(&self) -> Result<MouseButton, ConfigError> {
        let code = self.config.string(MOUSE_BUTTON_KEY)?;
        MouseButton::from_code(&code)
    }

    fn double_click_delay(&self) -> Result<Duration, ConfigError> {
        let ms = self.config.integer(DOUBLE_CLICK_DELAY_KEY)?;
        if !DOUBLE_CLICK_DELAY_RANGE.contains(&ms) {
            return Err(ConfigError::OutOfRange {
                key: DOUBLE_CLICK_DELAY_KEY.to_string(),
                value: ms,
                min: *DOUBLE_CLICK_DELAY_RANGE.start(),
                max: *DOUBLE_CLICK_DELAY_RANGE.end(),
            });
        }
        Ok(Duration::from_millis(ms as u64))
    }
}

/// Press of the trigger button, or a double click signal when the trigger
/// is the left button (the host only reports double clicks for it)
fn qualifies(old: &MouseState, new: &MouseState, button: MouseButton) -> bool {
    has_pressed(old, new, button) || (new.double_click && button == MouseButton::Left)
}
