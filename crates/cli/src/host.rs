//! Stand-in video host
//!
//! Plays the part of the video output: owns the filter, tracks the mouse
//! state it last reported and forwards script commands as transitions.

use anyhow::{Context, Result};
use pauseclick_core::playback::{PlaybackControl, PlaybackRequest, PlaybackStatus, Player};
use pauseclick_core::{MouseButton, MouseState, MouseStatus, PauseClickFilter, SettingsStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::script::ScriptCommand;
use crate::system_config::full_key;

/// Player that announces every request on stdout
#[derive(Debug, Default)]
pub struct EchoPlayer {
    inner: Player,
}

impl EchoPlayer {
    pub fn toggles(&self) -> usize {
        self.inner.toggles()
    }
}

impl PlaybackControl for EchoPlayer {
    fn status(&self) -> PlaybackStatus {
        self.inner.status()
    }

    fn request(&self, request: PlaybackRequest) {
        println!("toggle: {}", request_name(request));
        self.inner.request(request);
    }
}

pub fn request_name(request: PlaybackRequest) -> &'static str {
    match request {
        PlaybackRequest::Play => "play",
        PlaybackRequest::Pause => "pause",
    }
}

pub fn status_name(status: PlaybackStatus) -> &'static str {
    match status {
        PlaybackStatus::Running => "running",
        PlaybackStatus::Paused => "paused",
        PlaybackStatus::Stopped => "stopped",
    }
}

/// Host session driving one filter instance
pub struct Host {
    filter: PauseClickFilter,
    settings: Arc<SettingsStore>,
    player: Arc<EchoPlayer>,
    mouse: MouseState,
}

impl Host {
    /// Open the filter against `settings`
    pub fn open(settings: Arc<SettingsStore>) -> Result<Self> {
        let player = Arc::new(EchoPlayer::default());
        let filter = PauseClickFilter::open(settings.clone(), player.clone())
            .context("Failed to open pause click filter")?;

        Ok(Self {
            filter,
            settings,
            player,
            mouse: MouseState::default(),
        })
    }

    /// Apply one script command
    pub async fn apply(&mut self, command: ScriptCommand) -> Result<()> {
        match command {
            ScriptCommand::Press(button) => self.send(self.mouse.press(button)),
            ScriptCommand::Release(button) => self.send(self.mouse.release(button)),
            ScriptCommand::Click(button) => {
                self.send(self.mouse.press(button));
                self.send(self.mouse.release(button));
            }
            ScriptCommand::Double => {
                self.send(self.mouse.press(MouseButton::Left).with_double_click(true));
                self.send(self.mouse.release(MouseButton::Left));
            }
            ScriptCommand::Wait(duration) => tokio::time::sleep(duration).await,
            ScriptCommand::Set { key, value } => {
                self.settings.set_str(&full_key(&key), &value)?;
            }
            ScriptCommand::Unset(key) => {
                self.settings.remove(&full_key(&key));
            }
            ScriptCommand::Status => {
                println!("status: {}", status_name(self.player.status()));
            }
        }
        Ok(())
    }

    /// Report a transition to the filter
    fn send(&mut self, new: MouseState) {
        let status = self.filter.mouse(&self.mouse, &new);
        if status == MouseStatus::Propagate {
            debug!("Filter forwarded mouse state {:?}", new);
        }
        // The double click signal belongs to a single event
        self.mouse = new.with_double_click(false);
    }

    /// Wait until no toggle is pending, at most `limit`
    pub async fn settle(&self, limit: Duration) {
        let start = tokio::time::Instant::now();
        while self.filter.is_pending() && start.elapsed() < limit {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Close the filter and return (toggles, final state)
    pub fn close(self) -> (usize, PlaybackStatus) {
        self.filter.close();
        (self.player.toggles(), self.player.status())
    }
}
