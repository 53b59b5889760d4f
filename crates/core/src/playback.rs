//! Playback controller seam and the toggle action

use parking_lot::Mutex;
use tracing::debug;

/// Current state of the playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Running,
    Paused,
    Stopped,
}

/// Request sent to the playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackRequest {
    Play,
    Pause,
}

/// The host's playback controller
///
/// Called from both the event thread and the timer thread.
pub trait PlaybackControl: Send + Sync {
    fn status(&self) -> PlaybackStatus;
    fn request(&self, request: PlaybackRequest);
}

/// Pause if running, play otherwise
pub fn toggle_playback(playback: &dyn PlaybackControl) -> PlaybackRequest {
    let request = match playback.status() {
        PlaybackStatus::Running => PlaybackRequest::Pause,
        PlaybackStatus::Paused | PlaybackStatus::Stopped => PlaybackRequest::Play,
    };
    debug!("Toggling playback: {:?}", request);
    playback.request(request);
    request
}

/// In-memory playback controller
///
/// Stands in for a real playlist: counts the requests it receives and
/// remembers the last one.
#[derive(Debug)]
pub struct Player {
    inner: Mutex<PlayerState>,
}

#[derive(Debug)]
struct PlayerState {
    status: PlaybackStatus,
    toggles: usize,
    last: Option<PlaybackRequest>,
}

impl Player {
    /// Create a player in the given state
    pub fn new(status: PlaybackStatus) -> Self {
        Self {
            inner: Mutex::new(PlayerState {
                status,
                toggles: 0,
                last: None,
            }),
        }
    }

    /// Number of requests received so far
    pub fn toggles(&self) -> usize {
        self.inner.lock().toggles
    }

    /// Most recent request, if any
    pub fn last_request(&self) -> Option<PlaybackRequest> {
        self.inner.lock().last
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlaybackStatus::Running)
    }
}

impl PlaybackControl for Player {
    fn status(&self) -> PlaybackStatus {
        self.inner.lock().status
    }

    fn request(&self, request: PlaybackRequest) {
        let mut state = self.inner.lock();
        state.status = match request {
            PlaybackRequest::Play => PlaybackStatus::Running,
            PlaybackRequest::Pause => PlaybackStatus::Paused,
        };
        state.toggles = state.toggles.saturating_add(1);
        state.last = Some(request);
    }
}
