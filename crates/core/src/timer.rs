//! One-shot timer used to delay the pause/play action
//!
//! The timer owns a single slot: arming it replaces whatever deadline was
//! pending, arming it with a zero delay disarms it. Every arm carries a
//! token that is handed back to the callback, so a callback can tell which
//! arm it belongs to. The callback runs on the timer's own thread,
//! concurrently with whatever thread arms it.

use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, RecvTimeoutError, Receiver, Sender};
use thiserror::Error;
use tracing::{trace, warn};

/// Timer failures
#[derive(Debug, Error)]
pub enum TimerError {
    #[error("failed to spawn timer thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("timer thread is gone")]
    Gone,
}

/// Callback run by a `Scheduler` when its slot fires, with the arm's token
pub type TimerCallback = Box<dyn FnMut(u64) + Send + 'static>;

/// Single-slot scheduling capability
///
/// Cancelling is best-effort: a callback that already started keeps
/// running, so callbacks must check the token against their own state.
pub trait Scheduler: Send {
    /// Arm the slot to fire after `delay` with `token`; a zero delay disarms it
    fn schedule(&self, delay: Duration, token: u64) -> Result<(), TimerError>;

    /// Disarm the slot
    fn cancel(&self) -> Result<(), TimerError> {
        self.schedule(Duration::ZERO, 0)
    }
}

enum Command {
    Arm { delay: Duration, token: u64 },
    Shutdown,
}

/// Thread-backed one-shot timer
pub struct Timer {
    commands: Sender<Command>,
    worker: Option<JoinHandle<()>>,
}

impl Timer {
    /// Spawn the timer thread; `callback` runs there each time the slot fires
    pub fn create<F>(callback: F) -> Result<Self, TimerError>
    where
        F: FnMut(u64) + Send + 'static,
    {
        let (commands, rx) = unbounded();
        let worker = thread::Builder::new()
            .name("pause-click-timer".to_string())
            .spawn(move || run(rx, callback))
            .map_err(TimerError::Spawn)?;

        Ok(Self {
            commands,
            worker: Some(worker),
        })
    }

    /// Stop the timer thread and wait for it
    ///
    /// Once this returns the callback will not run again.
    pub fn destroy(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = self.commands.send(Command::Shutdown);
            if worker.join().is_err() {
                warn!("Timer thread panicked");
            }
        }
    }
}

impl Scheduler for Timer {
    fn schedule(&self, delay: Duration, token: u64) -> Result<(), TimerError> {
        self.commands
            .send(Command::Arm { delay, token })
            .map_err(|_| TimerError::Gone)
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run<F: FnMut(u64)>(rx: Receiver<Command>, mut callback: F) {
    let mut armed: Option<(Instant, u64)> = None;

    loop {
        let command = match armed {
            Some((at, token)) => match rx.recv_deadline(at) {
                Ok(command) => command,
                Err(RecvTimeoutError::Timeout) => {
                    armed = None;
                    trace!("Timer fired for arm {}", token);
                    callback(token);
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            },
            None => match rx.recv() {
                Ok(command) => command,
                Err(_) => break,
            },
        };

        match command {
            Command::Arm { delay, .. } if delay.is_zero() => armed = None,
            Command::Arm { delay, token } => {
                // A deadline past what Instant can hold never comes
                armed = Instant::now().checked_add(delay).map(|at| (at, token));
                if armed.is_none() {
                    trace!("Delay {:?} never elapses, slot left disarmed", delay);
                }
            }
            Command::Shutdown => break,
        }
    }

    trace!("Timer thread exiting");
}
