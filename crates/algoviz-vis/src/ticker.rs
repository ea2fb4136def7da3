//! Paced advancement of a shared playback controller.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::time::{sleep, Duration};

use crate::playback::{Playback, PlaybackState};

/// Drives a shared [`Playback`] forward while it is in the `Playing` state.
///
/// The ticker sleeps for the current speed's interval, then re-checks the
/// state under the write lock before advancing. Replacing the run or
/// pausing between ticks therefore never produces a stray step: whatever
/// the controller says at wake-up time wins.
pub struct Ticker {
    playback: Arc<RwLock<Playback>>,
    on_step: Option<Box<dyn Fn(usize) + Send + Sync>>,
}

impl Ticker {
    pub fn new(playback: Arc<RwLock<Playback>>) -> Self {
        Self {
            playback,
            on_step: None,
        }
    }

    /// Register a callback invoked with the new index after each tick that
    /// actually advanced.
    pub fn on_step(mut self, callback: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_step = Some(Box::new(callback));
        self
    }

    /// Run the tick loop forever. Intended to be spawned as a task.
    pub async fn run(self) {
        loop {
            let interval = {
                let playback = self.playback.read().await;
                Duration::from_millis(playback.speed().interval_ms())
            };
            sleep(interval).await;

            let advanced = {
                let mut playback = self.playback.write().await;
                if playback.state() == PlaybackState::Playing {
                    playback.tick();
                    Some(playback.index())
                } else {
                    None
                }
            };
            if let (Some(index), Some(callback)) = (advanced, self.on_step.as_ref()) {
                callback(index);
            }
        }
    }
}
