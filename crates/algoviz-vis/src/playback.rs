//! Playback controls for stepping through a recorded algorithm run.

use algoviz_core::{AlgorithmRun, Snapshot};
use serde::{Deserialize, Serialize};

/// Animation speed, in abstract units the UI slider produces.
///
/// Values are clamped to `100..=1000`. Higher is faster: the delay between
/// automatic steps is `1100 - value` milliseconds, so the range maps to
/// 100ms (fastest) through 1000ms (slowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Speed(u64);

impl Speed {
    pub const MIN: u64 = 100;
    pub const MAX: u64 = 1000;

    /// Create a speed, clamping out-of-range values.
    pub fn new(value: u64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// The raw slider value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Milliseconds between automatic steps at this speed.
    pub fn interval_ms(&self) -> u64 {
        1100 - self.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(500)
    }
}

/// Current state of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No step has been revealed yet
    Idle,
    /// Steps advance automatically on each tick
    Playing,
    /// Advancement is suspended mid-run
    Paused,
    /// Every step has been revealed
    Complete,
}

/// Playback controller over one sealed [`AlgorithmRun`].
///
/// The index counts revealed steps: 0 is the run's input state and
/// `run.len()` is its terminal state. The controller never mutates the
/// run; replacing the input means installing a whole new run via
/// [`set_run`].
///
/// [`set_run`]: Playback::set_run
pub struct Playback {
    run: AlgorithmRun,
    index: usize,
    state: PlaybackState,
    speed: Speed,
}

impl Playback {
    /// Create a controller positioned at the start of `run`.
    pub fn new(run: AlgorithmRun) -> Self {
        Self {
            run,
            index: 0,
            state: PlaybackState::Idle,
            speed: Speed::default(),
        }
    }

    /// The run being played.
    pub fn run(&self) -> &AlgorithmRun {
        &self.run
    }

    /// Number of steps revealed so far.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total number of steps in the run.
    pub fn total(&self) -> usize {
        self.run.len()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// The state after the steps revealed so far.
    pub fn current_snapshot(&self) -> &Snapshot {
        self.run.snapshot_at(self.index)
    }

    /// The label of the most recently revealed step, if any.
    pub fn current_label(&self) -> Option<&str> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.run.steps().get(i))
            .map(|s| s.label.as_str())
    }

    /// Start automatic advancement.
    ///
    /// No-op while already playing or complete; a finished run must be
    /// [`reset`] before it can play again.
    ///
    /// [`reset`]: Playback::reset
    pub fn play(&mut self) {
        match self.state {
            PlaybackState::Idle | PlaybackState::Paused => {
                // An empty run has nothing to reveal.
                if self.index >= self.run.len() {
                    self.state = PlaybackState::Complete;
                } else {
                    self.state = PlaybackState::Playing;
                }
            }
            PlaybackState::Playing | PlaybackState::Complete => {}
        }
    }

    /// Suspend automatic advancement. Only meaningful while playing.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Reveal one step manually.
    ///
    /// Ignored while playing (the ticker owns advancement) and once
    /// complete. From idle, a manual step leaves playback paused.
    pub fn step(&mut self) {
        match self.state {
            PlaybackState::Idle | PlaybackState::Paused => {
                self.advance();
                if self.state != PlaybackState::Complete {
                    self.state = PlaybackState::Paused;
                }
            }
            PlaybackState::Playing | PlaybackState::Complete => {}
        }
    }

    /// Reveal one step from the ticker. Only advances while playing.
    pub fn tick(&mut self) {
        if self.state == PlaybackState::Playing {
            self.advance();
        }
    }

    fn advance(&mut self) {
        if self.index < self.run.len() {
            self.index += 1;
        }
        if self.index >= self.run.len() {
            self.state = PlaybackState::Complete;
        }
    }

    /// Return to the start of the run without touching it.
    pub fn reset(&mut self) {
        self.index = 0;
        self.state = PlaybackState::Idle;
    }

    /// Jump to a revealed-step count, clamped to the run length.
    ///
    /// Seeking to the end completes the run; any other target pauses it.
    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.run.len());
        if self.index == self.run.len() {
            self.state = PlaybackState::Complete;
        } else if self.index == 0 {
            self.state = PlaybackState::Idle;
        } else {
            self.state = PlaybackState::Paused;
        }
    }

    /// Change the animation speed. Takes effect on the next tick.
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Replace the run, cancelling any playback in progress.
    pub fn set_run(&mut self, run: AlgorithmRun) {
        self.run = run;
        self.index = 0;
        self.state = PlaybackState::Idle;
    }

    /// Progress through the run (0.0 to 1.0).
    pub fn progress(&self) -> f64 {
        if self.run.is_empty() {
            0.0
        } else {
            self.index as f64 / self.run.len() as f64
        }
    }
}

/// Playback status for sending to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub index: usize,
    pub total: usize,
    pub state: PlaybackState,
    pub speed: Speed,
    pub progress: f64,
    pub label: Option<String>,
}

impl From<&Playback> for PlaybackStatus {
    fn from(playback: &Playback) -> Self {
        Self {
            index: playback.index,
            total: playback.total(),
            state: playback.state,
            speed: playback.speed,
            progress: playback.progress(),
            label: playback.current_label().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::bubble_sort;

    fn make_playback() -> Playback {
        Playback::new(bubble_sort(&[3, 1, 2]))
    }

    #[test]
    fn starts_idle_at_zero() {
        let playback = make_playback();
        assert_eq!(playback.index(), 0);
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert_eq!(playback.current_snapshot(), playback.run().input());
    }

    #[test]
    fn speed_clamps_and_maps_to_interval() {
        assert_eq!(Speed::new(50).value(), 100);
        assert_eq!(Speed::new(5000).value(), 1000);
        assert_eq!(Speed::new(400).interval_ms(), 700);
        assert_eq!(Speed::new(100).interval_ms(), 1000);
        assert_eq!(Speed::new(1000).interval_ms(), 100);
        assert_eq!(Speed::default().interval_ms(), 600);
    }

    #[test]
    fn tick_advances_only_while_playing() {
        let mut playback = make_playback();

        playback.tick();
        assert_eq!(playback.index(), 0);

        playback.play();
        playback.tick();
        assert_eq!(playback.index(), 1);

        playback.pause();
        playback.tick();
        assert_eq!(playback.index(), 1);
    }

    #[test]
    fn manual_step_is_ignored_while_playing() {
        let mut playback = make_playback();
        playback.play();
        playback.step();
        assert_eq!(playback.index(), 0);
        assert_eq!(playback.state(), PlaybackState::Playing);
    }

    #[test]
    fn manual_step_from_idle_pauses() {
        let mut playback = make_playback();
        playback.step();
        assert_eq!(playback.index(), 1);
        assert_eq!(playback.state(), PlaybackState::Paused);
    }

    #[test]
    fn run_completes_at_the_last_step() {
        let mut playback = make_playback();
        let total = playback.total();

        playback.play();
        for _ in 0..total {
            playback.tick();
        }
        assert_eq!(playback.index(), total);
        assert_eq!(playback.state(), PlaybackState::Complete);

        // Further ticks and steps change nothing.
        playback.tick();
        playback.step();
        assert_eq!(playback.index(), total);
    }

    #[test]
    fn play_after_complete_requires_reset() {
        let mut playback = make_playback();
        playback.seek(playback.total());
        assert_eq!(playback.state(), PlaybackState::Complete);

        playback.play();
        assert_eq!(playback.state(), PlaybackState::Complete);

        playback.reset();
        assert_eq!(playback.index(), 0);
        assert_eq!(playback.state(), PlaybackState::Idle);
        playback.play();
        assert_eq!(playback.state(), PlaybackState::Playing);
    }

    #[test]
    fn pause_when_not_playing_is_a_no_op() {
        let mut playback = make_playback();
        playback.pause();
        assert_eq!(playback.state(), PlaybackState::Idle);
        playback.pause();
        assert_eq!(playback.state(), PlaybackState::Idle);
    }

    #[test]
    fn seek_clamps_to_bounds() {
        let mut playback = make_playback();
        let total = playback.total();

        playback.seek(2);
        assert_eq!(playback.index(), 2);
        assert_eq!(playback.state(), PlaybackState::Paused);

        playback.seek(1000);
        assert_eq!(playback.index(), total);
        assert_eq!(playback.state(), PlaybackState::Complete);

        playback.seek(0);
        assert_eq!(playback.state(), PlaybackState::Idle);
    }

    #[test]
    fn empty_run_completes_on_play() {
        let mut playback = Playback::new(bubble_sort(&[]));
        playback.play();
        assert_eq!(playback.state(), PlaybackState::Complete);
    }

    #[test]
    fn replaying_after_reset_reveals_the_same_sequence() {
        let mut playback = make_playback();
        playback.play();
        let mut first = Vec::new();
        while playback.state() == PlaybackState::Playing {
            playback.tick();
            first.push(playback.current_snapshot().clone());
        }

        playback.reset();
        playback.play();
        let mut second = Vec::new();
        while playback.state() == PlaybackState::Playing {
            playback.tick();
            second.push(playback.current_snapshot().clone());
        }

        assert_eq!(first, second);
    }

    #[test]
    fn set_run_cancels_playback() {
        let mut playback = make_playback();
        playback.play();
        playback.tick();

        playback.set_run(bubble_sort(&[5, 4]));
        assert_eq!(playback.index(), 0);
        assert_eq!(playback.state(), PlaybackState::Idle);
    }

    #[test]
    fn status_conversion() {
        let mut playback = make_playback();
        playback.step();
        playback.step();

        let status = PlaybackStatus::from(&playback);
        assert_eq!(status.index, 2);
        assert_eq!(status.total, playback.total());
        assert_eq!(status.state, PlaybackState::Paused);
        assert!(status.label.is_some());
    }
}
