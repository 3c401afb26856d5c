//! Elapsed-time hysteresis for the recording policy.

use std::time::{Duration, Instant};

/// Source of the current instant.
///
/// The momentum tracker reads time through this trait so tests can drive it
/// with a manual clock instead of sleeping.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// The real clock, backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Tracks whether the user is "still moving": whether the last recorded
/// movement happened within a fixed decay window.
///
/// Pure time-based state — it knows nothing about timelines or buffers.
/// `touch()` stamps now, `reset()` clears the stamp, and `is_moving()` is
/// true iff a stamp exists and less than the decay window has elapsed since.
pub struct MomentumTracker {
    clock: Box<dyn Clock>,
    last_touch: Option<Instant>,
    decay: Duration,
}

impl MomentumTracker {
    /// Creates a tracker with the given decay window, reading real time.
    pub fn new(decay: Duration) -> Self {
        Self::with_clock(decay, Box::new(WallClock))
    }

    /// Creates a tracker reading time from `clock`.
    pub fn with_clock(decay: Duration, clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            last_touch: None,
            decay,
        }
    }

    /// Stamps the current time as the most recent movement.
    pub fn touch(&mut self) {
        self.last_touch = Some(self.clock.now());
    }

    /// Clears the stamp back to "not moving".
    pub fn reset(&mut self) {
        self.last_touch = None;
    }

    /// Returns true if a movement was stamped strictly less than the decay
    /// window ago. False when unset.
    pub fn is_moving(&self) -> bool {
        match self.last_touch {
            Some(stamp) => self.clock.now().duration_since(stamp) < self.decay,
            None => false,
        }
    }

    /// Returns the decay window.
    pub fn decay_window(&self) -> Duration {
        self.decay
    }
}
