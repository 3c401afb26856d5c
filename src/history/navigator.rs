//! Per-buffer controller: recording policy and navigation.
//!
//! The navigator decides, for every cursor movement the host reports,
//! whether the movement starts a new history entry, slides the newest entry
//! along, or is ignored as noise:
//!
//! - An **empty** timeline first gets a baseline waypoint at the pre-move
//!   position, so the very first motion always has a "home" entry to return
//!   to. Recording the baseline resets momentum rather than touching it, so
//!   the movement that follows is judged fresh against the noise filter.
//! - A **fresh** movement (momentum decayed) within a few screen rows of the
//!   current entry is noise and is dropped without touching anything.
//! - A fresh movement beyond the threshold appends a new waypoint; a
//!   movement while momentum is still live overwrites the newest waypoint,
//!   so continuous scrolling or held-down arrows collapse into one waypoint
//!   that keeps sliding to the latest spot.
//!
//! Programmatic cursor moves made by the navigator itself come back from
//! the host as ordinary cursor-move notifications. A single-shot guard is
//! set right before each programmatic move and consumed by the very next
//! notification, which is always the echo under synchronous dispatch. If a
//! host ever drops the echo, the guard still clears on the next genuine
//! movement, costing at most one swallowed event.
//!
//! Nothing here is fallible: empty timelines and index boundaries are
//! silent no-ops, never errors.

use std::time::Duration;

use super::momentum::{Clock, MomentumTracker};
use super::timeline::Timeline;
use crate::host::{BufferId, EditorHost, Position};

/// Default momentum decay window.
pub const DEFAULT_MOMENTUM_DECAY: Duration = Duration::from_millis(300);

/// Default noise threshold, in screen rows.
pub const DEFAULT_ROW_NOISE_THRESHOLD: usize = 3;

/// Controller for one buffer's cursor history.
pub struct Navigator {
    buffer: BufferId,
    timeline: Timeline,
    momentum: MomentumTracker,
    row_threshold: usize,
    /// Single-shot guard: the next cursor-move notification is our own echo.
    suppress_next_move: bool,
}

impl Navigator {
    /// Creates a navigator for `buffer` reading real time.
    pub fn new(
        buffer: BufferId,
        capacity: usize,
        momentum_decay: Duration,
        row_threshold: usize,
    ) -> Self {
        Self {
            buffer,
            timeline: Timeline::new(buffer, capacity),
            momentum: MomentumTracker::with_clock(momentum_decay, Box::new(super::WallClock)),
            row_threshold,
            suppress_next_move: false,
        }
    }

    /// Creates a navigator with an injected clock, for tests that drive
    /// time manually.
    pub fn with_clock(
        buffer: BufferId,
        capacity: usize,
        momentum_decay: Duration,
        row_threshold: usize,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            buffer,
            timeline: Timeline::new(buffer, capacity),
            momentum: MomentumTracker::with_clock(momentum_decay, clock),
            row_threshold,
            suppress_next_move: false,
        }
    }

    /// Processes a cursor-move notification from the host.
    ///
    /// `old` is where the cursor was before the move, `new` where it landed,
    /// and `new_screen_row` the screen row of `new` as the host lays it out.
    pub fn handle_cursor_moved(
        &mut self,
        host: &mut dyn EditorHost,
        old: Position,
        new: Position,
        new_screen_row: usize,
    ) {
        // Echo of our own programmatic move; consume the guard and stop.
        if self.suppress_next_move {
            self.suppress_next_move = false;
            return;
        }

        if self.timeline.is_empty() {
            self.timeline.record(host, old, false);
            self.momentum.reset();
        }

        let moving = self.momentum.is_moving();
        if !moving {
            if let Some(current) = self.timeline.current(host) {
                let current_row = host.screen_row(self.buffer, current);
                if new_screen_row.abs_diff(current_row) <= self.row_threshold {
                    // Micro-movement near the current entry; not a waypoint.
                    return;
                }
            }
        }

        self.timeline.record(host, new, moving);
        self.momentum.touch();
    }

    /// Moves the cursor to the previous history entry.
    ///
    /// Returns the position moved to, or `None` at the oldest entry or on an
    /// empty timeline (in which case the cursor is not touched). Momentum is
    /// reset first so the landing position is not later overwritten as a
    /// continuation of the motion that preceded the jump.
    pub fn move_to_past(&mut self, host: &mut dyn EditorHost) -> Option<Position> {
        self.momentum.reset();
        let before = self.timeline.index();
        let target = self.timeline.rewind(host)?;
        if self.timeline.index() == before {
            // Already at the oldest entry; leave the cursor alone.
            return None;
        }
        self.jump_to(host, target);
        Some(target)
    }

    /// Moves the cursor to the next history entry.
    ///
    /// Symmetric to [`move_to_past`](Self::move_to_past).
    pub fn move_to_future(&mut self, host: &mut dyn EditorHost) -> Option<Position> {
        self.momentum.reset();
        let before = self.timeline.index();
        let target = self.timeline.advance(host)?;
        if self.timeline.index() == before {
            return None;
        }
        self.jump_to(host, target);
        Some(target)
    }

    /// Records the cursor's current position as a waypoint, regardless of
    /// the debounce state.
    ///
    /// Skipped only when the current entry already resolves to the exact
    /// same position, so pressing the key twice does not stack duplicates.
    pub fn record_current_position(&mut self, host: &mut dyn EditorHost) {
        let position = host.cursor_position(self.buffer);
        if self.timeline.current(host) != Some(position) {
            self.timeline.record(host, position, false);
        }
        self.momentum.reset();
    }

    /// Releases every recorded position and resets momentum.
    pub fn clear_history(&mut self, host: &mut dyn EditorHost) {
        self.timeline.clear(host);
        self.momentum.reset();
    }

    /// Updates the timeline's capacity bound, trimming immediately.
    pub fn set_capacity(&mut self, host: &mut dyn EditorHost, capacity: usize) {
        self.timeline.set_capacity(host, capacity);
    }

    /// Returns the buffer this navigator tracks.
    pub fn buffer(&self) -> BufferId {
        self.buffer
    }

    /// Returns the underlying timeline, for status display and tests.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    fn jump_to(&mut self, host: &mut dyn EditorHost, target: Position) {
        self.suppress_next_move = true;
        host.set_cursor_position(self.buffer, target);
    }
}
