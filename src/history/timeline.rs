//! Bounded timeline of anchored cursor positions.

use crate::host::{AnchorId, BufferId, EditorHost, Position};

/// Ordered, capacity-bounded sequence of anchored positions with a current
/// index, one per buffer.
///
/// The timeline behaves like a browser history: recording while the index
/// sits in the middle prunes the abandoned "future" entries, and recording
/// past capacity trims from the oldest end. Navigation moves the index
/// without mutating the entries.
///
/// Entries are anchor handles owned by the host; the timeline releases each
/// one exactly once, at the moment it leaves the sequence.
///
/// # Example
///
/// ```
/// use cursortrail::history::Timeline;
/// use cursortrail::host::Position;
/// use cursortrail::viewer::{Buffer, Workspace};
///
/// let mut ws = Workspace::new();
/// let id = ws.add_buffer(Buffer::from_lines("scratch", vec![String::new(); 50]));
///
/// let mut timeline = Timeline::new(id, 100);
/// timeline.record(&mut ws, Position::new(3, 0), false);
/// timeline.record(&mut ws, Position::new(20, 0), false);
///
/// assert_eq!(timeline.rewind(&ws), Some(Position::new(3, 0)));
/// assert_eq!(timeline.advance(&ws), Some(Position::new(20, 0)));
/// ```
pub struct Timeline {
    /// Buffer the anchors belong to.
    buffer: BufferId,
    /// Anchor handles, oldest first.
    entries: Vec<AnchorId>,
    /// Current index; `None` iff `entries` is empty.
    current: Option<usize>,
    /// Maximum number of entries to keep (at least 1).
    capacity: usize,
}

impl Timeline {
    /// Creates an empty timeline for `buffer` holding at most `capacity`
    /// entries. A capacity below 1 is raised to 1.
    pub fn new(buffer: BufferId, capacity: usize) -> Self {
        Self {
            buffer,
            entries: Vec::new(),
            current: None,
            capacity: capacity.max(1),
        }
    }

    /// Records `position` as the newest entry.
    ///
    /// With `overwrite` set and a non-empty timeline, the index is stepped
    /// back one slot first, so the append below replaces the newest entry
    /// instead of stacking a new one — this is what collapses a continuous
    /// motion into a single sliding waypoint. On an empty timeline
    /// `overwrite` has no index to step back and is ignored.
    ///
    /// Any entries after the (possibly stepped-back) index are an abandoned
    /// future branch; they are released and removed before the append. If
    /// the result exceeds capacity, the oldest entries are released and the
    /// index shifts down by the trimmed count, floored at 0.
    pub fn record(&mut self, host: &mut dyn EditorHost, position: Position, overwrite: bool) {
        if overwrite && !self.entries.is_empty() {
            self.current = match self.current {
                Some(0) | None => None,
                Some(index) => Some(index - 1),
            };
        }

        // Prune the future branch: everything past the current index.
        let keep = self.current.map_or(0, |index| index + 1);
        for anchor in self.entries.drain(keep..) {
            host.release_anchor(anchor);
        }

        let anchor = host.create_anchor(self.buffer, position);
        self.entries.push(anchor);
        self.current = Some(self.entries.len() - 1);

        self.trim(host);
    }

    /// Steps the index back one entry and returns the position there.
    ///
    /// Returns `None` only when the timeline is empty. At index 0 this is
    /// idempotent: the index stays put and the oldest position is returned
    /// again.
    pub fn rewind(&mut self, host: &dyn EditorHost) -> Option<Position> {
        let index = self.current?.saturating_sub(1);
        self.current = Some(index);
        Some(host.resolve_anchor(self.entries[index]))
    }

    /// Steps the index forward one entry and returns the position there.
    ///
    /// Returns `None` only when the timeline is empty; idempotent at the
    /// newest entry.
    pub fn advance(&mut self, host: &dyn EditorHost) -> Option<Position> {
        let index = (self.current? + 1).min(self.entries.len() - 1);
        self.current = Some(index);
        Some(host.resolve_anchor(self.entries[index]))
    }

    /// Returns the position at the current index, or `None` if empty.
    pub fn current(&self, host: &dyn EditorHost) -> Option<Position> {
        self.current
            .map(|index| host.resolve_anchor(self.entries[index]))
    }

    /// Changes the capacity bound, trimming eagerly.
    ///
    /// Trimming here (rather than waiting for the next `record`) keeps a
    /// live configuration change effective immediately; the index shifts by
    /// the trimmed count exactly as it does on a recording trim.
    pub fn set_capacity(&mut self, host: &mut dyn EditorHost, capacity: usize) {
        self.capacity = capacity.max(1);
        self.trim(host);
    }

    /// Releases every anchor and empties the timeline.
    pub fn clear(&mut self, host: &mut dyn EditorHost) {
        for anchor in self.entries.drain(..) {
            host.release_anchor(anchor);
        }
        self.current = None;
    }

    /// Releases the oldest entries until the timeline fits its capacity.
    fn trim(&mut self, host: &mut dyn EditorHost) {
        if self.entries.len() <= self.capacity {
            return;
        }
        let excess = self.entries.len() - self.capacity;
        for anchor in self.entries.drain(..excess) {
            host.release_anchor(anchor);
        }
        self.current = self.current.map(|index| index.saturating_sub(excess));
    }

    /// Returns the number of entries stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no positions have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the capacity bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current index, or `None` if the timeline is empty.
    pub fn index(&self) -> Option<usize> {
        self.current
    }
}
