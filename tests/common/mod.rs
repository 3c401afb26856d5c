#![allow(dead_code)]
//! Shared test doubles: a host with anchor accounting and a manual clock.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use cursortrail::history::Clock;
use cursortrail::host::{AnchorId, BufferId, EditorHost, Position};

/// In-memory host with strict anchor lifecycle accounting.
///
/// Panics on double release and on resolving a released anchor, so any
/// violation of the exactly-once release contract fails the test outright.
/// `insert_rows`/`delete_rows` simulate text edits by shifting anchors, the
/// adjustment a real editor's anchoring layer performs.
pub struct MockHost {
    cursors: HashMap<BufferId, Position>,
    anchors: HashMap<AnchorId, Position>,
    next_anchor: u64,
    pub created: usize,
    pub released: usize,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            cursors: HashMap::new(),
            anchors: HashMap::new(),
            next_anchor: 0,
            created: 0,
            released: 0,
        }
    }

    pub fn live_anchors(&self) -> usize {
        self.anchors.len()
    }

    /// Simulates inserting `count` lines at `at_row`: anchors at or below
    /// shift down.
    pub fn insert_rows(&mut self, at_row: usize, count: usize) {
        for position in self.anchors.values_mut() {
            if position.row >= at_row {
                position.row += count;
            }
        }
    }

    /// Simulates deleting `count` lines at `at_row`: anchors below shift up,
    /// anchors inside the deleted range collapse onto `at_row`.
    pub fn delete_rows(&mut self, at_row: usize, count: usize) {
        for position in self.anchors.values_mut() {
            if position.row >= at_row + count {
                position.row -= count;
            } else if position.row >= at_row {
                position.row = at_row;
            }
        }
    }
}

impl EditorHost for MockHost {
    fn create_anchor(&mut self, _buffer: BufferId, position: Position) -> AnchorId {
        let id = AnchorId(self.next_anchor);
        self.next_anchor += 1;
        self.anchors.insert(id, position);
        self.created += 1;
        id
    }

    fn resolve_anchor(&self, anchor: AnchorId) -> Position {
        *self
            .anchors
            .get(&anchor)
            .expect("anchor resolved after release")
    }

    fn release_anchor(&mut self, anchor: AnchorId) {
        assert!(
            self.anchors.remove(&anchor).is_some(),
            "anchor released twice"
        );
        self.released += 1;
    }

    fn cursor_position(&self, buffer: BufferId) -> Position {
        self.cursors.get(&buffer).copied().unwrap_or_default()
    }

    fn set_cursor_position(&mut self, buffer: BufferId, position: Position) {
        self.cursors.insert(buffer, position);
    }

    fn screen_row(&self, _buffer: BufferId, position: Position) -> usize {
        position.row
    }
}

/// Clock driven by the test instead of the wall.
#[derive(Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }

    pub fn boxed(&self) -> Box<dyn Clock> {
        Box::new(self.clone())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}
