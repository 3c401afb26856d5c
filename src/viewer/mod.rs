//! Demo host: a workspace of read-only buffers implementing [`EditorHost`].
//!
//! The workspace is the concrete host the demo binary runs the history
//! engine against. It keeps the open buffers (as tabs), the active-tab
//! index, and an anchor arena. The buffers are read-only, so anchors here
//! never move once created; the arena still enforces the handle lifecycle —
//! creation, on-demand resolution, release — the engine is written against.

pub mod buffer;

pub use buffer::Buffer;

use std::collections::HashMap;

use crate::host::{AnchorId, BufferId, EditorHost, Position};

/// The set of open buffers plus the anchor arena.
pub struct Workspace {
    buffers: Vec<(BufferId, Buffer)>,
    active: usize,
    anchors: HashMap<AnchorId, Position>,
    next_buffer_id: u64,
    next_anchor_id: u64,
}

impl Workspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self {
            buffers: Vec::new(),
            active: 0,
            anchors: HashMap::new(),
            next_buffer_id: 0,
            next_anchor_id: 0,
        }
    }

    /// Adds a buffer as the last tab and returns its id.
    pub fn add_buffer(&mut self, buffer: Buffer) -> BufferId {
        let id = BufferId(self.next_buffer_id);
        self.next_buffer_id += 1;
        self.buffers.push((id, buffer));
        id
    }

    /// Returns the active buffer's id, or `None` if no buffers are open.
    pub fn active_id(&self) -> Option<BufferId> {
        self.buffers.get(self.active).map(|(id, _)| *id)
    }

    /// Returns the active buffer.
    pub fn active_buffer(&self) -> Option<&Buffer> {
        self.buffers.get(self.active).map(|(_, buffer)| buffer)
    }

    /// Returns the active buffer mutably.
    pub fn active_buffer_mut(&mut self) -> Option<&mut Buffer> {
        self.buffers.get_mut(self.active).map(|(_, buffer)| buffer)
    }

    /// Cycles the active tab forward.
    pub fn next_tab(&mut self) {
        if !self.buffers.is_empty() {
            self.active = (self.active + 1) % self.buffers.len();
        }
    }

    /// Cycles the active tab backward.
    pub fn prev_tab(&mut self) {
        if !self.buffers.is_empty() {
            self.active = (self.active + self.buffers.len() - 1) % self.buffers.len();
        }
    }

    /// Closes the active tab and returns its id so the caller can notify
    /// the history registry.
    pub fn close_active(&mut self) -> Option<BufferId> {
        if self.buffers.is_empty() {
            return None;
        }
        let (id, _) = self.buffers.remove(self.active);
        if self.active >= self.buffers.len() && self.active > 0 {
            self.active -= 1;
        }
        Some(id)
    }

    /// Returns the number of open buffers.
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Returns the 0-based index of the active tab.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Returns the number of live anchors, for leak checks.
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    fn buffer(&self, id: BufferId) -> Option<&Buffer> {
        self.buffers
            .iter()
            .find(|(bid, _)| *bid == id)
            .map(|(_, buffer)| buffer)
    }

    fn buffer_mut(&mut self, id: BufferId) -> Option<&mut Buffer> {
        self.buffers
            .iter_mut()
            .find(|(bid, _)| *bid == id)
            .map(|(_, buffer)| buffer)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorHost for Workspace {
    fn create_anchor(&mut self, _buffer: BufferId, position: Position) -> AnchorId {
        let id = AnchorId(self.next_anchor_id);
        self.next_anchor_id += 1;
        self.anchors.insert(id, position);
        id
    }

    fn resolve_anchor(&self, anchor: AnchorId) -> Position {
        self.anchors.get(&anchor).copied().unwrap_or_default()
    }

    fn release_anchor(&mut self, anchor: AnchorId) {
        self.anchors.remove(&anchor);
    }

    fn cursor_position(&self, buffer: BufferId) -> Position {
        self.buffer(buffer)
            .map(|b| b.cursor())
            .unwrap_or_default()
    }

    fn set_cursor_position(&mut self, buffer: BufferId, position: Position) {
        if let Some(buffer) = self.buffer_mut(buffer) {
            buffer.set_cursor(position);
        }
    }

    fn screen_row(&self, _buffer: BufferId, position: Position) -> usize {
        // No soft wrapping, so buffer rows and screen rows coincide.
        position.row
    }
}
