//! Process-wide mapping from buffers to their navigators.

use std::collections::HashMap;
use std::time::Duration;

use super::navigator::Navigator;
use crate::config::Config;
use crate::host::{BufferId, EditorHost, Position};

/// The four outward-facing history commands.
///
/// Each operates on the currently active buffer and is a silent no-op when
/// there is none, or when the buffer's timeline is at a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Step back to the previous recorded position.
    Previous,
    /// Step forward to the next recorded position.
    Next,
    /// Manually record the current cursor position.
    Push,
    /// Wipe the buffer's history.
    Clear,
}

/// Owns one [`Navigator`] per open buffer.
///
/// Navigators are created lazily the first time a buffer is seen — whether
/// through a cursor-move notification or a command — and torn down when the
/// host reports the buffer closed. Teardown clears the timeline first so
/// every anchor goes back to the host; anchors are a limited resource and
/// silently dropping a navigator would leak them.
///
/// The registry is an explicitly owned context object: construct it on
/// startup, thread it through the event loop, call
/// [`shutdown`](Self::shutdown) on exit.
pub struct NavigatorRegistry {
    navigators: HashMap<BufferId, Navigator>,
    max_history_size: usize,
    momentum_decay: Duration,
    row_noise_threshold: usize,
}

impl NavigatorRegistry {
    /// Creates an empty registry with the given per-buffer settings.
    ///
    /// `max_history_size` is clamped to at least 1.
    pub fn new(
        max_history_size: usize,
        momentum_decay: Duration,
        row_noise_threshold: usize,
    ) -> Self {
        Self {
            navigators: HashMap::new(),
            max_history_size: max_history_size.max(1),
            momentum_decay,
            row_noise_threshold,
        }
    }

    /// Creates a registry from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.max_history_size,
            Duration::from_millis(config.momentum_decay_ms),
            config.row_noise_threshold,
        )
    }

    /// Returns the navigator for `buffer`, creating it with the current
    /// settings on first sight.
    pub fn get_or_create(&mut self, buffer: BufferId) -> &mut Navigator {
        self.navigators.entry(buffer).or_insert_with(|| {
            Navigator::new(
                buffer,
                self.max_history_size,
                self.momentum_decay,
                self.row_noise_threshold,
            )
        })
    }

    /// Routes a cursor-move notification to the buffer's navigator.
    pub fn handle_cursor_moved(
        &mut self,
        host: &mut dyn EditorHost,
        buffer: BufferId,
        old: Position,
        new: Position,
        new_screen_row: usize,
    ) {
        self.get_or_create(buffer)
            .handle_cursor_moved(host, old, new, new_screen_row);
    }

    /// Tears down the navigator for a closed buffer, releasing its anchors.
    pub fn handle_buffer_closed(&mut self, host: &mut dyn EditorHost, buffer: BufferId) {
        if let Some(mut navigator) = self.navigators.remove(&buffer) {
            navigator.clear_history(host);
        }
    }

    /// Executes a command against the active buffer.
    ///
    /// Returns true if the command changed anything: the cursor moved, a
    /// waypoint was recorded, or a history was cleared. A `None` active
    /// buffer and boundary conditions all return false without error.
    pub fn dispatch(
        &mut self,
        host: &mut dyn EditorHost,
        active: Option<BufferId>,
        command: NavCommand,
    ) -> bool {
        let Some(buffer) = active else {
            return false;
        };
        let navigator = self.get_or_create(buffer);
        match command {
            NavCommand::Previous => navigator.move_to_past(host).is_some(),
            NavCommand::Next => navigator.move_to_future(host).is_some(),
            NavCommand::Push => {
                navigator.record_current_position(host);
                true
            }
            NavCommand::Clear => {
                navigator.clear_history(host);
                true
            }
        }
    }

    /// Applies a new history size to every live timeline, trimming from the
    /// oldest end where needed, and to all navigators created afterwards.
    pub fn set_max_history(&mut self, host: &mut dyn EditorHost, size: usize) {
        self.max_history_size = size.max(1);
        for navigator in self.navigators.values_mut() {
            navigator.set_capacity(host, self.max_history_size);
        }
    }

    /// Clears every timeline (returning all anchors to the host) and drops
    /// all navigators.
    pub fn shutdown(&mut self, host: &mut dyn EditorHost) {
        for (_, mut navigator) in self.navigators.drain() {
            navigator.clear_history(host);
        }
    }

    /// Returns the navigator for `buffer`, if one exists yet.
    pub fn get(&self, buffer: BufferId) -> Option<&Navigator> {
        self.navigators.get(&buffer)
    }

    /// Returns the number of live navigators.
    pub fn len(&self) -> usize {
        self.navigators.len()
    }

    /// Returns true if no buffer has a navigator yet.
    pub fn is_empty(&self) -> bool {
        self.navigators.is_empty()
    }

    /// Returns the configured history size.
    pub fn max_history_size(&self) -> usize {
        self.max_history_size
    }
}
