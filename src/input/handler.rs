//! Input event handler: wires key presses into cursor moves and history
//! commands.
//!
//! Every user-driven cursor movement funnels through
//! [`NavigatorRegistry::handle_cursor_moved`], exactly as a host editor's
//! cursor-move notification would. History commands go through
//! [`NavigatorRegistry::dispatch`]; when a navigation command moves the
//! cursor, the handler reports that programmatic move back through the same
//! notification path, which the navigator's re-entrancy guard swallows.

use super::keys::{map_key_event, InputEvent};
use crate::history::{NavCommand, NavigatorRegistry};
use crate::host::EditorHost;
use crate::viewer::Workspace;
use anyhow::Result;
use std::io::{self, Stdin};
use termion::event::Event;
use termion::input::{Events, TermRead};

/// Rows moved by the half-page keys.
const HALF_PAGE: usize = 20;

/// Result of handling one event.
pub struct HandleOutcome {
    /// True if the application should quit.
    pub quit: bool,
    /// Feedback for the message line, if any.
    pub message: Option<String>,
}

impl HandleOutcome {
    fn none() -> Self {
        Self {
            quit: false,
            message: None,
        }
    }

    fn message(text: impl Into<String>) -> Self {
        Self {
            quit: false,
            message: Some(text.into()),
        }
    }
}

/// Handles terminal input events and drives the workspace and history.
pub struct InputHandler {
    /// Event source iterator (maintains position in the input buffer)
    events: Events<Stdin>,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: io::stdin().events(),
        }
    }

    /// Polls for the next terminal event.
    ///
    /// Returns `Ok(None)` when the event stream is exhausted.
    pub fn poll_event(&mut self) -> Result<Option<Event>> {
        match self.events.next() {
            Some(event) => Ok(Some(event?)),
            None => Ok(None),
        }
    }

    /// Handles a terminal event.
    ///
    /// Returns whether the application should quit, plus any feedback for
    /// the message line.
    pub fn handle_event(
        &mut self,
        event: Event,
        workspace: &mut Workspace,
        registry: &mut NavigatorRegistry,
    ) -> Result<HandleOutcome> {
        let outcome = match map_key_event(event) {
            InputEvent::Quit => HandleOutcome {
                quit: true,
                message: None,
            },
            InputEvent::MoveDown => move_cursor(workspace, registry, 1, 0),
            InputEvent::MoveUp => move_cursor(workspace, registry, -1, 0),
            InputEvent::MoveLeft => move_cursor(workspace, registry, 0, -1),
            InputEvent::MoveRight => move_cursor(workspace, registry, 0, 1),
            InputEvent::HalfPageDown => move_cursor(workspace, registry, HALF_PAGE as isize, 0),
            InputEvent::HalfPageUp => move_cursor(workspace, registry, -(HALF_PAGE as isize), 0),
            InputEvent::JumpToTop => move_cursor_to_row(workspace, registry, 0),
            InputEvent::JumpToBottom => {
                let last = workspace
                    .active_buffer()
                    .map(|b| b.line_count().saturating_sub(1))
                    .unwrap_or(0);
                move_cursor_to_row(workspace, registry, last)
            }
            InputEvent::HistoryBack => navigate(workspace, registry, NavCommand::Previous),
            InputEvent::HistoryForward => navigate(workspace, registry, NavCommand::Next),
            InputEvent::PushWaypoint => {
                let active = workspace.active_id();
                if registry.dispatch(workspace, active, NavCommand::Push) {
                    HandleOutcome::message("Waypoint recorded")
                } else {
                    HandleOutcome::none()
                }
            }
            InputEvent::ClearHistory => {
                let active = workspace.active_id();
                if registry.dispatch(workspace, active, NavCommand::Clear) {
                    HandleOutcome::message("History cleared")
                } else {
                    HandleOutcome::none()
                }
            }
            InputEvent::NextBuffer => {
                workspace.next_tab();
                HandleOutcome::none()
            }
            InputEvent::PrevBuffer => {
                workspace.prev_tab();
                HandleOutcome::none()
            }
            InputEvent::CloseBuffer => {
                if let Some(closed) = workspace.close_active() {
                    registry.handle_buffer_closed(workspace, closed);
                }
                if workspace.buffer_count() == 0 {
                    HandleOutcome {
                        quit: true,
                        message: None,
                    }
                } else {
                    HandleOutcome::none()
                }
            }
            InputEvent::Unknown => HandleOutcome::none(),
        };

        Ok(outcome)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Moves the active cursor by a delta and reports the movement to the
/// history registry, the same way a host editor reports user moves.
fn move_cursor(
    workspace: &mut Workspace,
    registry: &mut NavigatorRegistry,
    row_delta: isize,
    column_delta: isize,
) -> HandleOutcome {
    let Some(buffer) = workspace.active_id() else {
        return HandleOutcome::none();
    };
    let old = workspace.cursor_position(buffer);
    if let Some(active) = workspace.active_buffer_mut() {
        active.move_cursor(row_delta, column_delta);
    }
    let new = workspace.cursor_position(buffer);
    if new != old {
        let new_screen_row = workspace.screen_row(buffer, new);
        registry.handle_cursor_moved(workspace, buffer, old, new, new_screen_row);
    }
    HandleOutcome::none()
}

fn move_cursor_to_row(
    workspace: &mut Workspace,
    registry: &mut NavigatorRegistry,
    row: usize,
) -> HandleOutcome {
    let current_row = workspace
        .active_buffer()
        .map(|b| b.cursor().row)
        .unwrap_or(0);
    move_cursor(workspace, registry, row as isize - current_row as isize, 0)
}

/// Dispatches a navigation command, then reports the resulting programmatic
/// cursor move back as a notification so the guard can consume it — the
/// echo a real host's event system would produce.
fn navigate(
    workspace: &mut Workspace,
    registry: &mut NavigatorRegistry,
    command: NavCommand,
) -> HandleOutcome {
    let Some(buffer) = workspace.active_id() else {
        return HandleOutcome::none();
    };
    let before = workspace.cursor_position(buffer);
    if registry.dispatch(workspace, Some(buffer), command) {
        let after = workspace.cursor_position(buffer);
        let row = workspace.screen_row(buffer, after);
        registry.handle_cursor_moved(workspace, buffer, before, after, row);
        HandleOutcome::none()
    } else {
        let text = match command {
            NavCommand::Previous => "At oldest position",
            _ => "At newest position",
        };
        HandleOutcome::message(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Position;
    use crate::viewer::Buffer;
    use std::time::Duration;
    use termion::event::Key;

    fn setup() -> (Workspace, NavigatorRegistry) {
        let mut ws = Workspace::new();
        let lines: Vec<String> = (0..100).map(|i| format!("line {}", i)).collect();
        ws.add_buffer(Buffer::from_lines("test", lines));
        (ws, NavigatorRegistry::new(100, Duration::from_millis(300), 3))
    }

    #[test]
    fn test_quit_event() {
        let (mut ws, mut registry) = setup();
        let mut handler = InputHandler::new();
        let outcome = handler
            .handle_event(Event::Key(Key::Char('q')), &mut ws, &mut registry)
            .unwrap();
        assert!(outcome.quit);
    }

    #[test]
    fn test_big_jump_then_back() {
        let (mut ws, mut registry) = setup();
        let buffer = ws.active_id().unwrap();

        // A big jump records a baseline at the old position.
        move_cursor(&mut ws, &mut registry, 50, 0);
        assert_eq!(ws.active_buffer().unwrap().cursor().row, 50);

        navigate(&mut ws, &mut registry, NavCommand::Previous);
        assert_eq!(ws.active_buffer().unwrap().cursor().row, 0);

        let timeline = registry.get(buffer).unwrap().timeline();
        assert_eq!(timeline.index(), Some(0));
    }

    #[test]
    fn test_navigate_with_empty_history_reports_boundary() {
        let (mut ws, mut registry) = setup();
        let outcome = navigate(&mut ws, &mut registry, NavCommand::Previous);
        assert_eq!(outcome.message.as_deref(), Some("At oldest position"));
        assert_eq!(ws.active_buffer().unwrap().cursor(), Position::new(0, 0));
    }

    #[test]
    fn test_close_last_buffer_quits() {
        let (mut ws, mut registry) = setup();
        let mut handler = InputHandler::new();
        let outcome = handler
            .handle_event(Event::Key(Key::Char('c')), &mut ws, &mut registry)
            .unwrap();
        assert!(outcome.quit);
        assert!(registry.is_empty());
    }
}
