//! Keyboard event mapping and input event types.

use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
///
/// These represent user intentions (quit, move cursor, navigate history)
/// rather than specific key presses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User wants to quit the viewer
    Quit,
    /// Move cursor down
    MoveDown,
    /// Move cursor up
    MoveUp,
    /// Move cursor left
    MoveLeft,
    /// Move cursor right
    MoveRight,
    /// Half-page down (Ctrl-d)
    HalfPageDown,
    /// Half-page up (Ctrl-u)
    HalfPageUp,
    /// Jump to top of buffer (g)
    JumpToTop,
    /// Jump to bottom of buffer (G)
    JumpToBottom,
    /// Step back in cursor history (Ctrl-o)
    HistoryBack,
    /// Step forward in cursor history (Ctrl-i)
    HistoryForward,
    /// Manually record the current position (m)
    PushWaypoint,
    /// Wipe the active buffer's history (X)
    ClearHistory,
    /// Switch to the next buffer tab (])
    NextBuffer,
    /// Switch to the previous buffer tab ([)
    PrevBuffer,
    /// Close the active buffer tab (c)
    CloseBuffer,
    /// Unknown or unmapped key
    Unknown,
}

/// Maps a termion Event to an InputEvent.
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use cursortrail::input::keys::{map_key_event, InputEvent};
///
/// let event = Event::Key(Key::Char('j'));
/// assert_eq!(map_key_event(event), InputEvent::MoveDown);
/// ```
pub fn map_key_event(event: Event) -> InputEvent {
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    match key {
        // Ctrl-modified keys
        Key::Ctrl('d') => InputEvent::HalfPageDown,
        Key::Ctrl('u') => InputEvent::HalfPageUp,
        Key::Ctrl('o') => InputEvent::HistoryBack,
        Key::Ctrl('i') => InputEvent::HistoryForward,
        // Regular keys
        Key::Char('q') => InputEvent::Quit,
        Key::Char('j') => InputEvent::MoveDown,
        Key::Char('k') => InputEvent::MoveUp,
        Key::Char('h') => InputEvent::MoveLeft,
        Key::Char('l') => InputEvent::MoveRight,
        Key::Char('g') => InputEvent::JumpToTop,
        Key::Char('G') => InputEvent::JumpToBottom,
        Key::Char('m') => InputEvent::PushWaypoint,
        Key::Char('X') => InputEvent::ClearHistory,
        Key::Char(']') => InputEvent::NextBuffer,
        Key::Char('[') => InputEvent::PrevBuffer,
        Key::Char('c') => InputEvent::CloseBuffer,
        Key::Down => InputEvent::MoveDown,
        Key::Up => InputEvent::MoveUp,
        Key::Left => InputEvent::MoveLeft,
        Key::Right => InputEvent::MoveRight,
        Key::PageDown => InputEvent::HalfPageDown,
        Key::PageUp => InputEvent::HalfPageUp,
        Key::Home => InputEvent::JumpToTop,
        Key::End => InputEvent::JumpToBottom,
        _ => InputEvent::Unknown,
    }
}
