//! Host editor capability contract.
//!
//! The history engine does not own any text. It records positions inside
//! buffers that belong to a host editor, and the host supplies the three
//! capabilities the engine cannot implement itself:
//!
//! - **Anchoring**: turning a line/column into a handle whose resolved
//!   position stays correct as surrounding text is edited. The engine only
//!   creates, resolves, and releases handles; the adjustment logic lives in
//!   the host.
//! - **Cursor access**: reading and programmatically moving the real cursor.
//! - **Screen geometry**: mapping a buffer position to a screen row, used by
//!   the noise filter when deciding whether a small movement is worth a new
//!   history entry.
//!
//! Event delivery is by direct method call: the host's event loop feeds
//! cursor-move and buffer-close notifications into
//! [`NavigatorRegistry`](crate::history::NavigatorRegistry). Dispatch is
//! assumed synchronous and single-threaded, which is what termion-style
//! event loops give you.

/// A line/column position inside a buffer (both 0-based).
///
/// # Example
///
/// ```
/// use cursortrail::host::Position;
///
/// let pos = Position::new(12, 4);
/// assert_eq!(pos.row, 12);
/// assert_eq!(pos.column, 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Buffer row (0-based).
    pub row: usize,
    /// Column within the row (0-based).
    pub column: usize,
}

impl Position {
    /// Creates a position from a row and column.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Opaque identity of an open buffer, assigned by the host.
///
/// The engine keeps one independent history per `BufferId` and never looks
/// inside the id. Whether two split views of the same document share an id
/// (and therefore a history) is the host's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(pub u64);

/// Opaque handle to a host-managed anchored position.
///
/// Created by [`EditorHost::create_anchor`] and owned by exactly one
/// timeline entry until it is released. Never resolved after release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorId(pub u64);

/// Capabilities the host editor provides to the history engine.
///
/// Anchors are a limited host resource: every handle returned by
/// [`create_anchor`](Self::create_anchor) must be released exactly once.
/// The engine guarantees this structurally — releases happen at the single
/// removal site of each timeline mutation (prune, trim, clear, teardown).
pub trait EditorHost {
    /// Creates an anchor at `position` in `buffer` and returns its handle.
    fn create_anchor(&mut self, buffer: BufferId, position: Position) -> AnchorId;

    /// Resolves an anchor to its current position.
    ///
    /// Resolution happens on demand, never from a cache: text edits since
    /// creation may have moved the anchored location.
    fn resolve_anchor(&self, anchor: AnchorId) -> Position;

    /// Releases an anchor. Called exactly once per created handle.
    fn release_anchor(&mut self, anchor: AnchorId);

    /// Returns the current cursor position in `buffer`.
    fn cursor_position(&self, buffer: BufferId) -> Position;

    /// Moves the real cursor in `buffer` to `position`.
    ///
    /// Hosts that report programmatic moves through the same notification
    /// channel as user moves will deliver one echo per call; the engine's
    /// re-entrancy guard swallows it.
    fn set_cursor_position(&mut self, buffer: BufferId, position: Position);

    /// Maps a buffer position to a screen row for the noise filter.
    ///
    /// For a host without soft wrapping this is just `position.row`.
    fn screen_row(&self, buffer: BufferId, position: Position) -> usize;
}
