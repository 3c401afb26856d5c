//! cursortrail — per-buffer cursor position history with back/forward
//! navigation.
//!
//! The crate keeps one navigable timeline of cursor positions per open
//! buffer, similar to browser history: step back to where the cursor
//! recently was, step forward again, drop manual waypoints, and let a
//! debounce policy decide which movements are worth remembering.
//!
//! The history engine lives in [`history`] and is written against the
//! [`host`] capability contract: any editor that can anchor a position
//! against text edits, move its cursor, and report cursor movements can
//! drive it. The [`viewer`], [`ui`], and [`input`] modules plus the
//! `cursortrail` binary form a small terminal file viewer that acts as a
//! working host.
//!
//! # Example
//!
//! ```
//! use cursortrail::history::{NavCommand, NavigatorRegistry};
//! use cursortrail::host::{EditorHost, Position};
//! use cursortrail::viewer::{Buffer, Workspace};
//! use std::time::Duration;
//!
//! let mut ws = Workspace::new();
//! let id = ws.add_buffer(Buffer::from_lines("notes", vec![String::new(); 100]));
//! let mut registry = NavigatorRegistry::new(1000, Duration::from_millis(300), 3);
//!
//! // The host reports a cursor move; the engine records a baseline at the
//! // old position and a waypoint at the new one.
//! ws.set_cursor_position(id, Position::new(42, 0));
//! registry.handle_cursor_moved(&mut ws, id, Position::new(0, 0), Position::new(42, 0), 42);
//!
//! // Step back to where we came from.
//! assert!(registry.dispatch(&mut ws, Some(id), NavCommand::Previous));
//! assert_eq!(ws.cursor_position(id), Position::new(0, 0));
//! ```

pub mod config;
pub mod history;
pub mod host;
pub mod input;
pub mod ui;
pub mod viewer;
