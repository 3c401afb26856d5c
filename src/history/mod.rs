//! Cursor position history: recording policy, timelines, and navigation.
//!
//! This is the heart of the crate. Each open buffer gets a [`Navigator`]
//! holding a bounded [`Timeline`] of anchored positions and a
//! [`MomentumTracker`] that decides whether a movement extends the current
//! motion or starts a new one. The [`NavigatorRegistry`] owns all navigators
//! and is the single object a host wires its event loop to.
//!
//! # Modules
//!
//! - `timeline`: the bounded, index-addressed position sequence
//! - `momentum`: elapsed-time hysteresis with an injectable clock
//! - `navigator`: the per-buffer recording state machine and navigation
//! - `registry`: per-buffer ownership and command dispatch

pub mod momentum;
pub mod navigator;
pub mod registry;
pub mod timeline;

pub use momentum::{Clock, MomentumTracker, WallClock};
pub use navigator::{Navigator, DEFAULT_MOMENTUM_DECAY, DEFAULT_ROW_NOISE_THRESHOLD};
pub use registry::{NavCommand, NavigatorRegistry};
pub use timeline::Timeline;
