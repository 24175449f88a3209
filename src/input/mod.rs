//! Input handling: platform-agnostic events and the zoom input strategies
//! that turn them into per-frame zoom deltas.

/// Platform-agnostic input events.
pub mod event;
/// Scroll, keyboard and combined zoom sources.
pub mod source;

pub use event::InputEvent;
pub use source::{CombinedZoom, KeyboardZoom, ScrollZoom, ZoomInputSource};
