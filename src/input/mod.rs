//! Input handling: platform-agnostic scene events and the tracker that
//! turns scroll and cursor positions into section indices and parallax
//! targets.

/// Platform-agnostic scene events.
pub mod event;
/// Scroll offset, section index, and normalized cursor state.
pub mod tracker;

pub use event::SceneEvent;
pub use tracker::{InputTracker, SectionChange};
