//! Section kick animations.
//!
//! A kick is a relative rotation tween: it adds a fixed rotation to one
//! section mesh over a fixed duration along an easing curve. Tweens run on
//! their own timeline (start time + duration against the engine clock) and
//! are advanced by the [`TweenScheduler`] once per frame, before drawing.
//!
//! Tweens are incremental: each advance adds only the rotation gained since
//! the previous advance. That makes overlapping tweens on one mesh, and the
//! frame driver's idle spin, simply add up in any order.

/// Schedules and advances running tweens.
pub mod scheduler;
/// A single relative rotation tween.
pub mod tween;

pub use scheduler::TweenScheduler;
pub use tween::RotationTween;
