//! Shared utilities for the scene engine.
//!
//! Helpers for frame timing, injectable clocks, easing curves, and color
//! parsing/mapping.

pub mod clock;
pub mod color;
pub mod easing;
pub mod frame_timing;
