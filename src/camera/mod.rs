//! Camera system: a perspective camera nested in a parallax group.
//!
//! The camera itself only ever moves vertically (tracking scroll); the
//! group it hangs from eases toward the cursor, which is what produces the
//! parallax.

/// Perspective camera, per-frame view snapshot, and GPU uniform.
pub mod core;
/// Parallax group holding the camera.
pub mod parallax;

pub use self::core::{CameraUniform, CameraView, PerspectiveCamera};
pub use self::parallax::ParallaxRig;
