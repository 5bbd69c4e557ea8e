use glam::{Vec2, Vec3};

use super::core::{CameraView, PerspectiveCamera};
use crate::options::CameraOptions;

/// A group node carrying the camera. The group eases toward the cursor;
/// the camera inside it tracks scroll.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxRig {
    /// World position of the group.
    pub group_position: Vec3,
    /// The camera, positioned relative to the group.
    pub camera: PerspectiveCamera,
    smoothing: f32,
    time_scale: f32,
}

impl ParallaxRig {
    /// Rig at the origin with a camera built from `options`.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            group_position: Vec3::ZERO,
            camera: PerspectiveCamera::new(options, aspect),
            smoothing: options.parallax_smoothing,
            time_scale: options.parallax_time_scale,
        }
    }

    /// Ease the group toward `target` (x, y) over a frame of `delta`
    /// seconds.
    ///
    /// Closes `smoothing × delta × time_scale` of the remaining distance,
    /// so the approach rate is the same at any frame rate.
    pub fn follow(&mut self, target: Vec2, delta: f32) {
        let k = self.smoothing * delta * self.time_scale;
        self.group_position.x += (target.x - self.group_position.x) * k;
        self.group_position.y += (target.y - self.group_position.y) * k;
    }

    /// Place the camera vertically inside the group.
    pub fn set_camera_height(&mut self, y: f32) {
        self.camera.position.y = y;
    }

    /// Snapshot for the renderer.
    #[must_use]
    pub fn view(&self) -> CameraView {
        CameraView {
            view_proj: self.camera.view_proj(self.group_position),
            eye: self.camera.world_position(self.group_position),
            aspect: self.camera.aspect,
        }
    }
}
