use std::convert::Infallible;

use glam::Vec3;

use super::{Renderer, SurfaceSize};
use crate::camera::CameraView;
use crate::scene::Scene;

/// What a [`RecordingRenderer`] saw for one drawn frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    /// Camera used for the frame.
    pub camera: CameraView,
    /// Rotation of each section mesh.
    pub mesh_rotations: Vec<Vec3>,
    /// Shared material color.
    pub material_color: [f32; 3],
}

/// Renderer that draws nothing and records every call. Used to run the
/// scene headless.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    /// Every surface size passed to [`Renderer::resize`].
    pub surfaces: Vec<SurfaceSize>,
    /// Every frame passed to [`Renderer::render`].
    pub frames: Vec<FrameRecord>,
}

impl RecordingRenderer {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent frame, if any.
    #[must_use]
    pub fn last_frame(&self) -> Option<&FrameRecord> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    type Error = Infallible;

    fn resize(&mut self, size: SurfaceSize) {
        self.surfaces.push(size);
    }

    fn render(
        &mut self,
        scene: &Scene,
        camera: &CameraView,
    ) -> Result<(), Self::Error> {
        self.frames.push(FrameRecord {
            camera: *camera,
            mesh_rotations: scene
                .meshes()
                .iter()
                .map(|m| m.transform.rotation)
                .collect(),
            material_color: scene.material().color,
        });
        Ok(())
    }
}
