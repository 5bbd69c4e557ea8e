//! Drawing the scene.
//!
//! The engine only talks to the [`Renderer`] trait: "resize the output
//! surface" and "draw this scene from this camera". [`gpu::GpuRenderer`]
//! does it with wgpu; [`RecordingRenderer`] just remembers what it was
//! asked to draw, which is what the headless tests assert against.

/// wgpu renderer combining the toon and particle passes.
pub mod gpu;
/// Particle billboard pass.
pub mod particles;
/// Shared pipeline state (depth format, vertex layouts).
pub mod pipeline_util;
/// Toon-shaded mesh pass.
pub mod toon;

mod recording;

pub use recording::{FrameRecord, RecordingRenderer};

use crate::camera::CameraView;
use crate::scene::Scene;

/// Logical output size plus the pixel ratio applied to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// Logical width.
    pub width: f32,
    /// Logical height.
    pub height: f32,
    /// Physical pixels per logical pixel (already capped).
    pub pixel_ratio: f32,
}

impl SurfaceSize {
    /// Physical pixel dimensions, never smaller than 1×1.
    #[must_use]
    pub fn physical(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio).round().max(1.0) as u32;
        let h = (self.height * self.pixel_ratio).round().max(1.0) as u32;
        (w, h)
    }
}

/// Something that can draw a [`Scene`] into an output surface.
pub trait Renderer {
    /// Error produced by a failed draw.
    type Error;

    /// Match the output surface to a new viewport size.
    fn resize(&mut self, size: SurfaceSize);

    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Implementation-defined; the GPU renderer reports surface loss.
    fn render(
        &mut self,
        scene: &Scene,
        camera: &CameraView,
    ) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_size_applies_ratio() {
        let size = SurfaceSize {
            width: 800.0,
            height: 600.0,
            pixel_ratio: 2.0,
        };
        assert_eq!(size.physical(), (1600, 1200));
    }

    #[test]
    fn physical_size_is_never_empty() {
        let size = SurfaceSize {
            width: 0.0,
            height: 0.2,
            pixel_ratio: 1.0,
        };
        assert_eq!(size.physical(), (1, 1));
    }
}
