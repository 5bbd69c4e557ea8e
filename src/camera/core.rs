use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Perspective camera looking down -Z, positioned relative to its parent
/// group.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Position relative to the parent group.
    pub position: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    /// Camera from options, pulled back `distance` along +Z.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, options.distance),
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    /// Recompute the cached projection matrix after changing `aspect`,
    /// `fovy`, or the clip planes.
    pub fn update_projection(&mut self) {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        self.projection = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
    }

    /// Set the aspect ratio and refresh the projection.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection();
    }

    /// The cached projection matrix.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// World-space eye position when hung from a group at `group_position`.
    #[must_use]
    pub fn world_position(&self, group_position: Vec3) -> Vec3 {
        group_position + self.position
    }

    /// Combined view-projection matrix for a group at `group_position`.
    #[must_use]
    pub fn view_proj(&self, group_position: Vec3) -> Mat4 {
        let eye = self.world_position(group_position);
        let view = Mat4::look_to_rh(eye, Vec3::NEG_Z, Vec3::Y);
        self.projection * view
    }
}

/// Snapshot of the camera handed to a renderer for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    /// Combined view-projection matrix.
    pub view_proj: Mat4,
    /// World-space eye position.
    pub eye: Vec3,
    /// Viewport aspect ratio.
    pub aspect: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position (w unused).
    pub position: [f32; 4],
    /// x = aspect ratio; remaining lanes are padding.
    pub viewport: [f32; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 4],
            viewport: [1.0, 0.0, 0.0, 0.0],
        }
    }

    /// Update uniform fields from the given frame view.
    pub fn update(&mut self, view: &CameraView) {
        self.view_proj = view.view_proj.to_cols_array_2d();
        self.position = view.eye.extend(1.0).to_array();
        self.viewport[0] = view.aspect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_screen_center() {
        let camera = PerspectiveCamera::new(&CameraOptions::default(), 1.5);
        let clip = camera.view_proj(Vec3::ZERO) * glam::Vec4::W;
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn aspect_change_updates_projection() {
        let mut camera =
            PerspectiveCamera::new(&CameraOptions::default(), 1.0);
        let before = camera.projection();
        camera.set_aspect(2.0);
        assert_eq!(camera.aspect, 2.0);
        assert_ne!(camera.projection(), before);
        // x scale halves when the aspect doubles
        let ratio = before.x_axis.x / camera.projection().x_axis.x;
        assert!((ratio - 2.0).abs() < 1e-5);
    }

    #[test]
    fn group_offset_moves_eye() {
        let camera = PerspectiveCamera::new(&CameraOptions::default(), 1.0);
        let eye = camera.world_position(Vec3::new(0.5, -0.25, 0.0));
        assert_eq!(eye, Vec3::new(0.5, -0.25, 6.0));
    }
}
