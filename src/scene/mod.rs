//! The scene graph: three section meshes, a particle cloud, one directional
//! light, and the toon material the meshes share.
//!
//! A [`Scene`] is built once by [`builder::build_scene`] and then mutated in
//! place (mesh rotations, material color) for the lifetime of the viewer.
//! It holds no GPU resources; renderers read it each frame.

pub mod builder;
pub mod gradient;
pub mod mesh_gen;

use glam::{EulerRot, Mat4, Quat, Vec3};

pub use self::gradient::ToonGradient;
pub use self::mesh_gen::{MeshData, MeshVertex};

/// Position plus XYZ Euler rotation (radians). Rotation is applied X, then
/// Y, then Z in the object's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// World position.
    pub position: Vec3,
    /// Euler angles in radians.
    pub rotation: Vec3,
}

impl Transform {
    /// Transform at `position` with no rotation.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    /// Model matrix (translation × rotation).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(rotation, self.position)
    }
}

/// Which primitive a section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionShape {
    /// Torus, radius 1, tube 0.4.
    Torus,
    /// Cone, radius 1, height 2.
    Cone,
    /// (2,3) torus knot, radius 0.8, tube 0.35.
    TorusKnot,
}

impl SectionShape {
    /// Shapes in section order.
    pub const ALL: [SectionShape; 3] =
        [SectionShape::Torus, SectionShape::Cone, SectionShape::TorusKnot];

    /// Triangle mesh for this shape.
    #[must_use]
    pub fn mesh(self) -> MeshData {
        match self {
            Self::Torus => mesh_gen::torus(1.0, 0.4, 16, 60),
            Self::Cone => mesh_gen::cone(1.0, 2.0, 32),
            Self::TorusKnot => mesh_gen::torus_knot(0.8, 0.35, 100, 16, 2, 3),
        }
    }
}

/// A mesh bound to one scroll section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionMesh {
    /// Shape drawn for this section.
    pub shape: SectionShape,
    /// Placement and current rotation.
    pub transform: Transform,
}

/// The toon material shared by every section mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct ToonMaterial {
    /// Base color. Channels may leave [0, 1] when scroll overshoots.
    pub color: [f32; 3],
    /// Lighting quantization lookup.
    pub gradient: ToonGradient,
}

/// Color and size of the particle points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleMaterial {
    /// Point color.
    pub color: [f32; 3],
    /// Point size in world units (shrinks with distance).
    pub size: f32,
}

/// A static cloud of points.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleCloud {
    /// Point positions.
    pub positions: Vec<Vec3>,
    /// Point appearance.
    pub material: ParticleMaterial,
}

/// A light shining from `position` toward the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Light color.
    pub color: [f32; 3],
    /// Intensity multiplier.
    pub intensity: f32,
    /// Light position; only its direction matters.
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit vector pointing from the lit surface toward the light.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or(Vec3::Y)
    }
}

/// Everything that gets drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    meshes: Vec<SectionMesh>,
    particles: ParticleCloud,
    light: DirectionalLight,
    material: ToonMaterial,
}

impl Scene {
    /// Assemble a scene from its parts.
    #[must_use]
    pub fn new(
        meshes: Vec<SectionMesh>,
        particles: ParticleCloud,
        light: DirectionalLight,
        material: ToonMaterial,
    ) -> Self {
        Self {
            meshes,
            particles,
            light,
            material,
        }
    }

    /// Section meshes in section order.
    #[must_use]
    pub fn meshes(&self) -> &[SectionMesh] {
        &self.meshes
    }

    /// Mutable section meshes.
    pub fn meshes_mut(&mut self) -> &mut [SectionMesh] {
        &mut self.meshes
    }

    /// Number of sections (one per mesh).
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.meshes.len()
    }

    /// The particle cloud.
    #[must_use]
    pub fn particles(&self) -> &ParticleCloud {
        &self.particles
    }

    /// The directional light.
    #[must_use]
    pub fn light(&self) -> &DirectionalLight {
        &self.light
    }

    /// The shared toon material.
    #[must_use]
    pub fn material(&self) -> &ToonMaterial {
        &self.material
    }

    /// Set the shared mesh material color.
    pub fn set_material_color(&mut self, color: [f32; 3]) {
        self.material.color = color;
    }

    /// Set the particle color.
    pub fn set_particle_color(&mut self, color: [f32; 3]) {
        self.particles.material.color = color;
    }
}
