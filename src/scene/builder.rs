//! Builds the fixed scene from options.
//!
//! Construction is unconditional: every option combination produces a
//! scene (zero particles and an empty gradient are both valid).

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    DirectionalLight, ParticleCloud, ParticleMaterial, Scene, SectionMesh,
    SectionShape, ToonGradient, ToonMaterial, Transform,
};
use crate::options::Options;

/// Build the scene: one mesh per section, the particle field spanning all
/// sections, the light, and the shared material.
#[must_use]
pub fn build_scene(options: &Options) -> Scene {
    let mut rng = match options.scene.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let meshes = section_meshes(
        options.scene.objects_distance,
        options.scene.horizontal_offset,
    );
    let positions = scatter_particles(
        &mut rng,
        options.scene.particle_count as usize,
        options.scene.particle_spread,
        options.scene.objects_distance,
        options.scene.particle_headroom,
        meshes.len(),
    );

    let particles = ParticleCloud {
        positions,
        material: ParticleMaterial {
            color: options.material.particle_color.rgb(),
            size: options.material.particle_size,
        },
    };
    let light = DirectionalLight {
        color: options.lighting.color.rgb(),
        intensity: options.lighting.intensity,
        position: Vec3::from_array(options.lighting.position),
    };
    let material = ToonMaterial {
        color: options.material.color.rgb(),
        gradient: ToonGradient::new(&options.material.gradient_levels),
    };

    log::debug!(
        "built scene: {} sections, {} particles",
        meshes.len(),
        particles.positions.len()
    );
    Scene::new(meshes, particles, light, material)
}

/// Section meshes at `y = index × distance`, alternating left/right.
#[must_use]
pub fn section_meshes(distance: f32, horizontal_offset: f32) -> Vec<SectionMesh> {
    SectionShape::ALL
        .iter()
        .enumerate()
        .map(|(i, &shape)| {
            let side = if i % 2 == 0 { 1.0 } else { -1.0 };
            SectionMesh {
                shape,
                transform: Transform::at(Vec3::new(
                    side * horizontal_offset,
                    distance * i as f32,
                    0.0,
                )),
            }
        })
        .collect()
}

/// Scatter `count` points over a `spread × spread` square in X/Z and over
/// the vertical span of all `sections`, starting `headroom × |distance|`
/// above the first section.
pub fn scatter_particles(
    rng: &mut impl Rng,
    count: usize,
    spread: f32,
    distance: f32,
    headroom: f32,
    sections: usize,
) -> Vec<Vec3> {
    let top = -distance * headroom;
    let span = -distance * sections as f32;
    (0..count)
        .map(|_| {
            let x = (rng.random::<f32>() - 0.5) * spread;
            let y = top - rng.random::<f32>() * span;
            let z = (rng.random::<f32>() - 0.5) * spread;
            Vec3::new(x, y, z)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_options() -> Options {
        let mut options = Options::default();
        options.scene.seed = Some(42);
        options
    }

    #[test]
    fn meshes_alternate_and_descend() {
        let meshes = section_meshes(-5.0, 2.0);
        let positions: Vec<Vec3> =
            meshes.iter().map(|m| m.transform.position).collect();
        assert_eq!(
            positions,
            vec![
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(-2.0, -5.0, 0.0),
                Vec3::new(2.0, -10.0, 0.0),
            ]
        );
        assert_eq!(meshes[1].shape, SectionShape::Cone);
        assert!(meshes.iter().all(|m| m.transform.rotation == Vec3::ZERO));
    }

    #[test]
    fn particles_span_every_section() {
        let scene = build_scene(&seeded_options());
        let positions = &scene.particles().positions;
        assert_eq!(positions.len(), 200);

        for p in positions {
            assert!(p.x >= -5.0 && p.x <= 5.0);
            assert!(p.z >= -5.0 && p.z <= 5.0);
            // top at 2.0, bottom at 2.0 - 15.0
            assert!(p.y <= 2.0 && p.y >= -13.0);
        }
        // Every section band holds some particles.
        for band in [(-2.5, 2.0), (-7.5, -2.5), (-13.0, -7.5)] {
            assert!(positions.iter().any(|p| p.y > band.0 && p.y <= band.1));
        }
    }

    #[test]
    fn same_seed_same_scene() {
        let a = build_scene(&seeded_options());
        let b = build_scene(&seeded_options());
        assert_eq!(a, b);
    }

    #[test]
    fn material_and_light_follow_options() {
        let scene = build_scene(&seeded_options());
        assert_eq!(scene.material().color[0], 1.0);
        assert!(scene.material().gradient.is_quantized());
        assert_eq!(scene.particles().material.color, [1.0, 1.0, 1.0]);
        assert_eq!(scene.particles().material.size, 0.03);
        assert_eq!(scene.light().position, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(scene.light().intensity, 1.0);
        assert_eq!(scene.section_count(), 3);
    }

    #[test]
    fn zero_particles_is_valid() {
        let mut options = seeded_options();
        options.scene.particle_count = 0;
        assert!(build_scene(&options).particles().positions.is_empty());
    }
}
