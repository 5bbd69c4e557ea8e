use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Layout of the section meshes and the particle field.
pub struct SceneOptions {
    /// Vertical distance between consecutive sections in world units.
    /// Negative values stack sections downward.
    #[schemars(title = "Section Spacing")]
    pub objects_distance: f32,
    /// Horizontal offset of each mesh; the sign alternates per section
    /// starting with `+`.
    #[schemars(title = "Horizontal Offset", range(min = 0.0, max = 5.0))]
    pub horizontal_offset: f32,
    /// Number of particles.
    #[schemars(title = "Particles", range(min = 0, max = 5000))]
    pub particle_count: u32,
    /// Width of the square X/Z extent particles are scattered over.
    #[schemars(title = "Particle Spread", range(min = 1.0, max = 50.0))]
    pub particle_spread: f32,
    /// How far above the first section (as a fraction of the section
    /// spacing) the particle field starts.
    #[schemars(skip)]
    pub particle_headroom: f32,
    /// RNG seed for particle placement. `None` draws from OS entropy.
    #[schemars(skip)]
    pub seed: Option<u64>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            objects_distance: -5.0,
            horizontal_offset: 2.0,
            particle_count: 200,
            particle_spread: 10.0,
            particle_headroom: 0.4,
            seed: None,
        }
    }
}
