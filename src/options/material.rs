use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::color::HexColor;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Material", inline)]
#[serde(default)]
/// Shared toon material and particle appearance.
pub struct MaterialOptions {
    /// Initial color of the shared toon material.
    #[schemars(title = "Material Color", with = "String")]
    pub color: HexColor,
    /// Particle color.
    #[schemars(title = "Particle Color", with = "String")]
    pub particle_color: HexColor,
    /// Particle size in world units (attenuated with distance).
    #[schemars(title = "Particle Size", range(min = 0.005, max = 0.2), extend("step" = 0.005))]
    pub particle_size: f32,
    /// Grey levels of the toon gradient map, darkest first. Empty disables
    /// quantized shading.
    #[schemars(skip)]
    pub gradient_levels: Vec<u8>,
    /// Colors the viewer's color key cycles through.
    #[schemars(title = "Color Palette", with = "Vec<String>")]
    pub palette: Vec<HexColor>,
}

impl Default for MaterialOptions {
    fn default() -> Self {
        Self {
            color: HexColor([1.0, 237.0 / 255.0, 237.0 / 255.0]),
            particle_color: HexColor::WHITE,
            particle_size: 0.03,
            gradient_levels: vec![0, 128, 255],
            palette: vec![
                HexColor([1.0, 138.0 / 255.0, 101.0 / 255.0]),
                HexColor([127.0 / 255.0, 219.0 / 255.0, 1.0]),
                HexColor([179.0 / 255.0, 157.0 / 255.0, 219.0 / 255.0]),
                HexColor([1.0, 237.0 / 255.0, 237.0 / 255.0]),
            ],
        }
    }
}
