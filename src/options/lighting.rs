use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::color::HexColor;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// The single directional light.
pub struct LightingOptions {
    /// Light color.
    #[schemars(skip)]
    pub color: HexColor,
    /// Light intensity multiplier.
    #[schemars(title = "Intensity", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub intensity: f32,
    /// Light position; the light shines from here toward the origin.
    #[schemars(skip)]
    pub position: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            color: HexColor::WHITE,
            intensity: 1.0,
            position: [1.0, 1.0, 0.0],
        }
    }
}
