use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Section kick tweens and idle spin.
pub struct AnimationOptions {
    /// Rotation added (radians, per X/Y/Z axis) when a section is entered.
    #[schemars(skip)]
    pub kick_rotation: [f32; 3],
    /// Duration of a section kick in seconds.
    #[schemars(title = "Kick Duration", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub kick_duration: f32,
    /// Easing curve of a section kick.
    #[schemars(title = "Kick Easing")]
    pub kick_easing: EasingFunction,
    /// Continuous spin rate (radians per second) around X and Y.
    #[schemars(skip)]
    pub idle_spin: [f32; 2],
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            kick_rotation: [6.0, 3.0, 1.5],
            kick_duration: 3.0,
            kick_easing: EasingFunction::ExpoOut,
            idle_spin: [0.1, 0.12],
        }
    }
}
