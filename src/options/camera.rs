use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and parallax parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Camera distance from the section plane along +Z.
    #[schemars(title = "Distance", range(min = 2.0, max = 20.0), extend("step" = 0.5))]
    pub distance: f32,
    /// Fraction of the remaining parallax offset closed per normalized
    /// time step.
    #[schemars(title = "Parallax Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub parallax_smoothing: f32,
    /// Frame delta multiplier that normalizes smoothing across refresh
    /// rates.
    #[schemars(skip)]
    pub parallax_time_scale: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 35.0,
            znear: 0.1,
            zfar: 100.0,
            distance: 6.0,
            parallax_smoothing: 0.1,
            parallax_time_scale: 5.0,
        }
    }
}
