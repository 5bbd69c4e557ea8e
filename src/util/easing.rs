//! Easing functions for tween interpolation.
//!
//! Curve names follow the `<family>_<direction>` convention used by tween
//! libraries (`expo_out` is the decelerating exponential curve used by
//! section kicks).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for tween curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-out.
    CubicOut,
    /// Exponential ease-out: most of the motion happens in the first
    /// fifth of the duration, then a long settle.
    ExpoOut,
}

impl EasingFunction {
    /// Default easing function: exponential ease-out.
    pub const DEFAULT: EasingFunction = EasingFunction::ExpoOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Every curve maps 0 to exactly 0 and
    /// 1 to exactly 1.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            EasingFunction::ExpoOut => {
                // 2^(-10t) never reaches zero, so pin the endpoint.
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
