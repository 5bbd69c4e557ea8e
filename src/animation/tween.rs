//! A relative rotation tween on one section mesh.

use glam::Vec3;

use crate::options::AnimationOptions;
use crate::util::easing::EasingFunction;

/// Adds `delta` to a mesh rotation over `duration` seconds.
///
/// The tween remembers how much of the eased curve it has already applied
/// so every [`step`](Self::step) returns only the new increment.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationTween {
    /// Index of the section mesh being rotated.
    target: usize,
    /// Total rotation to add, in radians per axis.
    delta: Vec3,
    /// Clock time the tween started at, in seconds.
    start_time: f64,
    /// Duration in seconds.
    duration: f32,
    /// Curve mapping linear progress to eased progress.
    easing: EasingFunction,
    /// Eased progress already applied.
    applied: f32,
}

impl RotationTween {
    /// Tween starting at `start_time`.
    #[must_use]
    pub fn new(
        target: usize,
        delta: Vec3,
        start_time: f64,
        duration: f32,
        easing: EasingFunction,
    ) -> Self {
        Self {
            target,
            delta,
            start_time,
            duration,
            easing,
            applied: 0.0,
        }
    }

    /// The section-entry kick configured in `options`.
    #[must_use]
    pub fn kick(options: &AnimationOptions, target: usize, start_time: f64) -> Self {
        Self::new(
            target,
            Vec3::from_array(options.kick_rotation),
            start_time,
            options.kick_duration,
            options.kick_easing,
        )
    }

    /// Index of the mesh this tween rotates.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Normalized progress (0.0 to 1.0) at clock time `now`.
    #[must_use]
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) as f32 / self.duration).clamp(0.0, 1.0)
    }

    /// Whether the full delta has been applied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.applied >= 1.0
    }

    /// Rotation to add since the previous step.
    pub fn step(&mut self, now: f64) -> Vec3 {
        let eased = self.easing.evaluate(self.progress(now));
        let increment = eased - self.applied;
        self.applied = eased;
        self.delta * increment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kick(start: f64) -> RotationTween {
        RotationTween::kick(&AnimationOptions::default(), 2, start)
    }

    #[test]
    fn increments_sum_to_delta_regardless_of_cadence() {
        for steps in [1_u32, 7, 60, 500] {
            let mut tween = kick(0.0);
            let mut total = Vec3::ZERO;
            for i in 1..=steps {
                total += tween.step(3.0 * f64::from(i) / f64::from(steps));
            }
            assert!(tween.is_complete());
            assert!((total - Vec3::new(6.0, 3.0, 1.5)).length() < 1e-4);
        }
    }

    #[test]
    fn expo_out_front_loads_motion() {
        let mut tween = kick(1.0);
        let first = tween.step(1.3);
        // expo_out(0.1) = 0.5
        assert!((first.x - 3.0).abs() < 1e-4);
        assert!(!tween.is_complete());
    }

    #[test]
    fn late_start_keeps_sub_frame_precision() {
        let mut tween = kick(172_800.0);
        let first = tween.step(172_800.3);
        assert!((first.x - 3.0).abs() < 1e-3);
    }

    #[test]
    fn before_start_adds_nothing() {
        let mut tween = kick(5.0);
        assert_eq!(tween.step(4.0), Vec3::ZERO);
        assert_eq!(tween.progress(4.0), 0.0);
    }

    #[test]
    fn steps_after_completion_are_zero() {
        let mut tween = kick(0.0);
        let _ = tween.step(10.0);
        assert_eq!(tween.step(11.0), Vec3::ZERO);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut tween =
            RotationTween::new(0, Vec3::X, 0.0, 0.0, EasingFunction::Linear);
        assert_eq!(tween.step(0.0), Vec3::X);
        assert!(tween.is_complete());
    }
}
