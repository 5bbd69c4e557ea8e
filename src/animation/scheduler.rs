//! Runs every in-flight tween against the scene.

use super::tween::RotationTween;
use crate::scene::Scene;

/// The set of running tweens. Tweens are never cancelled; each one runs
/// until its curve is fully applied and is then dropped.
#[derive(Debug, Clone, Default)]
pub struct TweenScheduler {
    active: Vec<RotationTween>,
}

impl TweenScheduler {
    /// Empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tween. Overlapping tweens on the same mesh all run.
    pub fn start(&mut self, tween: RotationTween) {
        log::debug!("tween started on section {}", tween.target());
        self.active.push(tween);
    }

    /// Apply every tween's increment up to clock time `now` and drop the
    /// ones that have finished.
    pub fn advance(&mut self, now: f64, scene: &mut Scene) {
        let meshes = scene.meshes_mut();
        self.active.retain_mut(|tween| {
            let increment = tween.step(now);
            if let Some(mesh) = meshes.get_mut(tween.target()) {
                mesh.transform.rotation += increment;
            }
            !tween.is_complete()
        });
    }

    /// Number of running tweens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no tween is running.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Running tweens.
    #[must_use]
    pub fn active(&self) -> &[RotationTween] {
        &self.active
    }
}
