use super::AnimationState;
use crate::renderer::Renderer;

/// Camera height inside the rig for a scroll offset: one section of
/// scroll moves the camera one section spacing.
fn camera_height(scroll_y: f32, viewport_height: f32, objects_distance: f32) -> f32 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    scroll_y * (objects_distance / viewport_height)
}

impl AnimationState {
    /// Advance one frame and hand the scene to `renderer`.
    ///
    /// Order: clock delta, tweens, camera height, parallax, idle spin,
    /// draw.
    ///
    /// # Errors
    ///
    /// Whatever `renderer` reports. The state has already advanced.
    pub fn frame<R: Renderer>(&mut self, renderer: &mut R) -> Result<(), R::Error> {
        let elapsed = self.clock.elapsed();
        let delta = (elapsed - self.previous_time) as f32;
        self.previous_time = elapsed;

        self.tweens.advance(elapsed, &mut self.scene);

        self.rig.set_camera_height(camera_height(
            self.input.scroll_y(),
            self.viewport.height(),
            self.options.scene.objects_distance,
        ));
        self.rig.follow(self.input.parallax_target(), delta);

        let [spin_x, spin_y] = self.options.animation.idle_spin;
        for mesh in self.scene.meshes_mut() {
            mesh.transform.rotation.x += delta * spin_x;
            mesh.transform.rotation.y += delta * spin_y;
        }

        renderer.render(&self.scene, &self.rig.view())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::engine::viewport::{DocumentMetrics, Viewport};
    use crate::options::Options;
    use crate::renderer::RecordingRenderer;
    use crate::util::clock::{Clock, ManualClock};

    fn state(clock: &ManualClock) -> AnimationState {
        let mut options = Options::default();
        options.scene.seed = Some(3);
        let viewport = Viewport::new(
            1200.0,
            800.0,
            1.0,
            2.0,
            &DocumentMetrics::for_sections(3, 800.0),
        );
        AnimationState::new(options, viewport, Box::new(clock.clone()))
    }

    #[test]
    fn camera_follows_scroll() {
        assert!((camera_height(1600.0, 800.0, -5.0) + 10.0).abs() < 1e-5);
        assert_eq!(camera_height(100.0, 0.0, -5.0), 0.0);

        let clock = ManualClock::new();
        let mut state = state(&clock);
        let mut renderer = RecordingRenderer::new();
        let _ = state.handle_scroll(800.0);
        state.frame(&mut renderer).unwrap();
        assert!((state.rig().camera.position.y + 5.0).abs() < 1e-5);
    }

    #[test]
    fn idle_spin_accumulates_per_frame() {
        let clock = ManualClock::new();
        let mut state = state(&clock);
        let mut renderer = RecordingRenderer::new();
        let dt = 1.0 / 60.0;
        for _ in 0..120 {
            clock.advance(dt);
            state.frame(&mut renderer).unwrap();
        }
        let elapsed = clock.elapsed() as f32;
        for mesh in state.scene().meshes() {
            let r = mesh.transform.rotation;
            assert!((r.x - elapsed * 0.1).abs() < 1e-4);
            assert!((r.y - elapsed * 0.12).abs() < 1e-4);
            assert_eq!(r.z, 0.0);
        }
        assert_eq!(renderer.frames.len(), 120);
    }

    #[test]
    fn deltas_stay_exact_after_two_days() {
        let clock = ManualClock::new();
        clock.set(172_800.0);
        let mut state = state(&clock);
        let mut renderer = RecordingRenderer::new();
        for _ in 0..60 {
            clock.advance(1.0 / 60.0);
            state.frame(&mut renderer).unwrap();
        }
        for mesh in state.scene().meshes() {
            assert!((mesh.transform.rotation.x - 0.1).abs() < 1e-4);
            assert!((mesh.transform.rotation.y - 0.12).abs() < 1e-4);
        }
    }

    #[test]
    fn tween_and_idle_spin_add() {
        let clock = ManualClock::new();
        let mut state = state(&clock);
        let mut renderer = RecordingRenderer::new();
        let _ = state.handle_scroll(800.0);
        for _ in 0..50 {
            clock.advance(0.1);
            state.frame(&mut renderer).unwrap();
        }
        let rotation = state.scene().meshes()[1].transform.rotation;
        let idle = Vec3::new(5.0 * 0.1, 5.0 * 0.12, 0.0);
        assert!((rotation - (Vec3::new(6.0, 3.0, 1.5) + idle)).length() < 1e-3);
        assert!(state.tweens().is_empty());
    }

    #[test]
    fn parallax_converges_on_cursor() {
        let clock = ManualClock::new();
        let mut state = state(&clock);
        let mut renderer = RecordingRenderer::new();
        // cursor at 80% across and 25% down -> (0.6, -0.5)
        state.handle_cursor(960.0, 200.0);
        for _ in 0..2000 {
            clock.advance(1.0 / 60.0);
            state.frame(&mut renderer).unwrap();
        }
        let group = state.rig().group_position;
        assert!((group.x - 0.6).abs() < 1e-3);
        assert!((group.y - 0.5).abs() < 1e-3);
    }
}
