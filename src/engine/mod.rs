//! Scene state and the loop that drives it.
//!
//! [`AnimationState`] owns everything that changes while the page is open:
//! the scene, the camera rig, input, running tweens, and the clock. Each
//! host signal maps to one handler on it; [`SceneLoop`] feeds it events
//! in arrival order and runs frames against a
//! [`Renderer`](crate::renderer::Renderer).

/// Scroll-driven material tint.
pub mod color;
mod event_loop;
mod frame;
/// Viewport size and page height.
pub mod viewport;

pub use event_loop::SceneLoop;
use glam::Vec2;

use self::viewport::Viewport;
use crate::animation::{RotationTween, TweenScheduler};
use crate::camera::ParallaxRig;
use crate::input::{InputTracker, SectionChange};
use crate::options::Options;
use crate::renderer::SurfaceSize;
use crate::scene::builder::build_scene;
use crate::scene::Scene;
use crate::util::clock::Clock;

/// All mutable state of the running scene.
pub struct AnimationState {
    options: Options,
    viewport: Viewport,
    scene: Scene,
    rig: ParallaxRig,
    input: InputTracker,
    tweens: TweenScheduler,
    clock: Box<dyn Clock>,
    previous_time: f64,
}

impl AnimationState {
    /// Build the scene for `options` and start at the top of the page.
    #[must_use]
    pub fn new(options: Options, viewport: Viewport, clock: Box<dyn Clock>) -> Self {
        let scene = build_scene(&options);
        let rig = ParallaxRig::new(&options.camera, viewport.aspect());
        log::info!(
            "scene ready: {} sections, {} particles, page height {}",
            scene.section_count(),
            scene.particles().positions.len(),
            viewport.total_scrollable_height(),
        );
        let previous_time = clock.elapsed();
        Self {
            options,
            viewport,
            scene,
            rig,
            input: InputTracker::new(),
            tweens: TweenScheduler::new(),
            clock,
            previous_time,
        }
    }

    /// Apply a viewport resize. Returns the new surface size, or `None`
    /// when the resize was ignored (zero area).
    pub fn handle_resize(
        &mut self,
        width: f32,
        height: f32,
        device_pixel_ratio: f32,
    ) -> Option<SurfaceSize> {
        if !self.viewport.resize(width, height, device_pixel_ratio) {
            log::debug!("ignoring zero-area resize {width}x{height}");
            return None;
        }
        self.rig.camera.set_aspect(self.viewport.aspect());
        Some(self.viewport.surface_size())
    }

    /// Record a scroll offset: kick the entered section's mesh if the
    /// section changed, and retint the shared material.
    pub fn handle_scroll(&mut self, scroll_y: f32) -> Option<SectionChange> {
        let change = self.input.on_scroll(scroll_y, self.viewport.height());
        if let Some(change) = change {
            self.kick_section(change);
        }
        let color = color::scroll_color(
            scroll_y,
            &self.viewport,
            self.options.display.clamp_scroll_color,
        );
        self.scene.set_material_color(color);
        change
    }

    fn kick_section(&mut self, change: SectionChange) {
        log::debug!("section {} -> {}", change.from, change.to);
        let target = match usize::try_from(change.to) {
            Ok(idx) if idx < self.scene.section_count() => idx,
            _ => {
                log::warn!("no mesh for section {}, skipping kick", change.to);
                return;
            }
        };
        let tween = RotationTween::kick(
            &self.options.animation,
            target,
            self.clock.elapsed(),
        );
        self.tweens.start(tween);
    }

    /// Record a cursor position in logical pixels.
    pub fn handle_cursor(&mut self, x: f32, y: f32) {
        self.input.on_cursor_moved(
            x,
            y,
            self.viewport.width(),
            self.viewport.height(),
        );
    }

    /// Set the color of the meshes and the particles.
    pub fn set_material_color(&mut self, color: [f32; 3]) {
        self.scene.set_material_color(color);
        self.scene.set_particle_color(color);
    }

    /// Options the state was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The camera rig.
    #[must_use]
    pub fn rig(&self) -> &ParallaxRig {
        &self.rig
    }

    /// Scroll and cursor state.
    #[must_use]
    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    /// Running tweens.
    #[must_use]
    pub fn tweens(&self) -> &TweenScheduler {
        &self.tweens
    }

    /// Where the parallax group is heading.
    #[must_use]
    pub fn parallax_target(&self) -> Vec2 {
        self.input.parallax_target()
    }
}

impl std::fmt::Debug for AnimationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationState")
            .field("viewport", &self.viewport)
            .field("input", &self.input)
            .field("tweens", &self.tweens.len())
            .field("previous_time", &self.previous_time)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::viewport::DocumentMetrics;
    use super::*;
    use crate::util::clock::ManualClock;

    fn state() -> AnimationState {
        let mut options = Options::default();
        options.scene.seed = Some(7);
        let viewport = Viewport::new(
            1200.0,
            800.0,
            1.0,
            options.display.max_pixel_ratio,
            &DocumentMetrics::for_sections(3, 800.0),
        );
        AnimationState::new(options, viewport, Box::new(ManualClock::new()))
    }

    #[test]
    fn resize_updates_aspect_and_caps_ratio() {
        let mut state = state();
        let size = state.handle_resize(1000.0, 500.0, 3.0).unwrap();
        assert_eq!(size.pixel_ratio, 2.0);
        assert_eq!(state.rig().camera.aspect, 2.0);
        assert!(state.handle_resize(0.0, 0.0, 1.0).is_none());
        assert_eq!(state.rig().camera.aspect, 2.0);
    }

    #[test]
    fn jump_kicks_only_destination() {
        let mut state = state();
        let change = state.handle_scroll(1600.0).unwrap();
        assert_eq!((change.from, change.to), (0, 2));
        assert_eq!(state.tweens().len(), 1);
        assert_eq!(state.tweens().active()[0].target(), 2);
    }

    #[test]
    fn scroll_within_section_does_not_kick() {
        let mut state = state();
        assert!(state.handle_scroll(300.0).is_none());
        assert!(state.tweens().is_empty());
        assert_eq!(state.scene().material().color[2], 1.0);
    }

    #[test]
    fn overscroll_past_last_section_starts_nothing() {
        let mut state = state();
        let change = state.handle_scroll(2400.0).unwrap();
        assert_eq!(change.to, 3);
        assert!(state.tweens().is_empty());
    }

    #[test]
    fn material_color_reaches_particles() {
        let mut state = state();
        state.set_material_color([0.2, 0.4, 0.6]);
        assert_eq!(state.scene().material().color, [0.2, 0.4, 0.6]);
        assert_eq!(state.scene().particles().material.color, [0.2, 0.4, 0.6]);
    }

    #[test]
    fn cursor_sets_parallax_target() {
        let mut state = state();
        state.handle_cursor(1200.0, 0.0);
        assert_eq!(state.parallax_target(), Vec2::new(1.0, 1.0));
    }
}
