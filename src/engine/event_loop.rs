use std::collections::VecDeque;

use super::AnimationState;
use crate::input::SceneEvent;
use crate::renderer::Renderer;

/// Single-threaded event queue driving an [`AnimationState`].
///
/// The queue always holds exactly one [`SceneEvent::FrameTick`]. Handling
/// it draws a frame and posts a fresh tick behind whatever arrived in the
/// meantime, so host events and frames interleave in arrival order.
#[derive(Debug)]
pub struct SceneLoop<R: Renderer> {
    state: AnimationState,
    renderer: R,
    queue: VecDeque<SceneEvent>,
}

impl<R: Renderer> SceneLoop<R> {
    /// Size the renderer's surface to the state's viewport and queue the
    /// first frame.
    #[must_use]
    pub fn new(state: AnimationState, mut renderer: R) -> Self {
        renderer.resize(state.viewport().surface_size());
        let mut queue = VecDeque::new();
        queue.push_back(SceneEvent::FrameTick);
        Self {
            state,
            renderer,
            queue,
        }
    }

    /// Queue a host event.
    pub fn post(&mut self, event: SceneEvent) {
        self.queue.push_back(event);
    }

    /// Handle queued events up to and including the next frame. Returns
    /// the number of events handled.
    ///
    /// # Errors
    ///
    /// The renderer's error for the frame. The next frame is already
    /// queued, so the loop can keep pumping.
    pub fn pump(&mut self) -> Result<usize, R::Error> {
        let mut handled = 0;
        while let Some(event) = self.queue.pop_front() {
            handled += 1;
            match event {
                SceneEvent::Resize {
                    width,
                    height,
                    device_pixel_ratio,
                } => {
                    if let Some(size) =
                        self.state.handle_resize(width, height, device_pixel_ratio)
                    {
                        self.renderer.resize(size);
                    }
                }
                SceneEvent::Scroll { y } => {
                    let _ = self.state.handle_scroll(y);
                }
                SceneEvent::CursorMoved { x, y } => self.state.handle_cursor(x, y),
                SceneEvent::SetMaterialColor(color) => {
                    self.state.set_material_color(color);
                }
                SceneEvent::FrameTick => {
                    self.queue.push_back(SceneEvent::FrameTick);
                    self.state.frame(&mut self.renderer)?;
                    break;
                }
            }
        }
        Ok(handled)
    }

    /// Pump until `frames` frames have been drawn.
    ///
    /// # Errors
    ///
    /// Stops at the first renderer error.
    pub fn run_frames(&mut self, frames: usize) -> Result<(), R::Error> {
        for _ in 0..frames {
            let _ = self.pump()?;
        }
        Ok(())
    }

    /// Events waiting to be handled, including the pending frame tick.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// The driven state.
    #[must_use]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// The renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable renderer, for host-side surface management.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::engine::viewport::{DocumentMetrics, Viewport};
    use crate::options::Options;
    use crate::renderer::RecordingRenderer;
    use crate::util::clock::ManualClock;

    fn scene_loop(clock: &ManualClock) -> SceneLoop<RecordingRenderer> {
        let mut options = Options::default();
        options.scene.seed = Some(11);
        let viewport = Viewport::new(
            1200.0,
            800.0,
            1.0,
            2.0,
            &DocumentMetrics::for_sections(3, 800.0),
        );
        let state = AnimationState::new(options, viewport, Box::new(clock.clone()));
        SceneLoop::new(state, RecordingRenderer::new())
    }

    #[test]
    fn initial_surface_matches_viewport() {
        let scene_loop = scene_loop(&ManualClock::new());
        assert_eq!(scene_loop.renderer().surfaces.len(), 1);
        assert_eq!(scene_loop.renderer().surfaces[0].width, 1200.0);
        assert_eq!(scene_loop.pending(), 1);
    }

    #[test]
    fn frame_tick_requeues_behind_posted_events() {
        let clock = ManualClock::new();
        let mut scene_loop = scene_loop(&clock);
        scene_loop.post(SceneEvent::Scroll { y: 100.0 });
        // First pump draws the queued frame only.
        assert_eq!(scene_loop.pump().unwrap(), 1);
        assert_eq!(scene_loop.state().input().scroll_y(), 0.0);
        // Second pump handles the scroll, then draws.
        assert_eq!(scene_loop.pump().unwrap(), 2);
        assert_eq!(scene_loop.state().input().scroll_y(), 100.0);
        assert_eq!(scene_loop.renderer().frames.len(), 2);
        assert_eq!(scene_loop.pending(), 1);
    }

    #[test]
    fn jump_to_last_section_spins_only_last_mesh() {
        let clock = ManualClock::new();
        let mut scene_loop = scene_loop(&clock);
        scene_loop.post(SceneEvent::Scroll { y: 1600.0 });
        scene_loop.run_frames(2).unwrap();
        assert_eq!(scene_loop.state().tweens().len(), 1);

        clock.advance(3.0);
        scene_loop.run_frames(1).unwrap();

        let frame = scene_loop.renderer().last_frame().unwrap();
        let idle = Vec3::new(3.0 * 0.1, 3.0 * 0.12, 0.0);
        assert!((frame.mesh_rotations[0] - idle).length() < 1e-4);
        assert!((frame.mesh_rotations[1] - idle).length() < 1e-4);
        let kicked = Vec3::new(6.0, 3.0, 1.5) + idle;
        assert!((frame.mesh_rotations[2] - kicked).length() < 1e-4);
        assert_eq!(frame.material_color, [1.0, 0.0, 1.0]);
    }

    #[test]
    fn stepping_through_sections_kicks_each_once() {
        let clock = ManualClock::new();
        let mut scene_loop = scene_loop(&clock);
        for y in [100.0, 500.0, 700.0, 900.0, 1300.0, 1500.0] {
            scene_loop.post(SceneEvent::Scroll { y });
        }
        scene_loop.run_frames(2).unwrap();
        let targets: Vec<usize> = scene_loop
            .state()
            .tweens()
            .active()
            .iter()
            .map(|t| t.target())
            .collect();
        assert_eq!(targets, vec![1, 2]);
    }

    #[test]
    fn resize_reaches_renderer_capped() {
        let clock = ManualClock::new();
        let mut scene_loop = scene_loop(&clock);
        scene_loop.post(SceneEvent::Resize {
            width: 640.0,
            height: 480.0,
            device_pixel_ratio: 3.0,
        });
        scene_loop.post(SceneEvent::Resize {
            width: 0.0,
            height: 0.0,
            device_pixel_ratio: 1.0,
        });
        scene_loop.run_frames(2).unwrap();
        let surfaces = &scene_loop.renderer().surfaces;
        assert_eq!(surfaces.len(), 2);
        assert_eq!(surfaces[1].pixel_ratio, 2.0);
        assert_eq!(surfaces[1].physical(), (1280, 960));
        let aspect = scene_loop.renderer().last_frame().unwrap().camera.aspect;
        assert!((aspect - 640.0 / 480.0).abs() < 1e-6);
    }

    #[test]
    fn material_color_event_recolors_frame() {
        let clock = ManualClock::new();
        let mut scene_loop = scene_loop(&clock);
        scene_loop.post(SceneEvent::SetMaterialColor([0.1, 0.2, 0.3]));
        scene_loop.run_frames(2).unwrap();
        let frame = scene_loop.renderer().last_frame().unwrap();
        assert_eq!(frame.material_color, [0.1, 0.2, 0.3]);
    }
}
