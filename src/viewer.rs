//! Standalone window backed by winit.
//!
//! The window stands in for the browser page: the mouse wheel and paging
//! keys scroll an emulated document `display.page_sections` viewports
//! tall, `C` steps through `material.palette`, and every native event is forwarded to the [`SceneLoop`] as a
//! [`SceneEvent`].
//!
//! ```no_run
//! # use scrollscape::Viewer;
//! Viewer::builder()
//!     .with_title("scrollscape")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    engine::viewport::{DocumentMetrics, Viewport},
    error::ScrollscapeError,
    options::Options,
    renderer::gpu::GpuRenderer,
    util::{clock::SystemClock, color::HexColor, frame_timing::FrameTiming},
    AnimationState, SceneEvent, SceneLoop,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with defaults (title "scrollscape", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "scrollscape".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::Viewer`] if the event loop cannot be
    /// created or exits abnormally.
    pub fn run(self) -> Result<(), ScrollscapeError> {
        let event_loop = EventLoop::new()
            .map_err(|e| ScrollscapeError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            scene_loop: None,
            frame_timing: FrameTiming::new(self.options.display.target_fps),
            options: Some(self.options),
            title: self.title,
            scale_factor: 1.0,
            page_scroll: 0.0,
            palette_index: 0,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ScrollscapeError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    scene_loop: Option<SceneLoop<GpuRenderer>>,
    frame_timing: FrameTiming,
    /// Taken when the scene is built on first resume.
    options: Option<Options>,
    title: String,
    scale_factor: f64,
    /// Emulated document scroll offset in logical pixels.
    page_scroll: f32,
    /// Next entry of `material.palette` the color key applies.
    palette_index: usize,
}

/// What a key press does.
#[derive(Debug, Clone, Copy, PartialEq)]
enum KeyAction {
    /// Scroll the page to an offset (clamped by the caller).
    ScrollTo(f32),
    /// Apply the next palette color.
    NextColor,
}

/// Map a key to its action given the current offset, the page height and
/// the line height, all in logical pixels.
fn key_action(code: KeyCode, scroll: f32, page: f32, line: f32) -> Option<KeyAction> {
    let target = match code {
        KeyCode::KeyC => return Some(KeyAction::NextColor),
        KeyCode::PageDown | KeyCode::Space => scroll + page,
        KeyCode::PageUp => scroll - page,
        KeyCode::ArrowDown => scroll + line,
        KeyCode::ArrowUp => scroll - line,
        KeyCode::Home => 0.0,
        KeyCode::End => f32::MAX,
        _ => return None,
    };
    Some(KeyAction::ScrollTo(target))
}

/// The color event for palette slot `index`, wrapping around.
fn palette_event(palette: &[HexColor], index: usize) -> Option<SceneEvent> {
    if palette.is_empty() {
        return None;
    }
    Some(SceneEvent::SetMaterialColor(palette[index % palette.len()].rgb()))
}

/// Logical size of a physical window size.
fn logical_size(inner: PhysicalSize<u32>, scale_factor: f64) -> (f32, f32) {
    let logical = inner.to_logical::<f32>(scale_factor);
    (logical.width, logical.height)
}

/// Scroll offset after a wheel event, in logical pixels. Wheel-down
/// reports negative deltas, which scroll the page down (positive offset).
fn wheel_scroll(
    delta: MouseScrollDelta,
    line_pixels: f32,
    scale_factor: f64,
) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * line_pixels,
        MouseScrollDelta::PixelDelta(pos) => -(pos.y / scale_factor) as f32,
    }
}

impl ViewerApp {
    /// Move the emulated page to `target`, clamped to the document, and
    /// forward the new offset if it changed.
    fn scroll_to(&mut self, target: f32) {
        let Some(scene_loop) = &mut self.scene_loop else {
            return;
        };
        let max = scene_loop.state().viewport().scroll_range().max(0.0);
        let y = target.clamp(0.0, max);
        if y != self.page_scroll {
            self.page_scroll = y;
            scene_loop.post(SceneEvent::Scroll { y });
        }
    }

    fn post_resize(&mut self, inner: PhysicalSize<u32>) {
        let (width, height) = logical_size(inner, self.scale_factor);
        if let Some(scene_loop) = &mut self.scene_loop {
            scene_loop.post(SceneEvent::Resize {
                width,
                height,
                device_pixel_ratio: self.scale_factor as f32,
            });
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        let Some(scene_loop) = &mut self.scene_loop else {
            return;
        };
        let state = scene_loop.state();
        let page = state.viewport().height();
        let line = state.options().display.wheel_line_pixels;
        match key_action(code, self.page_scroll, page, line) {
            Some(KeyAction::ScrollTo(target)) => self.scroll_to(target),
            Some(KeyAction::NextColor) => {
                let palette = &state.options().material.palette;
                if let Some(event) = palette_event(palette, self.palette_index) {
                    self.palette_index = self.palette_index.wrapping_add(1);
                    scene_loop.post(event);
                }
            }
            None => (),
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        if !self.frame_timing.should_render(now) {
            return;
        }
        let Some(scene_loop) = &mut self.scene_loop else {
            return;
        };
        match scene_loop.pump() {
            Ok(_) => {
                if let Some(fps) = self.frame_timing.end_frame(now) {
                    log::debug!("{fps:.1} fps");
                }
            }
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                scene_loop.renderer_mut().reconfigure();
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(options) = self.options.take() else {
            return;
        };

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (mon_size.width as f64 / scale * 0.75) as u32;
            let logical_h = (mon_size.height as f64 / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_transparent(true)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes()
                .with_title(&self.title)
                .with_transparent(true)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        self.scale_factor = window.scale_factor();
        let (width, height) = logical_size(window.inner_size(), self.scale_factor);
        let metrics =
            DocumentMetrics::for_sections(options.display.page_sections, height);
        let viewport = Viewport::new(
            width,
            height,
            self.scale_factor as f32,
            options.display.max_pixel_ratio,
            &metrics,
        );
        let state =
            AnimationState::new(options, viewport, Box::new(SystemClock::start()));

        let renderer = match pollster::block_on(GpuRenderer::new(
            window.clone(),
            state.scene(),
            state.viewport().surface_size(),
        )) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        self.frame_timing = FrameTiming::new(state.options().display.target_fps);
        self.scene_loop = Some(SceneLoop::new(state, renderer));
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and scene must be initialised.
        if self.window.is_none() || self.scene_loop.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(inner) => self.post_resize(inner),

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = scale_factor;
                if let Some(inner) = self.window.as_ref().map(|w| w.inner_size()) {
                    self.post_resize(inner);
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(self.scale_factor);
                if let Some(scene_loop) = &mut self.scene_loop {
                    scene_loop.post(SceneEvent::CursorMoved {
                        x: logical.x,
                        y: logical.y,
                    });
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let line = self
                    .scene_loop
                    .as_ref()
                    .map_or(100.0, |l| l.state().options().display.wheel_line_pixels);
                let offset = wheel_scroll(delta, line, self.scale_factor);
                self.scroll_to(self.page_scroll + offset);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.handle_key(code);
                }
            }

            _ => (),
        }
    }
}
