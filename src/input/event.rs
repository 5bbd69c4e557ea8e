/// Messages consumed by the [`SceneLoop`](crate::engine::SceneLoop).
///
/// Hosts translate their native callbacks (window resize, page scroll,
/// pointer motion, vsync) into these and post them in arrival order.
///
/// # Example
///
/// ```ignore
/// scene_loop.post(SceneEvent::Scroll { y: 1600.0 });
/// scene_loop.pump()?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    /// The viewport changed size.
    Resize {
        /// Logical viewport width.
        width: f32,
        /// Logical viewport height.
        height: f32,
        /// Physical pixels per logical pixel reported by the host.
        device_pixel_ratio: f32,
    },
    /// The page scrolled to an absolute offset.
    Scroll {
        /// Scroll offset from the top of the page in logical pixels.
        y: f32,
    },
    /// Cursor moved to an absolute position.
    CursorMoved {
        /// Horizontal position in logical pixels.
        x: f32,
        /// Vertical position in logical pixels.
        y: f32,
    },
    /// Replace the material color of meshes and particles alike.
    SetMaterialColor([f32; 3]),
    /// Advance one frame and draw it.
    FrameTick,
}
