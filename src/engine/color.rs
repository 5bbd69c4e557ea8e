//! Scroll-driven material tint.

use super::viewport::Viewport;

/// Color for a scroll offset: `(f, 1 - f, 1)` where `f` is the fraction of
/// the scroll range covered.
///
/// With `clamp` off, overscroll (elastic scrolling, negative offsets)
/// yields channels outside [0, 1]. A page no taller than the viewport has
/// no range, and `f` is 0.
#[must_use]
pub fn scroll_color(scroll_y: f32, viewport: &Viewport, clamp: bool) -> [f32; 3] {
    let range = viewport.scroll_range();
    let mut fraction = if range > 0.0 { scroll_y / range } else { 0.0 };
    if clamp {
        fraction = fraction.clamp(0.0, 1.0);
    }
    [fraction, 1.0 - fraction, 1.0]
}
