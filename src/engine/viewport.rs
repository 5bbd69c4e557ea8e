//! Viewport size and page height.

use crate::renderer::SurfaceSize;

/// Height measurements of the scrollable document. Different layout
/// engines report the page height in different places, so the largest
/// one is taken as the page height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DocumentMetrics {
    /// Body scroll height.
    pub body_scroll_height: f32,
    /// Body offset height.
    pub body_offset_height: f32,
    /// Root element client height.
    pub html_client_height: f32,
    /// Root element scroll height.
    pub html_scroll_height: f32,
    /// Root element offset height.
    pub html_offset_height: f32,
}

impl DocumentMetrics {
    /// Metrics of a page made of `sections` viewport-high sections.
    #[must_use]
    pub fn for_sections(sections: u32, viewport_height: f32) -> Self {
        let page = sections as f32 * viewport_height;
        Self {
            body_scroll_height: page,
            body_offset_height: page,
            html_client_height: viewport_height,
            html_scroll_height: page,
            html_offset_height: page,
        }
    }

    /// The largest reported height.
    #[must_use]
    pub fn largest(&self) -> f32 {
        [
            self.body_scroll_height,
            self.body_offset_height,
            self.html_client_height,
            self.html_scroll_height,
            self.html_offset_height,
        ]
        .into_iter()
        .fold(0.0, f32::max)
    }
}

/// Current viewport dimensions plus the page height captured at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    pixel_ratio: f32,
    max_pixel_ratio: f32,
    total_scrollable_height: f32,
}

impl Viewport {
    /// Viewport at the given logical size. The page height is fixed here
    /// and not recomputed on resize.
    #[must_use]
    pub fn new(
        width: f32,
        height: f32,
        device_pixel_ratio: f32,
        max_pixel_ratio: f32,
        metrics: &DocumentMetrics,
    ) -> Self {
        Self {
            width,
            height,
            pixel_ratio: device_pixel_ratio.min(max_pixel_ratio),
            max_pixel_ratio,
            total_scrollable_height: metrics.largest(),
        }
    }

    /// Apply a host resize. Returns `false` (and changes nothing) for a
    /// zero-area viewport such as a minimized window.
    pub fn resize(
        &mut self,
        width: f32,
        height: f32,
        device_pixel_ratio: f32,
    ) -> bool {
        if width <= 0.0 || height <= 0.0 {
            return false;
        }
        self.width = width;
        self.height = height;
        self.pixel_ratio = device_pixel_ratio.min(self.max_pixel_ratio);
        true
    }

    /// Logical width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Logical height (also the height of one section).
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Device pixel ratio after the cap.
    #[must_use]
    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Full page height captured at startup.
    #[must_use]
    pub fn total_scrollable_height(&self) -> f32 {
        self.total_scrollable_height
    }

    /// Largest reachable scroll offset (page height minus one viewport).
    /// Zero or negative when the page fits in the viewport.
    #[must_use]
    pub fn scroll_range(&self) -> f32 {
        self.total_scrollable_height - self.height
    }

    /// Output surface size for the renderer.
    #[must_use]
    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize {
            width: self.width,
            height: self.height,
            pixel_ratio: self.pixel_ratio,
        }
    }
}
