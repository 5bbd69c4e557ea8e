use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Viewport, page, and presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
pub struct DisplayOptions {
    /// Upper bound on the device pixel ratio used for the render surface.
    #[schemars(title = "Max Pixel Ratio", range(min = 1.0, max = 4.0), extend("step" = 0.5))]
    pub max_pixel_ratio: f32,
    /// Clamp the scroll-driven material color to [0, 1]. Off by default,
    /// so overscroll produces out-of-range channels.
    #[schemars(title = "Clamp Scroll Color")]
    pub clamp_scroll_color: bool,
    /// Page height in viewport heights (one per section) for hosts that
    /// emulate a scrollable page.
    #[schemars(skip)]
    pub page_sections: u32,
    /// Pixels scrolled per mouse-wheel line.
    #[schemars(title = "Wheel Speed", range(min = 10.0, max = 400.0), extend("step" = 10.0))]
    pub wheel_line_pixels: f32,
    /// Frame rate cap (0 = unlimited).
    #[schemars(skip)]
    pub target_fps: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            max_pixel_ratio: 2.0,
            clamp_scroll_color: false,
            page_sections: 3,
            wheel_line_pixels: 100.0,
            target_fps: 0,
        }
    }
}
