//! Scroll and cursor state.
//!
//! Section transitions are edge-triggered on a single comparison: each
//! scroll event compares the new rounded section against the previous one.
//! A jump that skips a section reports only the destination.

use glam::Vec2;

/// A change of the current section reported by a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChange {
    /// Section before the event.
    pub from: i32,
    /// Section after the event.
    pub to: i32,
}

/// Section index for a scroll offset: `scroll_y / viewport_height` rounded
/// half-up (so `-0.5` rounds to 0 and `1.5` to 2).
#[must_use]
pub fn section_for(scroll_y: f32, viewport_height: f32) -> i32 {
    if viewport_height <= 0.0 {
        return 0;
    }
    (scroll_y / viewport_height + 0.5).floor() as i32
}

/// Raw scroll offset, the derived section, and the normalized cursor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputTracker {
    scroll_y: f32,
    current_section: i32,
    cursor: Vec2,
}

impl InputTracker {
    /// Tracker at the top of the page with the cursor centered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll offset. Returns the section change if the rounded
    /// section differs from the previous one.
    pub fn on_scroll(
        &mut self,
        scroll_y: f32,
        viewport_height: f32,
    ) -> Option<SectionChange> {
        self.scroll_y = scroll_y;
        let section = section_for(scroll_y, viewport_height);
        if section == self.current_section {
            return None;
        }
        let change = SectionChange {
            from: self.current_section,
            to: section,
        };
        self.current_section = section;
        Some(change)
    }

    /// Record a cursor position in viewport pixels, normalizing each axis
    /// to [-1, 1] (top-left is (-1, -1)).
    pub fn on_cursor_moved(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.cursor = Vec2::new((x / width - 0.5) * 2.0, (y / height - 0.5) * 2.0);
    }

    /// Current scroll offset in pixels.
    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Current section index. Not clamped to the number of sections.
    #[must_use]
    pub fn current_section(&self) -> i32 {
        self.current_section
    }

    /// Normalized cursor position.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Where the parallax group should head: cursor X, inverted cursor Y.
    #[must_use]
    pub fn parallax_target(&self) -> Vec2 {
        Vec2::new(self.cursor.x, -self.cursor.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_rounds_half_up() {
        assert_eq!(section_for(0.0, 800.0), 0);
        assert_eq!(section_for(399.0, 800.0), 0);
        assert_eq!(section_for(400.0, 800.0), 1);
        assert_eq!(section_for(1199.0, 800.0), 1);
        assert_eq!(section_for(1200.0, 800.0), 2);
        assert_eq!(section_for(-400.0, 800.0), 0);
    }

    #[test]
    fn section_is_monotonic_over_scroll_range() {
        let height = 800.0;
        let mut prev = section_for(0.0, height);
        let mut s = 0.0;
        while s <= 1600.0 {
            let section = section_for(s, height);
            assert_eq!(section, (s / height).round() as i32);
            assert!(section >= prev);
            prev = section;
            s += 7.0;
        }
    }

    #[test]
    fn degenerate_viewport_is_section_zero() {
        assert_eq!(section_for(500.0, 0.0), 0);
    }

    #[test]
    fn scroll_fires_once_per_boundary() {
        let mut tracker = InputTracker::new();
        let mut changes = Vec::new();
        for y in (0..=1000).step_by(50) {
            if let Some(change) = tracker.on_scroll(y as f32, 800.0) {
                changes.push(change);
            }
        }
        assert_eq!(changes, vec![SectionChange { from: 0, to: 1 }]);
        assert_eq!(tracker.scroll_y(), 1000.0);
    }

    #[test]
    fn jump_reports_only_destination() {
        let mut tracker = InputTracker::new();
        let change = tracker.on_scroll(1600.0, 800.0);
        assert_eq!(change, Some(SectionChange { from: 0, to: 2 }));
        assert_eq!(tracker.current_section(), 2);
        assert_eq!(tracker.on_scroll(1650.0, 800.0), None);
    }

    #[test]
    fn cursor_normalizes_to_unit_square() {
        let mut tracker = InputTracker::new();
        tracker.on_cursor_moved(0.0, 0.0, 1000.0, 500.0);
        assert_eq!(tracker.cursor(), Vec2::new(-1.0, -1.0));
        tracker.on_cursor_moved(1000.0, 500.0, 1000.0, 500.0);
        assert_eq!(tracker.cursor(), Vec2::new(1.0, 1.0));
        tracker.on_cursor_moved(750.0, 125.0, 1000.0, 500.0);
        assert_eq!(tracker.cursor(), Vec2::new(0.5, -0.5));
        assert_eq!(tracker.parallax_target(), Vec2::new(0.5, 0.5));
    }
}
