//! Frame pacing and FPS reporting.

use web_time::{Duration, Instant};

/// How often the viewer reports the smoothed frame rate.
const REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Frame pacing for the viewer: optional FPS cap plus a smoothed FPS
/// estimate that is reported to the log at a fixed interval.
pub struct FrameTiming {
    /// Minimum frame duration based on target FPS (zero = unlimited).
    min_frame_duration: Duration,
    /// Last presented frame.
    last_frame: Instant,
    /// Last time the FPS estimate was logged.
    last_report: Instant,
    /// Exponential moving average of instantaneous FPS.
    smoothed_fps: f32,
    /// Weight of the newest sample (lower = smoother).
    smoothing: f32,
    /// Frames presented since construction.
    frames: u64,
}

impl FrameTiming {
    /// Create a frame timer with the given FPS cap (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    /// Create a frame timer whose clock starts at `now`.
    #[must_use]
    pub fn starting_at(target_fps: u32, now: Instant) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };
        Self {
            min_frame_duration,
            last_frame: now,
            last_report: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Whether enough time has passed since the last frame to draw again.
    #[must_use]
    pub fn should_render(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_frame)
            >= self.min_frame_duration
    }

    /// Record a presented frame. Returns the smoothed FPS when a periodic
    /// report is due.
    pub fn end_frame(&mut self, now: Instant) -> Option<f32> {
        let frame_time =
            now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frames += 1;

        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        if now.saturating_duration_since(self.last_report) >= REPORT_INTERVAL
        {
            self.last_report = now;
            Some(self.smoothed_fps)
        } else {
            None
        }
    }

    /// Current smoothed FPS.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames recorded so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        let start = Instant::now();
        let timing = FrameTiming::starting_at(0, start);
        assert!(timing.should_render(start));
    }

    #[test]
    fn cap_holds_back_early_frames() {
        let start = Instant::now();
        let timing = FrameTiming::starting_at(60, start);
        assert!(!timing.should_render(start + Duration::from_millis(5)));
        assert!(timing.should_render(start + Duration::from_millis(20)));
    }

    #[test]
    fn steady_frames_converge_and_report() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(0, start);
        let step = Duration::from_millis(10);
        let mut reports = 0;
        let mut now = start;
        for _ in 0..600 {
            now += step;
            if timing.end_frame(now).is_some() {
                reports += 1;
            }
        }
        assert_eq!(timing.frames(), 600);
        assert_eq!(reports, 1);
        assert!((timing.fps() - 100.0).abs() < 1.0);
    }
}
