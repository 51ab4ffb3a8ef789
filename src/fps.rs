//! Average frame rate for the window caption.

use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameStats {
    pub fps: f64,
    pub frame_ms: f64,
}

impl FrameStats {
    pub fn title(&self, base: &str) -> String {
        format!(
            "{base}    FPS: {:.3}    Frame Time: {:.3} (ms)",
            self.fps, self.frame_ms
        )
    }
}

/// Counts frames and averages them over a fixed reporting interval.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: Duration,
    previous: Duration,
    frames: u32,
}

impl FpsCounter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            previous: Duration::ZERO,
            frames: 0,
        }
    }

    /// Call once per frame with the time elapsed since the loop started.
    /// Returns the averages when more than one interval has passed since the
    /// previous report.
    pub fn tick(&mut self, now: Duration) -> Option<FrameStats> {
        let elapsed = now.saturating_sub(self.previous);

        let stats = if elapsed > self.interval {
            self.previous = now;
            let fps = f64::from(self.frames) / elapsed.as_secs_f64();
            self.frames = 0;
            Some(FrameStats {
                fps,
                frame_ms: 1000.0 / fps,
            })
        } else {
            None
        };

        self.frames += 1;
        stats
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn reports_after_the_interval() {
        let mut counter = FpsCounter::default();
        for frame in 0..25 {
            assert_eq!(counter.tick(ms(frame * 10)), None);
        }
        // 25 frames counted over 0.26 s
        let stats = counter.tick(ms(260)).expect("interval elapsed");
        assert!((stats.fps - 25.0 / 0.26).abs() < 1e-9);
        assert!((stats.frame_ms - 10.4).abs() < 1e-9);
    }

    #[test]
    fn at_most_four_reports_per_second() {
        let mut counter = FpsCounter::default();
        let reports = (0..=1000).filter(|&t| counter.tick(ms(t)).is_some()).count();
        assert_eq!(reports, 3);

        let mut counter = FpsCounter::default();
        let reports = (0..=1000)
            .step_by(16)
            .filter(|&t| counter.tick(ms(t)).is_some())
            .count();
        assert!(reports <= 4);
    }

    #[test]
    fn frame_count_resets_after_report() {
        let mut counter = FpsCounter::default();
        counter.tick(ms(0));
        assert!(counter.tick(ms(300)).is_some());
        counter.tick(ms(400));
        let stats = counter.tick(ms(600)).expect("second report");
        // the reporting frame and one more
        assert!((stats.fps - 2.0 / 0.3).abs() < 1e-9);
    }

    #[test]
    fn idle_interval_does_not_panic() {
        let mut counter = FpsCounter::default();
        let stats = counter.tick(ms(500)).expect("interval elapsed");
        assert_eq!(stats.fps, 0.0);
        assert!(stats.frame_ms.is_infinite());
        assert_eq!(
            stats.title("Lesson"),
            "Lesson    FPS: 0.000    Frame Time: inf (ms)"
        );
    }

    #[test]
    fn title_format() {
        let stats = FrameStats {
            fps: 59.94,
            frame_ms: 16.683350016683,
        };
        assert_eq!(
            stats.title("Introduction to Modern OpenGL - Hello Indexed Quad"),
            "Introduction to Modern OpenGL - Hello Indexed Quad    FPS: 59.940    Frame Time: 16.683 (ms)"
        );
    }
}
