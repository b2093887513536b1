use std::time::Instant;

/// Skips frames until `1000 / max_fps` milliseconds have passed since the
/// last accepted one. It never sleeps; callers simply try again later.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    max_fps: f32,
    last_frame: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(max_fps: f32) -> Self {
        Self {
            max_fps,
            last_frame: None,
        }
    }

    /// Frame budget in milliseconds.
    #[inline]
    pub fn budget_ms(&self) -> f32 {
        1000.0 / self.max_fps
    }

    /// Accepts a frame at `now` when the budget has elapsed, recording
    /// `now` as the new reference. Elapsed time is counted in whole
    /// milliseconds. The first frame is always accepted.
    pub fn try_begin(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_frame {
            let elapsed_ms = now.saturating_duration_since(last).as_millis() as f32;
            if elapsed_ms < self.budget_ms() {
                return false;
            }
        }
        self.last_frame = Some(now);
        true
    }

    #[cfg(test)]
    fn last_frame(&self) -> Option<Instant> {
        self.last_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn first_frame_always_passes() {
        let mut limiter = FrameLimiter::new(60.0);
        assert!(limiter.try_begin(Instant::now()));
    }

    #[test]
    fn gates_on_whole_milliseconds() {
        let mut limiter = FrameLimiter::new(60.0);
        let start = Instant::now();
        assert!(limiter.try_begin(start));

        // 16.9ms truncates to 16 < 16.67.
        assert!(!limiter.try_begin(start + Duration::from_micros(16_900)));
        assert!(limiter.try_begin(start + Duration::from_millis(17)));
        assert_eq!(limiter.last_frame(), Some(start + Duration::from_millis(17)));
    }

    #[test]
    fn rejected_frames_do_not_move_reference() {
        let mut limiter = FrameLimiter::new(10.0);
        let start = Instant::now();
        assert!(limiter.try_begin(start));
        for ms in [10, 50, 99] {
            assert!(!limiter.try_begin(start + Duration::from_millis(ms)));
        }
        assert_eq!(limiter.last_frame(), Some(start));
        assert!(limiter.try_begin(start + Duration::from_millis(100)));
    }
}
