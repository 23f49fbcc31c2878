use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Sum of every `dt` produced so far, in seconds.
    ///
    /// Animation is driven from this value, so stalls clamped out of `dt`
    /// are also absent here.
    pub total: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped to avoid pathological values when the application is paused
/// by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    total: f64,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps.
    ///
    /// - minimum prevents zero-dt behavior from tight loops on some platforms
    /// - maximum prevents animation jumps after long stalls
    pub fn new() -> Self {
        Self::with_clamps(
            Duration::from_micros(100), // 0.0001s
            Duration::from_millis(250), // 0.25s
        )
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            total: 0.0,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;
        self.total += dt.as_secs_f64();

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            total: self.total as f32,
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_accumulates_deltas() {
        let mut clock = FrameClock::with_clamps(Duration::ZERO, Duration::from_secs(10));
        let start = clock.last;

        let a = clock.tick_at(start + Duration::from_millis(500));
        let b = clock.tick_at(start + Duration::from_millis(1500));

        assert!((a.dt - 0.5).abs() < 1e-6);
        assert!((b.dt - 1.0).abs() < 1e-6);
        assert!((b.total - 1.5).abs() < 1e-6);
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
    }

    #[test]
    fn long_stall_is_clamped() {
        let mut clock = FrameClock::new();
        let start = clock.last;

        let ft = clock.tick_at(start + Duration::from_secs(5));

        assert!((ft.dt - 0.25).abs() < 1e-6);
        assert!((ft.total - 0.25).abs() < 1e-6);
    }

    #[test]
    fn tight_loop_gets_minimum_delta() {
        let mut clock = FrameClock::new();
        let start = clock.last;

        let ft = clock.tick_at(start);

        assert!(ft.dt > 0.0);
    }
}
