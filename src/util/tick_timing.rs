//! Tick pacing with rate tracking and optional limiting.

use web_time::{Duration, Instant};

/// Tick timing with rate calculation and optional tick limiting.
///
/// The engine's interpolation advances a fixed step per tick, so hosts
/// whose callbacks fire faster than the intended cadence (high-refresh
/// displays, uncapped loops) gate on [`should_tick`](Self::should_tick)
/// to keep the animation feel consistent.
pub struct TickTiming {
    /// Target ticks per second (0 = unlimited)
    target_rate: u32,
    /// Minimum tick duration based on target rate
    min_tick_duration: Duration,
    /// Last tick timestamp
    last_tick: Instant,
    /// Smoothed tick rate using exponential moving average
    smoothed_rate: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl TickTiming {
    /// Create a new tick timer with the given rate target (0 = unlimited).
    #[must_use]
    pub fn new(target_rate: u32) -> Self {
        let min_tick_duration = if target_rate > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_rate))
        } else {
            Duration::ZERO
        };

        Self {
            target_rate,
            min_tick_duration,
            last_tick: Instant::now(),
            smoothed_rate: 60.0, // Start with reasonable default
            smoothing: 0.05,     /* 5% new value, 95% old value for smooth
                                  * display */
        }
    }

    /// Call before each tick. Returns true if enough time has passed to
    /// advance.
    #[must_use]
    pub fn should_tick(&self) -> bool {
        if self.target_rate == 0 {
            return true;
        }
        self.last_tick.elapsed() >= self.min_tick_duration
    }

    /// Call after advancing to update timing.
    pub fn end_tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;

        // Calculate instantaneous rate
        let tick_time = elapsed.as_secs_f32();
        if tick_time > 0.0 {
            let instant_rate = 1.0 / tick_time;
            // Exponential moving average for smooth display
            self.smoothed_rate = self.smoothed_rate * (1.0 - self.smoothing)
                + instant_rate * self.smoothing;
        }
    }

    /// Get the current tick rate (smoothed)
    #[must_use]
    pub fn rate(&self) -> f32 {
        self.smoothed_rate
    }
}
