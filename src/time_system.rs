//! Frame timing and cooperative repeating timers.
//!
//! Everything runs on the frame tick. A `RepeatingTimer` never blocks: the
//! owner advances it by the frame delta and acts on the number of intervals
//! that elapsed.

use std::time::Instant;

use crate::constants::MAX_FRAME_DT;

// =============================================================================
// FRAME CLOCK
// =============================================================================

/// Measures real time between frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame: Instant,
    /// Total simulated time in seconds (sum of capped deltas)
    pub time: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            time: 0.0,
        }
    }

    /// Start a new frame and return its delta in seconds, capped at `MAX_FRAME_DT`
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        let dt = cap_frame_dt(raw_dt);
        self.time += dt;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a raw frame delta into [0, MAX_FRAME_DT]
pub fn cap_frame_dt(raw_dt: f32) -> f32 {
    raw_dt.clamp(0.0, MAX_FRAME_DT)
}

// =============================================================================
// REPEATING TIMER
// =============================================================================

/// A cancellable timer that fires every `interval` seconds while running.
///
/// Only one run exists at a time: `start` discards whatever time had
/// accumulated in a previous run.
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    interval: f32,
    elapsed: f32,
    running: bool,
}

impl RepeatingTimer {
    pub fn new(interval: f32) -> Self {
        debug_assert!(interval > 0.0, "timer interval must be positive: {}", interval);
        Self {
            interval,
            elapsed: 0.0,
            running: false,
        }
    }

    /// Begin a fresh run, cancelling any run in progress
    pub fn start(&mut self) {
        self.cancel();
        self.running = true;
    }

    /// Stop immediately. No further fires until the next `start`.
    pub fn cancel(&mut self) {
        self.running = false;
        self.elapsed = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by `dt` seconds and return how many intervals completed
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.running {
            return 0;
        }
        self.elapsed += dt.max(0.0);
        let fired = (self.elapsed / self.interval).floor();
        self.elapsed = (self.elapsed - fired * self.interval).max(0.0);
        // Float-to-int `as` saturates
        fired as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_frame_dt() {
        assert_eq!(cap_frame_dt(0.01), 0.01);
        assert_eq!(cap_frame_dt(5.0), MAX_FRAME_DT);
        assert_eq!(cap_frame_dt(-1.0), 0.0);
    }

    #[test]
    fn test_timer_idle_never_fires() {
        let mut timer = RepeatingTimer::new(0.2);
        assert_eq!(timer.advance(10.0), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_timer_fires_once_per_interval() {
        let mut timer = RepeatingTimer::new(0.5);
        timer.start();
        assert_eq!(timer.advance(0.25), 0);
        assert_eq!(timer.advance(0.25), 1);
        assert_eq!(timer.advance(1.0), 2);
    }

    #[test]
    fn test_timer_cancel_stops_fires() {
        let mut timer = RepeatingTimer::new(0.5);
        timer.start();
        timer.advance(0.4);
        timer.cancel();
        assert_eq!(timer.advance(1.0), 0);
    }

    #[test]
    fn test_timer_restart_discards_previous_progress() {
        let mut timer = RepeatingTimer::new(0.5);
        timer.start();
        timer.advance(0.4);
        timer.start();
        assert_eq!(timer.advance(0.25), 0);
        assert_eq!(timer.advance(0.25), 1);
    }

    #[test]
    fn test_tiny_interval_returns_instead_of_spinning() {
        let mut timer = RepeatingTimer::new(1e-10);
        timer.start();
        let fired = timer.advance(1.0 / 60.0);
        assert!(fired > 1_000_000);
    }

    #[test]
    fn test_huge_fire_count_saturates() {
        let mut timer = RepeatingTimer::new(1e-30);
        timer.start();
        assert_eq!(timer.advance(1.0), u32::MAX);
    }

    #[test]
    fn test_frame_clock_accumulates() {
        let mut clock = FrameClock::new();
        let dt = clock.tick();
        assert!(dt >= 0.0 && dt <= MAX_FRAME_DT);
        assert_eq!(clock.time, dt);
    }
}
