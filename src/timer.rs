//! Wall-clock stopwatch.
//!
//! Brackets the engine call so the report carries a wall-clock time that does
//! not depend on the engine's own accounting.

use std::time::{Duration, Instant};

/// Accumulating stopwatch with an optional limit.
///
/// ```
/// use ilprun::timer::ClockTimer;
///
/// let mut timer = ClockTimer::new();
/// timer.start();
/// // ... first thing
/// timer.stop();
/// timer.start();
/// // ... second thing
/// timer.stop();
/// // elapsed() is the total of both intervals
/// assert!(timer.elapsed() >= std::time::Duration::ZERO);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClockTimer {
    elapsed: Duration,
    started_at: Option<Instant>,
    limit: Option<Duration>,
}

impl ClockTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the accumulated time. The limit is kept.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.started_at = None;
    }

    /// Begin an interval. Restarting a running timer discards the open interval.
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// End the current interval and add it to the total. No-op when not running.
    pub fn stop(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.elapsed += started_at.elapsed();
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Sum of all completed intervals.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn set_limit(&mut self, limit: Duration) {
        self.limit = Some(limit);
    }

    /// Whether the accumulated time has reached the limit. False with no limit.
    pub fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.elapsed >= limit)
    }
}
