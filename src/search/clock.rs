//! Deadline clocks

use std::time::{Duration, Instant};

/// Source of remaining search time in milliseconds.
///
/// The search polls it at every node and aborts once the value drops below
/// its threshold. It never owns or resets the clock. Any `Fn() -> f64`
/// closure is a clock.
pub trait DeadlineClock {
    /// Milliseconds left; zero or negative once the deadline has passed
    fn time_left(&self) -> f64;
}

impl<F: Fn() -> f64> DeadlineClock for F {
    #[inline]
    fn time_left(&self) -> f64 {
        self()
    }
}

/// Wall-clock deadline measured from its creation
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn new(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }
}

impl DeadlineClock for Deadline {
    fn time_left(&self) -> f64 {
        let budget = self.budget.as_secs_f64() * 1_000.0;
        let elapsed = self.start.elapsed().as_secs_f64() * 1_000.0;
        budget - elapsed
    }
}
