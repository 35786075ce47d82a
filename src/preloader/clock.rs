use std::{
    cell::Cell,
    time::{Instant, SystemTime, UNIX_EPOCH},
};

/// A source of timestamps in milliseconds.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> f64;
}

/// Monotonic clock measured from its creation, like a frame scheduler's timestamp.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Start a clock at zero.
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Milliseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now_ms(&self) -> f64 {
        // A clock set before 1970 reads as the epoch.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Hand-driven clock for offline rendering and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    /// Clock reading `ms`.
    pub fn at(ms: f64) -> Self {
        Self { now: Cell::new(ms) }
    }

    /// Jump to `ms`.
    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    /// Move forward by `ms`.
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Timestamps handed to the intro driver for one animation frame.
///
/// `timestamp_ms` comes from the frame scheduler and drives progress; `wall_ms` comes from
/// the wall clock and drives the wave phase.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tick {
    /// Frame-scheduler timestamp.
    pub timestamp_ms: f64,
    /// Wall-clock reading.
    pub wall_ms: f64,
}

impl Tick {
    /// Tick where both clocks read `ms`.
    pub fn uniform(ms: f64) -> Self {
        Self {
            timestamp_ms: ms,
            wall_ms: ms,
        }
    }

    /// Read both clocks.
    pub fn sample(frame: &dyn Clock, wall: &dyn Clock) -> Self {
        Self {
            timestamp_ms: frame.now_ms(),
            wall_ms: wall.now_ms(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preloader/clock.rs"]
mod tests;
