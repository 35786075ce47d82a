use crate::foundation::error::{FxError, FxResult};

pub use kurbo::{BezPath, Point};

/// Normalized elapsed fraction of a fixed-duration animation, in `[0, 1]`.
///
/// A zero or negative duration is treated as already finished.
pub fn progress_for(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Frame rate used when sampling an animation offline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> FxResult<Self> {
        if den == 0 {
            return Err(FxError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FxError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Length of one frame in milliseconds.
    pub fn frame_duration_ms(self) -> f64 {
        1000.0 * f64::from(self.den) / f64::from(self.num)
    }

    /// Timestamp of frame `frames` relative to frame 0.
    pub fn frames_to_ms(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_ms()
    }

    /// Number of frames needed to cover `ms`, including the frame that lands on it.
    pub fn frames_covering_ms(self, ms: f64) -> u64 {
        (ms.max(0.0) * self.as_f64() / 1000.0).ceil() as u64 + 1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
