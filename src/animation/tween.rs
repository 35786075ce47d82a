use crate::{animation::ease::Ease, foundation::core::progress_for};

/// A scalar transition from `from` to `to` over `duration_ms`.
///
/// The tween holds no clock; callers sample it with the time elapsed since it started.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    /// Value at `elapsed_ms <= 0`.
    pub from: f64,
    /// Value once the tween has finished.
    pub to: f64,
    /// Length of the transition.
    pub duration_ms: f64,
    /// Curve applied to the normalized time.
    pub ease: Ease,
}

impl Tween {
    /// Build a tween.
    pub fn new(from: f64, to: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_ms,
            ease,
        }
    }

    /// A tween that is already at rest on `value`.
    pub fn settled(value: f64) -> Self {
        Self::new(value, value, 0.0, Ease::Linear)
    }

    /// Value at `elapsed_ms` after the tween started.
    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        let t = self.ease.apply(progress_for(elapsed_ms, self.duration_ms));
        self.from + (self.to - self.from) * t
    }

    /// True once `elapsed_ms` has reached the end of the transition.
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
