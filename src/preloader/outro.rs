use crate::{
    animation::tween::Tween,
    preloader::driver::IntroTiming,
};

/// Where the loader is after the counter has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OutroPhase {
    /// Showing the full frame.
    Holding,
    /// Fading and growing.
    Fading,
    /// Gone; the host hides the loader and releases the page.
    Hidden,
}

/// Loader appearance during the outro.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OutroFrame {
    /// Current phase.
    pub phase: OutroPhase,
    /// Loader opacity.
    pub opacity: f64,
    /// Loader scale.
    pub scale: f64,
}

/// Hold-then-fade sequence that follows [`Step::Done`](crate::Step::Done).
#[derive(Clone, Copy, Debug)]
pub struct Outro {
    hold_ms: f64,
    opacity: Tween,
    scale: Tween,
}

impl Outro {
    /// Outro for `timing`.
    pub fn new(timing: &IntroTiming) -> Self {
        Self {
            hold_ms: timing.hold_ms,
            opacity: Tween::new(1.0, 0.0, timing.fade_ms, timing.fade_ease),
            scale: Tween::new(1.0, timing.fade_scale, timing.fade_ms, timing.fade_ease),
        }
    }

    /// Appearance `since_done_ms` after the intro completed.
    pub fn sample(&self, since_done_ms: f64) -> OutroFrame {
        if since_done_ms < self.hold_ms {
            return OutroFrame {
                phase: OutroPhase::Holding,
                opacity: 1.0,
                scale: 1.0,
            };
        }

        let fade_elapsed = since_done_ms - self.hold_ms;
        let phase = if self.opacity.is_finished(fade_elapsed) {
            OutroPhase::Hidden
        } else {
            OutroPhase::Fading
        };
        OutroFrame {
            phase,
            opacity: self.opacity.sample(fade_elapsed),
            scale: self.scale.sample(fade_elapsed),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preloader/outro.rs"]
mod tests;
