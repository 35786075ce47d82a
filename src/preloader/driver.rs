use crate::{
    animation::ease::Ease,
    foundation::core::progress_for,
    foundation::error::{FxError, FxResult},
    preloader::clock::Tick,
    wave::renderer::{WaveFrame, WaveRenderer},
};

/// Timing of the intro sequence: count up, hold, fade out.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IntroTiming {
    /// Time for the counter and wave to go from 0 to 100%.
    pub duration_ms: f64,
    /// Pause on the full frame before fading.
    pub hold_ms: f64,
    /// Length of the fade-out.
    pub fade_ms: f64,
    /// Curve of the fade-out.
    pub fade_ease: Ease,
    /// Scale the loader grows to while fading.
    pub fade_scale: f64,
}

impl Default for IntroTiming {
    fn default() -> Self {
        Self {
            duration_ms: 2500.0,
            hold_ms: 800.0,
            fade_ms: 750.0,
            fade_ease: Ease::InOutCubic,
            fade_scale: 1.1,
        }
    }
}

impl IntroTiming {
    /// Reject negative or non-finite timings.
    pub fn validate(&self) -> FxResult<()> {
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return Err(FxError::animation("intro duration_ms must be > 0"));
        }
        if !(self.hold_ms.is_finite() && self.hold_ms >= 0.0) {
            return Err(FxError::animation("intro hold_ms must be >= 0"));
        }
        if !(self.fade_ms.is_finite() && self.fade_ms >= 0.0) {
            return Err(FxError::animation("intro fade_ms must be >= 0"));
        }
        if !(self.fade_scale.is_finite() && self.fade_scale > 0.0) {
            return Err(FxError::animation("intro fade_scale must be > 0"));
        }
        Ok(())
    }

    /// End of the whole sequence, measured from the first frame.
    pub fn total_ms(&self) -> f64 {
        self.duration_ms + self.hold_ms + self.fade_ms
    }
}

/// What the host draws for one intro frame.
#[derive(Clone, Debug, PartialEq)]
pub struct IntroFrame {
    /// Linear progress in `[0, 1]`.
    pub progress: f64,
    /// Percentage shown by the counter, `floor(progress * 100)`.
    pub counter: u32,
    /// Wave paths for this frame.
    pub wave: WaveFrame,
}

/// Result of advancing the intro by one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// Draw the frame and schedule another tick.
    Continue(IntroFrame),
    /// Draw the terminal frame and stop scheduling ticks.
    Done(IntroFrame),
}

impl Step {
    /// The frame to draw.
    pub fn frame(&self) -> &IntroFrame {
        match self {
            Self::Continue(f) | Self::Done(f) => f,
        }
    }

    /// True when the host must stop scheduling frames.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// Drives the counter and wave through the intro.
///
/// The first tick latches the start time. The tick on which progress reaches 1 renders the
/// terminal frame at exactly `progress = 1`; every later call returns that same frame, so
/// the wave stays frozen through the outro.
#[derive(Clone, Debug)]
pub struct IntroDriver {
    renderer: WaveRenderer,
    timing: IntroTiming,
    start_ms: Option<f64>,
    done_at_ms: Option<f64>,
    terminal: Option<IntroFrame>,
}

impl IntroDriver {
    /// Driver with the given renderer and timing.
    pub fn new(renderer: WaveRenderer, timing: IntroTiming) -> Self {
        Self {
            renderer,
            timing,
            start_ms: None,
            done_at_ms: None,
            terminal: None,
        }
    }

    /// Timing the driver runs with.
    pub fn timing(&self) -> &IntroTiming {
        &self.timing
    }

    /// Frame-scheduler timestamp of the tick that completed the intro.
    pub fn done_at_ms(&self) -> Option<f64> {
        self.done_at_ms
    }

    /// Advance to `tick`.
    pub fn step(&mut self, tick: Tick) -> Step {
        if let Some(frame) = &self.terminal {
            return Step::Done(frame.clone());
        }

        let start = *self.start_ms.get_or_insert(tick.timestamp_ms);
        let progress = progress_for(tick.timestamp_ms - start, self.timing.duration_ms);

        if progress < 1.0 {
            let wave = self.renderer.frame_at_wall_ms(progress, tick.wall_ms);
            return Step::Continue(IntroFrame {
                progress,
                counter: counter_for(progress),
                wave,
            });
        }

        self.done_at_ms = Some(tick.timestamp_ms);
        tracing::debug!(
            elapsed_ms = tick.timestamp_ms - start,
            "intro counter reached 100%"
        );
        let frame = IntroFrame {
            progress: 1.0,
            counter: 100,
            wave: self.renderer.frame_at_wall_ms(1.0, tick.wall_ms),
        };
        self.terminal = Some(frame.clone());
        Step::Done(frame)
    }
}

/// Counter percentage for `progress`.
pub fn counter_for(progress: f64) -> u32 {
    (progress.clamp(0.0, 1.0) * 100.0).floor() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/preloader/driver.rs"]
mod tests;
