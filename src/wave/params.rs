use crate::foundation::error::{FxError, FxResult};

/// Tunables of the fluid-wave preloader.
///
/// All lengths are in the unit square of the preloader's SVG viewport (`y` grows downward,
/// `y = 1` is the bottom of the frame).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaveParams {
    /// Wave amplitude at `progress = 0`.
    pub max_amplitude: f64,
    /// Wave amplitude at `progress = 1`.
    pub min_amplitude: f64,
    /// Angular speed of the control handles, in radians per unit of phase.
    pub frequency: f64,
    /// Horizontal swing of the control handles around the centre.
    pub slosh: f64,
    /// Vertical gap between the foam line and the body line.
    pub band_thickness: f64,
    /// Wall-clock milliseconds per unit of phase.
    pub period_ms: f64,
    /// x of the curve's left anchor (outside the frame so the ends never show).
    pub left_x: f64,
    /// x of the curve's right anchor.
    pub right_x: f64,
    /// y the filled region closes down to.
    pub floor_y: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            max_amplitude: 0.20,
            min_amplitude: 0.01,
            frequency: 1.6,
            slosh: 0.4,
            band_thickness: 0.12,
            period_ms: 1200.0,
            left_x: -0.2,
            right_x: 1.2,
            floor_y: 1.0,
        }
    }
}

impl WaveParams {
    /// Wave amplitude for `progress`, falling linearly from `max_amplitude` to `min_amplitude`.
    ///
    /// Written as a two-sided lerp so both endpoints are hit exactly.
    pub fn amplitude(&self, progress: f64) -> f64 {
        self.min_amplitude * progress + self.max_amplitude * (1.0 - progress)
    }

    /// Mean height of the foam line: `(1 - progress) + amplitude(progress)`.
    pub fn foam_base(&self, progress: f64) -> f64 {
        (1.0 - progress) + self.amplitude(progress)
    }

    /// Phase of the oscillation at wall-clock time `wall_ms`.
    pub fn phase_at(&self, wall_ms: f64) -> f64 {
        wall_ms / self.period_ms
    }

    /// Reject parameter sets that would produce an inverted or frozen wave.
    pub fn validate(&self) -> FxResult<()> {
        let finite = [
            self.max_amplitude,
            self.min_amplitude,
            self.frequency,
            self.slosh,
            self.band_thickness,
            self.period_ms,
            self.left_x,
            self.right_x,
            self.floor_y,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(FxError::validation("wave parameters must be finite"));
        }
        if self.min_amplitude < 0.0 {
            return Err(FxError::validation("wave min_amplitude must be >= 0"));
        }
        if self.max_amplitude < self.min_amplitude {
            return Err(FxError::validation(
                "wave max_amplitude must be >= min_amplitude",
            ));
        }
        if self.period_ms <= 0.0 {
            return Err(FxError::validation("wave period_ms must be > 0"));
        }
        if self.band_thickness < 0.0 {
            return Err(FxError::validation("wave band_thickness must be >= 0"));
        }
        if self.left_x >= self.right_x {
            return Err(FxError::validation("wave left_x must be < right_x"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/params.rs"]
mod tests;
