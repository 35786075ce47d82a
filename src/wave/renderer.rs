use crate::{
    foundation::core::{BezPath, Point},
    wave::params::WaveParams,
};

/// Horizontal centre the control handles swing around.
const HANDLE_CENTRE_X: f64 = 0.5;
/// Frequency multipliers of the vertical handle terms; distinct values keep the two
/// handles out of step so the curve never mirrors itself.
const VERTICAL_DETUNE: [f64; 2] = [1.1, 1.2];

/// One frame of the fluid wave: the foam layer on top and the darker body beneath.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveFrame {
    /// Progress the frame was built for.
    pub progress: f64,
    /// Oscillation phase the frame was built for.
    pub time: f64,
    /// Wave amplitude at `progress`.
    pub amplitude: f64,
    /// Mean height of the foam line.
    pub foam_base: f64,
    /// Mean height of the body line (`foam_base - band_thickness`).
    pub body_base: f64,
    /// Cubic control handles of the foam curve.
    pub handles: [Point; 2],
    /// Closed foam region.
    pub foam: BezPath,
    /// Closed body region.
    pub body: BezPath,
}

impl WaveFrame {
    /// SVG path data of the foam region.
    pub fn foam_svg(&self) -> String {
        self.foam.to_svg()
    }

    /// SVG path data of the body region.
    pub fn body_svg(&self) -> String {
        self.body.to_svg()
    }

    /// Flat, serializable view of the frame.
    pub fn summary(&self) -> WaveSummary {
        WaveSummary {
            progress: self.progress,
            time: self.time,
            amplitude: self.amplitude,
            foam_base: self.foam_base,
            body_base: self.body_base,
            foam_d: self.foam_svg(),
            body_d: self.body_svg(),
        }
    }
}

/// Serializable form of a [`WaveFrame`] with the paths as SVG path data.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveSummary {
    /// Progress the frame was built for.
    pub progress: f64,
    /// Oscillation phase the frame was built for.
    pub time: f64,
    /// Wave amplitude.
    pub amplitude: f64,
    /// Mean height of the foam line.
    pub foam_base: f64,
    /// Mean height of the body line.
    pub body_base: f64,
    /// Foam path data.
    pub foam_d: String,
    /// Body path data.
    pub body_d: String,
}

/// Builds wave frames from `(progress, time)`.
///
/// The renderer is stateless: a frame depends only on its inputs, never on the previous frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveRenderer {
    params: WaveParams,
}

impl WaveRenderer {
    /// Renderer over `params`.
    pub fn new(params: WaveParams) -> Self {
        Self { params }
    }

    /// Parameters the renderer was built with.
    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    /// Build the frame for `progress` at phase `time`.
    ///
    /// `progress` must already lie in `[0, 1]`; the host clamps it when deriving it from
    /// elapsed time and the renderer uses it as given. `time` is a phase as produced by
    /// [`WaveParams::phase_at`].
    pub fn frame(&self, progress: f64, time: f64) -> WaveFrame {
        let p = &self.params;
        let amplitude = p.amplitude(progress);
        let foam_base = p.foam_base(progress);
        let angle = time * p.frequency;

        let h1 = Point::new(
            HANDLE_CENTRE_X - p.slosh * angle.sin(),
            foam_base + amplitude * (angle * VERTICAL_DETUNE[0]).cos(),
        );
        let h2 = Point::new(
            HANDLE_CENTRE_X + p.slosh * angle.cos(),
            foam_base - amplitude * (angle * VERTICAL_DETUNE[1]).sin(),
        );

        let band = p.band_thickness;
        let body_base = foam_base - band;
        let body_h1 = Point::new(h1.x, h1.y - band);
        let body_h2 = Point::new(h2.x, h2.y - band);

        WaveFrame {
            progress,
            time,
            amplitude,
            foam_base,
            body_base,
            handles: [h1, h2],
            foam: self.closed_curve(foam_base, h1, h2),
            body: self.closed_curve(body_base, body_h1, body_h2),
        }
    }

    /// Build the frame for `progress` with the phase taken from wall-clock `wall_ms`.
    pub fn frame_at_wall_ms(&self, progress: f64, wall_ms: f64) -> WaveFrame {
        self.frame(progress, self.params.phase_at(wall_ms))
    }

    fn closed_curve(&self, base: f64, h1: Point, h2: Point) -> BezPath {
        let p = &self.params;
        let mut path = BezPath::new();
        path.move_to((p.left_x, base));
        path.curve_to(h1, h2, Point::new(p.right_x, base));
        path.line_to((p.right_x, p.floor_y));
        path.line_to((p.left_x, p.floor_y));
        path.close_path();
        path
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/renderer.rs"]
mod tests;
