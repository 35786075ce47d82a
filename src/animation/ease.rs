/// Easing curves used by the site's transitions.
///
/// GSAP's `powerN` names are accepted when deserializing (`power1` is quadratic,
/// `power2` cubic, `power3` quartic).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Constant speed.
    #[serde(alias = "none", alias = "linear")]
    Linear,
    /// Quadratic, accelerating.
    #[serde(alias = "power1.in")]
    InQuad,
    /// Quadratic, decelerating.
    #[serde(alias = "power1.out")]
    OutQuad,
    /// Quadratic, accelerate then decelerate.
    #[serde(alias = "power1.inOut")]
    InOutQuad,
    /// Cubic, accelerating.
    #[serde(alias = "power2.in")]
    InCubic,
    /// Cubic, decelerating.
    #[serde(alias = "power2.out")]
    OutCubic,
    /// Cubic, accelerate then decelerate.
    #[serde(alias = "power2.inOut")]
    InOutCubic,
    /// Quartic, accelerating.
    #[serde(alias = "power3.in")]
    InQuart,
    /// Quartic, decelerating.
    #[serde(alias = "power3.out")]
    OutQuart,
    /// Quartic, accelerate then decelerate.
    #[serde(alias = "power3.inOut")]
    InOutQuart,
}

impl Ease {
    /// Every supported curve, in declaration order.
    pub const ALL: [Ease; 10] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
    ];

    /// Map `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
