use crate::foundation::error::{FxError, FxResult};

/// Discrete viewport width bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthClass {
    /// Phones.
    Narrow,
    /// Tablets.
    Medium,
    /// Desktops.
    Wide,
}

impl WidthClass {
    /// Number of carousel items shown side by side.
    pub fn visible_count(self) -> usize {
        match self {
            Self::Narrow => 1,
            Self::Medium => 2,
            Self::Wide => 3,
        }
    }
}

/// Pixel thresholds separating the width classes (Tailwind `md` and `lg`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Smallest width classified as [`WidthClass::Medium`].
    pub medium_px: u32,
    /// Smallest width classified as [`WidthClass::Wide`].
    pub wide_px: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium_px: 768,
            wide_px: 1024,
        }
    }
}

impl Breakpoints {
    /// Bucket a window width.
    pub fn classify(&self, width_px: u32) -> WidthClass {
        if width_px >= self.wide_px {
            WidthClass::Wide
        } else if width_px >= self.medium_px {
            WidthClass::Medium
        } else {
            WidthClass::Narrow
        }
    }

    /// Thresholds must be strictly increasing.
    pub fn validate(&self) -> FxResult<()> {
        if self.medium_px >= self.wide_px {
            return Err(FxError::validation(
                "carousel breakpoints must satisfy medium_px < wide_px",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/breakpoints.rs"]
mod tests;
