use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;

use crate::{
    carousel::controller::CarouselConfig,
    foundation::error::FxResult,
    preloader::driver::IntroTiming,
    render::color::Palette,
    wave::params::WaveParams,
};

/// Everything tunable about the visual core, loadable from JSON.
///
/// Every section and field has a default, so `{}` is a valid configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FxConfig {
    /// Preloader wave shape.
    pub wave: WaveParams,
    /// Preloader timeline.
    pub intro: IntroTiming,
    /// Testimonial carousel.
    pub carousel: CarouselConfig,
    /// Fills for rasterized frames.
    pub palette: Palette,
}

impl FxConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> FxResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON configuration file.
    #[tracing::instrument]
    pub fn load(path: &Path) -> FxResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))?;
        cfg.validate()?;
        tracing::debug!("config loaded");
        Ok(cfg)
    }

    /// Validate every section.
    pub fn validate(&self) -> FxResult<()> {
        self.wave.validate()?;
        self.intro.validate()?;
        self.carousel.validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
