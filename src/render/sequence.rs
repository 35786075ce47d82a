use rayon::prelude::*;

use crate::{
    config::FxConfig,
    foundation::core::Fps,
    foundation::error::{FxError, FxResult},
    preloader::{
        clock::Tick,
        driver::{IntroDriver, IntroFrame},
        outro::{Outro, OutroFrame, OutroPhase},
    },
    render::{
        raster::{RasterFrame, rasterize_svg},
        svg::loader_svg_document,
    },
    wave::renderer::WaveRenderer,
};

/// One sampled frame of a simulated intro run.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedFrame {
    /// Frame number from the start of the run.
    pub index: u64,
    /// Frame-scheduler timestamp of the tick.
    pub timestamp_ms: f64,
    /// Counter and wave state.
    pub intro: IntroFrame,
    /// Fade state, once the counter has finished.
    pub outro: Option<OutroFrame>,
}

/// Controls for rendering a run to pixels.
#[derive(Clone, Debug)]
pub struct SequenceOpts {
    /// Edge length of each square frame.
    pub size_px: u32,
    /// Render frames on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for SequenceOpts {
    fn default() -> Self {
        Self {
            size_px: 256,
            parallel: false,
            threads: None,
        }
    }
}

/// Simulate the intro at a fixed frame rate until the loader is hidden.
///
/// The frame clock starts at 0 and the wall clock at `wall_start_ms`; both advance together.
pub fn plan_intro(cfg: &FxConfig, fps: Fps, wall_start_ms: f64) -> FxResult<Vec<PlannedFrame>> {
    cfg.validate()?;
    let mut driver = IntroDriver::new(WaveRenderer::new(cfg.wave), cfg.intro);
    let outro = Outro::new(&cfg.intro);
    let max_frames = fps.frames_covering_ms(cfg.intro.total_ms()) + 1;

    let mut out = Vec::with_capacity(max_frames.min(4096) as usize);
    for index in 0..max_frames {
        let t = fps.frames_to_ms(index);
        let step = driver.step(Tick {
            timestamp_ms: t,
            wall_ms: wall_start_ms + t,
        });
        let outro_frame = driver.done_at_ms().map(|done| outro.sample(t - done));
        let hidden = matches!(
            outro_frame,
            Some(OutroFrame {
                phase: OutroPhase::Hidden,
                ..
            })
        );
        out.push(PlannedFrame {
            index,
            timestamp_ms: t,
            intro: step.frame().clone(),
            outro: outro_frame,
        });
        if hidden {
            break;
        }
    }
    tracing::debug!(frames = out.len(), "planned intro run");
    Ok(out)
}

/// Rasterize planned frames, in order.
#[tracing::instrument(skip(cfg, frames), fields(frames = frames.len()))]
pub fn render_sequence(
    cfg: &FxConfig,
    frames: &[PlannedFrame],
    opts: &SequenceOpts,
) -> FxResult<Vec<RasterFrame>> {
    let render_one = |f: &PlannedFrame| {
        let doc = loader_svg_document(
            &f.intro.wave,
            &cfg.palette,
            opts.size_px,
            f.outro.as_ref(),
        );
        rasterize_svg(&doc, opts.size_px, opts.size_px)
    };

    if !opts.parallel {
        return frames.iter().map(render_one).collect();
    }

    let pool = build_thread_pool(opts.threads)?;
    pool.install(|| frames.par_iter().map(render_one).collect())
}

fn build_thread_pool(threads: Option<usize>) -> FxResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FxError::validation("'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FxError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/sequence.rs"]
mod tests;
