//! hijama-fx is the visual feedback core of the Hijama practice's single-page site.
//!
//! It covers the two stateful pieces of the page:
//!
//! - **Fluid-wave preloader**: [`WaveRenderer`] turns `(progress, time)` into two closed
//!   cubic paths (foam and body) that rise as the intro counter climbs to 100%.
//!   [`IntroDriver`] advances the counter once per animation frame and reports
//!   [`Step::Done`] when the host must stop scheduling frames; [`Outro`] describes the
//!   hold-and-fade that follows.
//! - **Testimonial carousel**: [`CarouselController`] keeps a bounded index over a strip of
//!   items, re-derives its bounds when the viewport [`WidthClass`] changes, and produces a
//!   [`CarouselView`] (offset, disabled flags, slide tween) for the view layer.
//!
//! Both components are pure state machines: they perform no IO, never block, and expose no
//! error states. IO lives at the edges: [`FxConfig`] loading, SVG rasterization in
//! [`rasterize_svg`], and PNG output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod carousel;
mod foundation;
mod preloader;
mod render;
mod wave;

/// JSON configuration of every tunable.
pub mod config;

pub use animation::ease::Ease;
pub use animation::tween::Tween;
pub use carousel::breakpoints::{Breakpoints, WidthClass};
pub use carousel::controller::{CarouselConfig, CarouselController, CarouselView};
pub use carousel::input::{Control, Focus, Input, Key, Nav};
pub use carousel::layout::{HStackLayout, LayoutSource, UniformLayout};
pub use config::FxConfig;
pub use foundation::core::{BezPath, Fps, Point, progress_for};
pub use foundation::error::{FxError, FxResult};
pub use preloader::clock::{Clock, ManualClock, MonotonicClock, Tick, WallClock};
pub use preloader::driver::{IntroDriver, IntroFrame, IntroTiming, Step, counter_for};
pub use preloader::outro::{Outro, OutroFrame, OutroPhase};
pub use render::color::{Palette, Rgba8};
pub use render::raster::{MAX_RASTER_DIM, RasterFrame, rasterize_svg, write_png};
pub use render::sequence::{PlannedFrame, SequenceOpts, plan_intro, render_sequence};
pub use render::svg::{loader_svg_document, wave_svg_document};
pub use wave::params::WaveParams;
pub use wave::renderer::{WaveFrame, WaveRenderer, WaveSummary};
