use crate::{
    animation::{ease::Ease, tween::Tween},
    carousel::{
        breakpoints::{Breakpoints, WidthClass},
        input::{Input, Nav},
        layout::LayoutSource,
    },
    foundation::error::{FxError, FxResult},
};

/// Carousel tunables.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Width thresholds for 1/2/3 visible items.
    pub breakpoints: Breakpoints,
    /// Length of the slide between positions.
    pub slide_ms: f64,
    /// Curve of the slide.
    pub slide_ease: Ease,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            slide_ms: 600.0,
            slide_ease: Ease::InOutQuart,
        }
    }
}

impl CarouselConfig {
    /// Check breakpoints and slide timing.
    pub fn validate(&self) -> FxResult<()> {
        self.breakpoints.validate()?;
        if !(self.slide_ms.is_finite() && self.slide_ms >= 0.0) {
            return Err(FxError::animation("carousel slide_ms must be >= 0"));
        }
        Ok(())
    }
}

/// What the view layer applies after a state change.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CarouselView {
    /// Current index.
    pub index: usize,
    /// Largest legal index.
    pub max_index: usize,
    /// Items visible at once.
    pub visible_count: usize,
    /// Layout offset of the current item.
    pub offset: f64,
    /// Strip translation target (`-offset`).
    pub translate_x: f64,
    /// The "previous" control is disabled (`index == 0`).
    pub prev_disabled: bool,
    /// The "next" control is disabled (`index == max_index`).
    pub next_disabled: bool,
    /// Animated transition to `translate_x`, starting where the strip was on screen.
    pub slide: Tween,
}

/// Bounded index over a fixed strip of items.
///
/// Invariant: `0 <= current_index <= max_index` where
/// `max_index = max(0, item_count - visible_count)`. Boundary flags are derived from the
/// index on demand and never stored.
///
/// Slides start from the strip's on-screen translation. The plain navigation methods
/// assume the previous slide has settled; hosts that allow input mid-slide pass the live
/// translation to the `*_from` variants instead.
///
/// The controller is not internally synchronized; hosts that dispatch events from several
/// threads must serialize calls.
#[derive(Clone, Debug)]
pub struct CarouselController<L> {
    layout: L,
    config: CarouselConfig,
    current_index: usize,
    visible_count: usize,
    max_index: usize,
    translate_x: f64,
}

impl<L: LayoutSource> CarouselController<L> {
    /// Controller over `layout`, sized for `width_class`.
    ///
    /// Starts at index 0 and immediately applies `width_class`, as the page does on load.
    pub fn new(layout: L, width_class: WidthClass, config: CarouselConfig) -> Self {
        let item_count = layout.item_count();
        let mut controller = Self {
            layout,
            config,
            current_index: 0,
            visible_count: 1,
            max_index: item_count.saturating_sub(1),
            translate_x: 0.0,
        };
        controller.resize(width_class);
        controller
    }

    /// Controller sized from a raw window width.
    pub fn for_width(layout: L, width_px: u32, config: CarouselConfig) -> Self {
        let class = config.breakpoints.classify(width_px);
        Self::new(layout, class, config)
    }

    /// Recompute bounds for a new viewport class, clamping the index down if needed.
    pub fn resize(&mut self, width_class: WidthClass) -> CarouselView {
        self.visible_count = width_class.visible_count();
        self.max_index = self.item_count().saturating_sub(self.visible_count);
        if self.current_index > self.max_index {
            tracing::trace!(
                from = self.current_index,
                to = self.max_index,
                "carousel index clamped on resize"
            );
            self.current_index = self.max_index;
        }
        self.emit(self.translate_x)
    }

    /// [`resize`](Self::resize) from a raw window width.
    pub fn resize_to_width(&mut self, width_px: u32) -> CarouselView {
        let class = self.config.breakpoints.classify(width_px);
        self.resize(class)
    }

    /// Advance by one item; `None` when already at the end.
    pub fn next(&mut self) -> Option<CarouselView> {
        self.next_from(self.translate_x)
    }

    /// Go back by one item; `None` when already at the start.
    pub fn previous(&mut self) -> Option<CarouselView> {
        self.previous_from(self.translate_x)
    }

    /// [`next`](Self::next) with the strip currently drawn at `on_screen_x`.
    pub fn next_from(&mut self, on_screen_x: f64) -> Option<CarouselView> {
        if self.current_index < self.max_index {
            self.current_index += 1;
            Some(self.emit(on_screen_x))
        } else {
            None
        }
    }

    /// [`previous`](Self::previous) with the strip currently drawn at `on_screen_x`.
    pub fn previous_from(&mut self, on_screen_x: f64) -> Option<CarouselView> {
        if self.current_index > 0 {
            self.current_index -= 1;
            Some(self.emit(on_screen_x))
        } else {
            None
        }
    }

    /// Apply a navigation command.
    pub fn navigate(&mut self, nav: Nav) -> Option<CarouselView> {
        self.navigate_from(nav, self.translate_x)
    }

    /// [`navigate`](Self::navigate) with the strip currently drawn at `on_screen_x`.
    pub fn navigate_from(&mut self, nav: Nav, on_screen_x: f64) -> Option<CarouselView> {
        match nav {
            Nav::Next => self.next_from(on_screen_x),
            Nav::Previous => self.previous_from(on_screen_x),
        }
    }

    /// Route a raw input event; inputs that are not navigation are ignored.
    pub fn handle(&mut self, input: Input) -> Option<CarouselView> {
        self.handle_from(input, self.translate_x)
    }

    /// [`handle`](Self::handle) with the strip currently drawn at `on_screen_x`.
    pub fn handle_from(&mut self, input: Input, on_screen_x: f64) -> Option<CarouselView> {
        self.navigate_from(input.nav()?, on_screen_x)
    }

    /// Layout offset of item `index`, or `0.0` when out of range.
    pub fn offset_for(&self, index: usize) -> f64 {
        self.layout.layout_offset(index).unwrap_or(0.0)
    }

    /// The current state with no pending slide.
    pub fn view(&self) -> CarouselView {
        let offset = self.offset_for(self.current_index);
        CarouselView {
            index: self.current_index,
            max_index: self.max_index,
            visible_count: self.visible_count,
            offset,
            translate_x: -offset,
            prev_disabled: self.at_start(),
            next_disabled: self.at_end(),
            slide: Tween::settled(self.translate_x),
        }
    }

    /// Index of the first visible item.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Largest legal index.
    pub fn max_index(&self) -> usize {
        self.max_index
    }

    /// Items visible at once.
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Number of items in the strip.
    pub fn item_count(&self) -> usize {
        self.layout.item_count()
    }

    /// At the first position.
    pub fn at_start(&self) -> bool {
        self.current_index == 0
    }

    /// At the last position.
    pub fn at_end(&self) -> bool {
        self.current_index == self.max_index
    }

    /// The layout collaborator.
    pub fn layout(&self) -> &L {
        &self.layout
    }

    fn emit(&mut self, from: f64) -> CarouselView {
        let offset = self.offset_for(self.current_index);
        let target = -offset;
        let slide = Tween::new(
            from,
            target,
            self.config.slide_ms,
            self.config.slide_ease,
        );
        self.translate_x = target;
        tracing::debug!(
            index = self.current_index,
            max_index = self.max_index,
            visible = self.visible_count,
            offset,
            "carousel position updated"
        );
        CarouselView {
            index: self.current_index,
            max_index: self.max_index,
            visible_count: self.visible_count,
            offset,
            translate_x: target,
            prev_disabled: self.at_start(),
            next_disabled: self.at_end(),
            slide,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/controller.rs"]
mod tests;
