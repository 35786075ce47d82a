/// Layout collaborator: how many items the strip holds and where each one starts.
///
/// The view owns layout; the controller only indexes into it.
pub trait LayoutSource {
    /// Number of items in the strip.
    fn item_count(&self) -> usize;

    /// Left edge of item `index` relative to the strip, or `None` past the end.
    fn layout_offset(&self, index: usize) -> Option<f64>;
}

impl LayoutSource for [f64] {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn layout_offset(&self, index: usize) -> Option<f64> {
        self.get(index).copied()
    }
}

impl LayoutSource for Vec<f64> {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn layout_offset(&self, index: usize) -> Option<f64> {
        self.get(index).copied()
    }
}

impl<L: LayoutSource + ?Sized> LayoutSource for &L {
    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn layout_offset(&self, index: usize) -> Option<f64> {
        (**self).layout_offset(index)
    }
}

/// Equal-width items laid out left to right with a fixed gap.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UniformLayout {
    /// Width of every item.
    pub item_width: f64,
    /// Space between neighbours.
    pub gap: f64,
    /// Number of items.
    pub count: usize,
}

impl LayoutSource for UniformLayout {
    fn item_count(&self) -> usize {
        self.count
    }

    fn layout_offset(&self, index: usize) -> Option<f64> {
        (index < self.count).then(|| (index as f64) * (self.item_width + self.gap))
    }
}

/// Items of individual widths stacked horizontally, starting at `padding_left`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HStackLayout {
    offsets: Vec<f64>,
}

impl HStackLayout {
    /// Resolve the offsets of `widths` separated by `gap`.
    pub fn from_widths(widths: &[f64], gap: f64, padding_left: f64) -> Self {
        let mut offsets = Vec::with_capacity(widths.len());
        let mut x = padding_left;
        for &w in widths {
            offsets.push(x);
            x += w + gap;
        }
        Self { offsets }
    }

    /// Resolved left edges.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }
}

impl LayoutSource for HStackLayout {
    fn item_count(&self) -> usize {
        self.offsets.len()
    }

    fn layout_offset(&self, index: usize) -> Option<f64> {
        self.offsets.get(index).copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/layout.rs"]
mod tests;
