use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{FxError, FxResult};

/// Largest raster edge accepted, to avoid pathological allocations.
pub const MAX_RASTER_DIM: u32 = 8192;

/// Straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8, not premultiplied.
    pub data: Vec<u8>,
}

impl RasterFrame {
    /// RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Rasterize an SVG document into a `width x height` frame.
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> FxResult<RasterFrame> {
    if width == 0 || height == 0 || width > MAX_RASTER_DIM || height > MAX_RASTER_DIM {
        return Err(FxError::render(format!(
            "raster size {width}x{height} out of range (1..={MAX_RASTER_DIM})"
        )));
    }

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse frame svg")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| FxError::render("failed to allocate frame pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let mut data = pixmap.take();
    demultiply_rgba8_in_place(&mut data);
    Ok(RasterFrame {
        width,
        height,
        data,
    })
}

/// Write `frame` as a PNG, creating parent directories.
pub fn write_png(frame: &RasterFrame, path: &Path) -> FxResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
