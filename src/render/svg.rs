use std::fmt::Write as _;

use crate::{
    preloader::outro::OutroFrame, render::color::Palette, wave::renderer::WaveFrame,
};

/// Standalone SVG document showing one wave frame in a `size_px` square.
///
/// The viewport is the unit square the wave is defined in; the body is drawn first so the
/// foam sits on top of it and only a band of body shows above the foam line.
pub fn wave_svg_document(frame: &WaveFrame, palette: &Palette, size_px: u32) -> String {
    loader_svg_document(frame, palette, size_px, None)
}

/// Like [`wave_svg_document`], with the loader faded and scaled about its centre as
/// described by `outro`.
pub fn loader_svg_document(
    frame: &WaveFrame,
    palette: &Palette,
    size_px: u32,
    outro: Option<&OutroFrame>,
) -> String {
    let mut out = String::with_capacity(640);
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size_px}" height="{size_px}" viewBox="0 0 1 1" preserveAspectRatio="none">"#
    );
    if let Some(o) = outro {
        let _ = write!(
            out,
            r#"<g opacity="{}" transform="translate(0.5 0.5) scale({}) translate(-0.5 -0.5)">"#,
            o.opacity, o.scale
        );
    }
    let _ = write!(
        out,
        r#"<rect x="0" y="0" width="1" height="1" fill="{}" fill-opacity="{}"/>"#,
        palette.background.to_svg_rgb(),
        palette.background.opacity()
    );
    let _ = write!(
        out,
        r#"<path id="wave-path-dark" d="{}" fill="{}" fill-opacity="{}"/>"#,
        frame.body_svg(),
        palette.body.to_svg_rgb(),
        palette.body.opacity()
    );
    let _ = write!(
        out,
        r#"<path id="wave-path-light" d="{}" fill="{}" fill-opacity="{}"/>"#,
        frame.foam_svg(),
        palette.foam.to_svg_rgb(),
        palette.foam.opacity()
    );
    if outro.is_some() {
        out.push_str("</g>");
    }
    out.push_str("</svg>");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
