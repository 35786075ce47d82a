use super::*;
use crate::wave::renderer::WaveRenderer;

#[test]
fn document_contains_both_layers_in_order() {
    let frame = WaveRenderer::default().frame(0.5, 1.0);
    let doc = wave_svg_document(&frame, &Palette::default(), 64);
    assert!(doc.starts_with("<svg"));
    assert!(doc.ends_with("</svg>"));
    assert!(doc.contains(r#"viewBox="0 0 1 1""#));

    let dark = doc.find("wave-path-dark").unwrap();
    let light = doc.find("wave-path-light").unwrap();
    assert!(dark < light, "body must be drawn under the foam");
    assert!(doc.contains(&frame.foam_svg()));
    assert!(doc.contains(&frame.body_svg()));
}

#[test]
fn document_parses_as_svg() {
    let frame = WaveRenderer::default().frame(0.2, 4.0);
    let doc = wave_svg_document(&frame, &Palette::default(), 32);
    let tree = usvg::Tree::from_str(&doc, &usvg::Options::default()).unwrap();
    assert_eq!(tree.size().width(), 32.0);
}

#[test]
fn outro_wraps_layers_in_a_faded_group() {
    use crate::preloader::outro::{OutroFrame, OutroPhase};

    let frame = WaveRenderer::default().frame(1.0, 0.0);
    let outro = OutroFrame {
        phase: OutroPhase::Fading,
        opacity: 0.5,
        scale: 1.05,
    };
    let doc = loader_svg_document(&frame, &Palette::default(), 16, Some(&outro));
    assert!(doc.contains(r#"<g opacity="0.5""#));
    assert!(doc.contains("scale(1.05)"));
    assert!(doc.ends_with("</g></svg>"));
    usvg::Tree::from_str(&doc, &usvg::Options::default()).unwrap();
}
