use super::*;
use kurbo::PathEl;

fn curve_points(path: &BezPath) -> (Point, Point, Point, Point) {
    let els = path.elements();
    let PathEl::MoveTo(start) = els[0] else {
        panic!("path must start with a move: {els:?}");
    };
    let PathEl::CurveTo(c1, c2, end) = els[1] else {
        panic!("second element must be a cubic: {els:?}");
    };
    (start, c1, c2, end)
}

#[test]
fn foam_path_shape_is_curve_then_closed_box() {
    let r = WaveRenderer::default();
    let f = r.frame(0.3, 1.7);
    let els = f.foam.elements();
    assert_eq!(els.len(), 5);
    assert!(matches!(els[2], PathEl::LineTo(p) if p == Point::new(1.2, 1.0)));
    assert!(matches!(els[3], PathEl::LineTo(p) if p == Point::new(-0.2, 1.0)));
    assert!(matches!(els[4], PathEl::ClosePath));

    let (start, _, _, end) = curve_points(&f.foam);
    assert_eq!(start, Point::new(-0.2, f.foam_base));
    assert_eq!(end, Point::new(1.2, f.foam_base));
}

#[test]
fn empty_and_full_frames_sit_at_expected_heights() {
    let r = WaveRenderer::default();
    let p = *r.params();

    let empty = r.frame(0.0, 0.0);
    assert_eq!(empty.amplitude, p.max_amplitude);
    assert_eq!(empty.foam_base, 1.0 + p.max_amplitude);

    let full = r.frame(1.0, 0.0);
    assert_eq!(full.amplitude, p.min_amplitude);
    assert_eq!(full.foam_base, p.min_amplitude);
}

#[test]
fn handles_follow_trig_formulas() {
    let r = WaveRenderer::default();
    let p = *r.params();
    let time = 0.9;
    let f = r.frame(0.5, time);
    let a = time * p.frequency;

    assert_eq!(f.handles[0].x, 0.5 - p.slosh * a.sin());
    assert_eq!(f.handles[0].y, f.foam_base + f.amplitude * (a * 1.1).cos());
    assert_eq!(f.handles[1].x, 0.5 + p.slosh * a.cos());
    assert_eq!(f.handles[1].y, f.foam_base - f.amplitude * (a * 1.2).sin());
}

#[test]
fn body_is_foam_lifted_by_band_thickness() {
    let r = WaveRenderer::default();
    let band = r.params().band_thickness;
    for i in 0..=20 {
        let progress = f64::from(i) / 20.0;
        let time = f64::from(i) * 0.37;
        let f = r.frame(progress, time);
        assert_eq!(f.body_base, f.foam_base - band);

        let (fs, fc1, fc2, fe) = curve_points(&f.foam);
        let (bs, bc1, bc2, be) = curve_points(&f.body);
        assert_eq!(bs.y, fs.y - band);
        assert_eq!(be.y, fe.y - band);
        assert_eq!(bc1, Point::new(fc1.x, fc1.y - band));
        assert_eq!(bc2, Point::new(fc2.x, fc2.y - band));
        assert_eq!(bs.x, fs.x);
        assert_eq!(be.x, fe.x);
    }
}

#[test]
fn handles_move_asynchronously() {
    let r = WaveRenderer::default();
    let f = r.frame(0.5, 0.8);
    let centre = 0.5;
    let d1 = centre - f.handles[0].x;
    let d2 = f.handles[1].x - centre;
    assert!((d1 - d2).abs() > 1e-3, "handles mirrored: {d1} vs {d2}");
}

#[test]
fn identical_inputs_give_identical_path_strings() {
    let r = WaveRenderer::default();
    let a = r.frame(0.42, 1234.5678);
    let b = r.frame(0.42, 1234.5678);
    assert_eq!(a.foam_svg(), b.foam_svg());
    assert_eq!(a.body_svg(), b.body_svg());
    assert_eq!(a, b);
}

#[test]
fn path_strings_parse_back_as_svg() {
    let r = WaveRenderer::default();
    let f = r.frame(0.6, 2.0);
    let d = f.foam_svg();
    assert!(d.starts_with('M'));
    let parsed = BezPath::from_svg(&d).unwrap();
    assert_eq!(parsed.elements().len(), f.foam.elements().len());
}

#[test]
fn wall_clock_phase_matches_explicit_phase() {
    let r = WaveRenderer::default();
    let a = r.frame_at_wall_ms(0.2, 3600.0);
    let b = r.frame(0.2, 3.0);
    assert_eq!(a, b);
}

#[test]
fn renderer_does_not_clamp_progress() {
    let r = WaveRenderer::default();
    let over = r.frame(1.5, 0.0);
    assert!(over.foam_base < r.params().min_amplitude);
}

#[test]
fn summary_carries_path_data() {
    let r = WaveRenderer::default();
    let f = r.frame(0.1, 0.5);
    let s = f.summary();
    assert_eq!(s.foam_d, f.foam_svg());
    assert_eq!(s.body_d, f.body_svg());
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["progress"], serde_json::json!(0.1));
}
