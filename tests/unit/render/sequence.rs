use super::*;

fn fast_config() -> FxConfig {
    let mut cfg = FxConfig::default();
    cfg.intro.duration_ms = 100.0;
    cfg.intro.hold_ms = 50.0;
    cfg.intro.fade_ms = 50.0;
    cfg
}

#[test]
fn plan_runs_until_hidden() {
    let cfg = FxConfig::default();
    let fps = Fps::new(20, 1).unwrap();
    let frames = plan_intro(&cfg, fps, 0.0).unwrap();

    let first = &frames[0];
    assert_eq!(first.intro.counter, 0);
    assert!(first.outro.is_none());

    let last = frames.last().unwrap();
    assert_eq!(last.intro.counter, 100);
    assert_eq!(last.outro.map(|o| o.phase), Some(OutroPhase::Hidden));
    // 2500 + 800 + 750 ms at 50ms per frame.
    assert_eq!(last.timestamp_ms, 4050.0);
    assert_eq!(frames.len(), 82);
}

#[test]
fn plan_counter_never_decreases() {
    let frames = plan_intro(&FxConfig::default(), Fps::new(60, 1).unwrap(), 1e12).unwrap();
    for pair in frames.windows(2) {
        assert!(pair[1].intro.counter >= pair[0].intro.counter);
        assert!(pair[1].intro.progress >= pair[0].intro.progress);
    }
}

#[test]
fn wave_is_frozen_during_outro() {
    let frames = plan_intro(&FxConfig::default(), Fps::new(30, 1).unwrap(), 777.0).unwrap();
    let mut outro_frames = frames.iter().filter(|f| f.outro.is_some());
    let first = outro_frames.next().unwrap();
    assert_eq!(first.intro.progress, 1.0);
    let mut count = 1;
    for f in outro_frames {
        assert_eq!(f.intro.wave, first.intro.wave, "frame {}", f.index);
        count += 1;
    }
    assert!(count > 30, "outro frames = {count}");
}

#[test]
fn plan_rejects_invalid_config() {
    let mut cfg = FxConfig::default();
    cfg.intro.duration_ms = 0.0;
    assert!(plan_intro(&cfg, Fps::new(30, 1).unwrap(), 0.0).is_err());
}

#[test]
fn parallel_and_serial_renders_match() {
    let cfg = fast_config();
    let frames = plan_intro(&cfg, Fps::new(40, 1).unwrap(), 5_000.0).unwrap();
    let serial = render_sequence(
        &cfg,
        &frames,
        &SequenceOpts {
            size_px: 16,
            ..SequenceOpts::default()
        },
    )
    .unwrap();
    let parallel = render_sequence(
        &cfg,
        &frames,
        &SequenceOpts {
            size_px: 16,
            parallel: true,
            threads: Some(2),
        },
    )
    .unwrap();
    assert_eq!(serial.len(), frames.len());
    assert_eq!(serial, parallel);
}

#[test]
fn zero_threads_is_rejected() {
    let cfg = fast_config();
    let frames = plan_intro(&cfg, Fps::new(40, 1).unwrap(), 0.0).unwrap();
    let err = render_sequence(
        &cfg,
        &frames,
        &SequenceOpts {
            size_px: 8,
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, FxError::Validation(_)));
}
