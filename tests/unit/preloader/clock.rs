use super::*;

#[test]
fn manual_clock_advances() {
    let c = ManualClock::at(100.0);
    assert_eq!(c.now_ms(), 100.0);
    c.advance(16.5);
    assert_eq!(c.now_ms(), 116.5);
    c.set(0.0);
    assert_eq!(c.now_ms(), 0.0);
}

#[test]
fn monotonic_clock_never_goes_backwards() {
    let c = MonotonicClock::start();
    let a = c.now_ms();
    let b = c.now_ms();
    assert!(a >= 0.0);
    assert!(b >= a);
}

#[test]
fn wall_clock_is_after_epoch() {
    assert!(WallClock.now_ms() > 0.0);
}

#[test]
fn tick_reads_both_clocks() {
    let frame = ManualClock::at(40.0);
    let wall = ManualClock::at(1_700_000_000_000.0);
    let t = Tick::sample(&frame, &wall);
    assert_eq!(t.timestamp_ms, 40.0);
    assert_eq!(t.wall_ms, 1_700_000_000_000.0);
    assert_eq!(Tick::uniform(3.0), Tick { timestamp_ms: 3.0, wall_ms: 3.0 });
}
