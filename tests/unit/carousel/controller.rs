use super::*;
use crate::carousel::{
    input::{Control, Focus, Key},
    layout::UniformLayout,
};

fn layout(count: usize) -> UniformLayout {
    UniformLayout {
        item_width: 300.0,
        gap: 20.0,
        count,
    }
}

fn controller(count: usize, class: WidthClass) -> CarouselController<UniformLayout> {
    CarouselController::new(layout(count), class, CarouselConfig::default())
}

fn assert_invariant<L: LayoutSource>(c: &CarouselController<L>) {
    assert!(c.current_index() <= c.max_index());
    assert_eq!(
        c.max_index(),
        c.item_count().saturating_sub(c.visible_count())
    );
    assert_eq!(c.at_start(), c.current_index() == 0);
    assert_eq!(c.at_end(), c.current_index() == c.max_index());
}

// SplitMix64, seeded so failures reproduce.
struct Rng(u64);

impl Rng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

const CLASSES: [WidthClass; 3] = [WidthClass::Narrow, WidthClass::Medium, WidthClass::Wide];

#[test]
fn seven_items_three_visible_walks_to_four() {
    let mut c = controller(7, WidthClass::Wide);
    assert_eq!(c.max_index(), 4);
    assert_eq!(c.current_index(), 0);
    for expected in 1..=4 {
        let view = c.next().expect("next should move");
        assert_eq!(view.index, expected);
    }
    assert!(c.at_end());
    assert!(c.next().is_none());
    assert_eq!(c.current_index(), 4);
}

#[test]
fn previous_at_start_is_a_no_op() {
    let mut c = controller(7, WidthClass::Medium);
    assert!(c.at_start());
    assert!(c.previous().is_none());
    assert_eq!(c.current_index(), 0);
    assert!(c.at_start());
}

#[test]
fn resize_clamps_index_down() {
    let mut c = controller(7, WidthClass::Narrow);
    assert_eq!(c.max_index(), 6);
    for _ in 0..6 {
        c.next();
    }
    assert_eq!(c.current_index(), 6);

    let view = c.resize(WidthClass::Wide);
    assert_eq!(view.max_index, 4);
    assert_eq!(view.index, 4);
    assert!(view.next_disabled);
    assert!(!view.prev_disabled);

    // Growing back does not move the index.
    let view = c.resize(WidthClass::Narrow);
    assert_eq!(view.index, 4);
    assert_eq!(view.max_index, 6);
    assert!(!view.next_disabled);
}

#[test]
fn empty_collection_is_inert() {
    let mut c = controller(0, WidthClass::Wide);
    let mut rng = Rng(7);
    for _ in 0..200 {
        match rng.below(3) {
            0 => assert!(c.next().is_none()),
            1 => assert!(c.previous().is_none()),
            _ => {
                let view = c.resize(CLASSES[rng.below(3) as usize]);
                assert_eq!(view.offset, 0.0);
            }
        }
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.max_index(), 0);
        let view = c.view();
        assert!(view.prev_disabled && view.next_disabled);
        assert_eq!(c.offset_for(0), 0.0);
    }
}

#[test]
fn fewer_items_than_visible_slots() {
    let mut c = controller(2, WidthClass::Wide);
    assert_eq!(c.max_index(), 0);
    assert!(c.next().is_none());
    let view = c.view();
    assert!(view.prev_disabled && view.next_disabled);
}

#[test]
fn invariant_holds_under_random_resizes_and_navigation() {
    for seed in 0..32u64 {
        let mut rng = Rng(seed);
        let count = rng.below(12) as usize;
        let mut c = controller(count, CLASSES[rng.below(3) as usize]);
        assert_invariant(&c);
        for _ in 0..500 {
            match rng.below(4) {
                0 => {
                    c.resize(CLASSES[rng.below(3) as usize]);
                }
                1 => {
                    c.resize_to_width(rng.below(2000) as u32);
                }
                2 => {
                    c.next();
                }
                _ => {
                    c.previous();
                }
            }
            assert_invariant(&c);
        }
    }
}

#[test]
fn offsets_come_from_layout() {
    let mut c = controller(5, WidthClass::Narrow);
    let view = c.next().unwrap();
    assert_eq!(view.offset, 320.0);
    assert_eq!(view.translate_x, -320.0);
    assert_eq!(c.offset_for(4), 1280.0);
    assert_eq!(c.offset_for(5), 0.0);
    assert_eq!(c.offset_for(usize::MAX), 0.0);
}

#[test]
fn slide_tween_starts_from_previous_translation() {
    let mut c = controller(5, WidthClass::Narrow);
    let first = c.next().unwrap();
    assert_eq!(first.slide.from, 0.0);
    assert_eq!(first.slide.to, -320.0);
    assert_eq!(first.slide.duration_ms, 600.0);
    assert_eq!(first.slide.ease, Ease::InOutQuart);

    let second = c.next().unwrap();
    assert_eq!(second.slide.from, -320.0);
    assert_eq!(second.slide.to, -640.0);

    let back = c.previous().unwrap();
    assert_eq!(back.slide.from, -640.0);
    assert_eq!(back.slide.to, -320.0);
}

#[test]
fn retarget_mid_slide_starts_from_on_screen_position() {
    let mut c = controller(5, WidthClass::Narrow);
    let first = c.next().unwrap();
    let on_screen = first.slide.sample(300.0);
    assert_eq!(on_screen, -160.0);

    let second = c.next_from(on_screen).unwrap();
    assert_eq!(second.index, 2);
    assert_eq!(second.slide.from, on_screen);
    assert_eq!(second.slide.to, -640.0);
    assert_eq!(second.slide.sample(0.0), on_screen);

    let reversed = c
        .handle_from(Input::Click(Control::Previous), second.slide.sample(150.0))
        .unwrap();
    assert_eq!(reversed.slide.from, second.slide.sample(150.0));
    assert_eq!(reversed.slide.to, -320.0);
}

#[test]
fn retarget_at_boundary_is_a_no_op() {
    let mut c = controller(2, WidthClass::Narrow);
    let first = c.next().unwrap();
    assert!(c.next_from(first.slide.sample(100.0)).is_none());
    assert_eq!(c.current_index(), 1);
    assert!(c.previous_from(-320.0).is_some());
    assert!(c.navigate_from(Nav::Previous, 0.0).is_none());
}

#[test]
fn every_input_modality_routes_to_the_same_command() {
    let inputs = [
        Input::Click(Control::Next),
        Input::KeyDown {
            focus: Focus::Control(Control::Next),
            key: Key::Enter,
        },
        Input::KeyDown {
            focus: Focus::Control(Control::Next),
            key: Key::Space,
        },
        Input::KeyDown {
            focus: Focus::Region,
            key: Key::ArrowRight,
        },
    ];
    for input in inputs {
        let mut c = controller(7, WidthClass::Wide);
        let view = c.handle(input).expect("input should advance");
        assert_eq!(view.index, 1);
    }

    let mut c = controller(7, WidthClass::Wide);
    c.next();
    let view = c
        .handle(Input::KeyDown {
            focus: Focus::Region,
            key: Key::ArrowLeft,
        })
        .unwrap();
    assert_eq!(view.index, 0);
    assert!(
        c.handle(Input::KeyDown {
            focus: Focus::Elsewhere,
            key: Key::ArrowRight,
        })
        .is_none()
    );
    assert_eq!(c.current_index(), 0);
}

#[test]
fn disabled_flags_track_bounds_after_each_operation() {
    let mut c = controller(4, WidthClass::Medium);
    let v = c.view();
    assert!(v.prev_disabled);
    assert!(!v.next_disabled);

    let v = c.next().unwrap();
    assert!(!v.prev_disabled);
    assert!(!v.next_disabled);

    let v = c.next().unwrap();
    assert!(v.next_disabled);
    assert_eq!(v.index, 2);
}

#[test]
fn construction_applies_width_class() {
    let c = CarouselController::for_width(layout(6), 800, CarouselConfig::default());
    assert_eq!(c.visible_count(), 2);
    assert_eq!(c.max_index(), 4);
}

#[test]
fn config_validation() {
    CarouselConfig::default().validate().unwrap();
    let bad = CarouselConfig {
        slide_ms: -1.0,
        ..CarouselConfig::default()
    };
    assert!(bad.validate().is_err());
}
