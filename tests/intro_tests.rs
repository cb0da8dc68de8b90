//! Intro Sequencer Tests
//!
//! Tests for:
//! - State machine transitions (Idle -> Loading -> SlidingOut -> Complete)
//! - Hold, eased slide and single completion signal
//! - Load failure and load timeout

use scrollreel::animation::Easing;
use scrollreel::{IntroSequencer, IntroState, IntroTiming};

#[test]
fn transitions_only_move_forward() {
    let mut intro = IntroSequencer::default();
    assert_eq!(*intro.state(), IntroState::Idle);

    // Completion before loading started is ignored.
    assert!(!intro.asset_loaded());
    assert!(intro.begin_loading());
    assert!(!intro.begin_loading());
    assert_eq!(*intro.state(), IntroState::Loading);

    assert!(intro.asset_loaded());
    assert!(matches!(intro.state(), IntroState::SlidingOut { .. }));
    assert!(!intro.asset_loaded());
    assert!(!intro.asset_failed("late"));
}

#[test]
fn nothing_happens_while_loading() {
    let mut intro = IntroSequencer::new(IntroTiming {
        load_timeout: 0.0,
        ..IntroTiming::default()
    });
    intro.begin_loading();
    for _ in 0..100 {
        assert_eq!(intro.update(0.5), Default::default());
    }
    assert_eq!(*intro.state(), IntroState::Loading);
}

#[test]
fn holds_then_slides_then_completes_once() {
    let mut intro = IntroSequencer::new(IntroTiming {
        delay: 1.0,
        duration: 0.5,
        travel_percent: 150.0,
        easing: Easing::Linear,
        load_timeout: 0.0,
    });
    intro.begin_loading();
    intro.asset_loaded();

    // Hold: overlay does not move.
    let update = intro.update(0.5);
    assert_eq!(update.overlay_offset, None);
    assert!(!update.completed);

    // Halfway through the slide.
    let update = intro.update(0.75);
    assert_eq!(update.overlay_offset, Some(75.0));
    assert!(!update.completed);

    let update = intro.update(0.25);
    assert_eq!(update.overlay_offset, Some(150.0));
    assert!(update.completed);
    assert!(intro.is_complete());

    // Complete is terminal; the completion signal is not repeated.
    for _ in 0..10 {
        assert!(!intro.update(1.0).completed);
    }
    assert_eq!(*intro.state(), IntroState::Complete);
}

#[test]
fn default_timing_eases_the_slide() {
    let timing = IntroTiming::default();
    assert_eq!(timing.delay, 1.0);
    assert_eq!(timing.duration, 0.8);
    assert_eq!(timing.travel_percent, 150.0);
    assert_eq!(timing.easing, Easing::Power4InOut);
    assert_eq!(timing.load_timeout, 60.0);

    let mut intro = IntroSequencer::new(timing);
    intro.begin_loading();
    intro.asset_loaded();

    // 10% into the slide, a quintic ease-in has barely moved.
    let offset = intro.update(1.08).overlay_offset.unwrap();
    assert!(offset > 0.0 && offset < 1.0, "offset {offset}");
}

#[test]
fn failure_is_terminal_and_keeps_the_reason() {
    let mut intro = IntroSequencer::default();
    intro.begin_loading();
    assert!(intro.asset_failed("404 Not Found"));

    assert_eq!(
        *intro.state(),
        IntroState::Failed("404 Not Found".to_string())
    );
    assert!(!intro.asset_loaded());
    assert_eq!(intro.update(10.0), Default::default());
}

#[test]
fn unanswered_load_times_out_once() {
    let mut intro = IntroSequencer::new(IntroTiming {
        load_timeout: 2.0,
        ..IntroTiming::default()
    });
    intro.begin_loading();

    for _ in 0..3 {
        assert!(!intro.update(0.5).timed_out);
    }
    assert_eq!(*intro.state(), IntroState::Loading);

    let update = intro.update(0.5);
    assert!(update.timed_out);
    assert!(!update.completed);
    assert!(matches!(intro.state(), IntroState::Failed(reason) if reason.contains("2s")));

    // A late completion cannot revive the intro.
    assert!(!intro.asset_loaded());
    assert!(!intro.update(10.0).timed_out);
}

#[test]
fn timeout_does_not_apply_once_loaded() {
    let mut intro = IntroSequencer::new(IntroTiming {
        load_timeout: 1.0,
        ..IntroTiming::default()
    });
    intro.begin_loading();
    intro.update(0.75);
    intro.asset_loaded();

    let mut completions = 0;
    for _ in 0..20 {
        let update = intro.update(0.25);
        assert!(!update.timed_out);
        completions += usize::from(update.completed);
    }
    assert_eq!(completions, 1);
    assert_eq!(*intro.state(), IntroState::Complete);
}
