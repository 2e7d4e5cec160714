#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn pending_counter_yields_no_frames() {
    let mut counter = CounterAnimation::new(100, 1500.0, Easing::Linear);
    assert_eq!(counter.sample(500.0), None);
    assert_eq!(counter.phase(), CounterPhase::Pending);
}

#[test]
fn start_only_takes_effect_once() {
    let mut counter = CounterAnimation::new(100, 1000.0, Easing::Linear);
    assert!(counter.start(10.0));
    assert!(!counter.start(500.0));
    assert_eq!(counter.phase(), CounterPhase::Animating { started_at_ms: 10.0 });
}

#[test]
fn linear_midpoint_is_half_the_target() {
    let mut counter = CounterAnimation::new(200, 1000.0, Easing::Linear);
    counter.start(0.0);
    assert_eq!(counter.sample(500.0), Some(CounterFrame { value: 100, settled: false }));
}

#[test]
fn ease_out_runs_ahead_of_linear() {
    let mut eased = CounterAnimation::new(1000, 1000.0, Easing::EaseOutCubic);
    eased.start(0.0);
    let frame = eased.sample(250.0).unwrap();
    assert!(frame.value > 250);
    assert!(!frame.settled);
}

#[test]
fn endpoint_is_exact_for_every_easing_and_duration() {
    let targets = [0, 1, 7, 999, 12_345, 2_500_000, u64::from(u32::MAX)];
    let easings = [Easing::Linear, Easing::EaseOutQuad, Easing::EaseOutCubic];
    let durations = [0.0, 16.0, 1500.0, 2000.0];
    for target in targets {
        for easing in easings {
            for duration in durations {
                let mut counter = CounterAnimation::new(target, duration, easing);
                counter.start(100.0);
                let mut now = 100.0;
                let last = loop {
                    let frame = counter.sample(now).unwrap();
                    assert!(frame.value <= target);
                    if frame.settled {
                        break frame;
                    }
                    now += 16.7;
                };
                assert_eq!(last.value, target, "target {target} easing {easing:?} duration {duration}");
                assert_eq!(counter.phase(), CounterPhase::Settled);
            }
        }
    }
}

#[test]
fn values_never_decrease_across_frames() {
    let mut counter = CounterAnimation::new(5_000, 1500.0, Easing::EaseOutCubic);
    counter.start(0.0);
    let mut previous = 0;
    let mut now = 0.0;
    while now <= 1600.0 {
        let value = counter.sample(now).unwrap().value;
        assert!(value >= previous);
        previous = value;
        now += 16.0;
    }
    assert_eq!(previous, 5_000);
}

#[test]
fn settled_counter_keeps_reporting_target() {
    let mut counter = CounterAnimation::new(42, 100.0, Easing::Linear);
    counter.start(0.0);
    assert!(counter.sample(200.0).unwrap().settled);
    assert_eq!(counter.sample(50.0), Some(CounterFrame { value: 42, settled: true }));
}

#[test]
fn easing_curves_pin_endpoints() {
    for easing in [Easing::Linear, Easing::EaseOutQuad, Easing::EaseOutCubic] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert_eq!(easing.apply(3.0), 1.0);
        assert_eq!(easing.apply(-1.0), 0.0);
    }
}

#[test]
fn parse_target_accepts_plain_and_grouped_digits() {
    assert_eq!(parse_target("2500"), Some(2500));
    assert_eq!(parse_target(" 12,000 "), Some(12_000));
    assert_eq!(parse_target("1_000_000"), Some(1_000_000));
}

#[test]
fn parse_target_rejects_garbage() {
    assert_eq!(parse_target(""), None);
    assert_eq!(parse_target("12k"), None);
    assert_eq!(parse_target("-5"), None);
    assert_eq!(parse_target(","), None);
}

#[test]
fn cancelled_counter_stops_producing_frames() {
    let mut counter = CounterAnimation::new(500, 1000.0, Easing::EaseOutCubic);
    counter.start(0.0);
    assert!(counter.sample(100.0).is_some());

    assert!(counter.cancel());
    assert_eq!(counter.phase(), CounterPhase::Cancelled);
    assert_eq!(counter.sample(200.0), None);
    assert_eq!(counter.sample(5_000.0), None, "a cancelled counter never settles");
    assert!(!counter.start(300.0));
    assert!(!counter.cancel());
}

#[test]
fn cancel_before_start_and_after_settle() {
    let mut pending = CounterAnimation::new(10, 100.0, Easing::Linear);
    assert!(pending.cancel());
    assert!(!pending.start(0.0));

    let mut settled = CounterAnimation::new(10, 100.0, Easing::Linear);
    settled.start(0.0);
    assert_eq!(settled.sample(100.0), Some(CounterFrame { value: 10, settled: true }));
    assert!(!settled.cancel(), "settled counters keep their value");
    assert_eq!(settled.phase(), CounterPhase::Settled);
}
