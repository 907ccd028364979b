// Host-side tests for the counter animator and its easing curve.

use sunshine_core::*;

#[test]
fn ease_out_quart_endpoints_and_shape() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
    assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    // Clamped outside [0, 1].
    assert_eq!(ease_out_quart(-2.0), 0.0);
    assert_eq!(ease_out_quart(3.0), 1.0);
    assert_eq!(ease_out_quart(f64::NAN), 0.0);
}

#[test]
fn counter_starts_at_zero_and_ends_exactly_on_target() {
    let anim = CounterAnimation::new(150, "150+", 2000.0);
    assert_eq!(anim.value_at(0.0), 0);
    assert_eq!(anim.value_at(2000.0), 150);
    assert_eq!(anim.value_at(5000.0), 150);
}

#[test]
fn counter_is_monotonic() {
    let anim = CounterAnimation::new(9999, "9999", 2000.0);
    let mut prev = anim.value_at(0.0);
    for step in 1..=400 {
        let v = anim.value_at(step as f64 * 5.0);
        assert!(v >= prev, "value went down at step {step}: {prev} -> {v}");
        prev = v;
    }
    assert_eq!(prev, 9999);
}

#[test]
fn counter_follows_ease_out_quart() {
    let anim = CounterAnimation::new(1000, "1000", 2000.0);
    let expected = (ease_out_quart(0.25) * 1000.0).floor() as i64;
    assert_eq!(anim.value_at(500.0), expected);
}

#[test]
fn counter_frame_snaps_to_final_text() {
    let anim = CounterAnimation::new(150, "150+", 2000.0);
    let mid = anim.frame(1000.0);
    assert!(!mid.done);
    assert_eq!(mid.text, anim.value_at(1000.0).to_string());

    let end = anim.frame(2000.0);
    assert!(end.done);
    assert_eq!(end.text, "150+");
}

#[test]
fn zero_duration_counter_is_immediately_done() {
    let anim = CounterAnimation::new(42, "42", 0.0);
    let frame = anim.frame(0.0);
    assert!(frame.done);
    assert_eq!(frame.text, "42");
}

#[test]
fn parse_reads_leading_integer() {
    assert_eq!(
        CounterTarget::parse("150+"),
        CounterTarget::Numeric {
            target: 150,
            final_text: "150+".to_string()
        }
    );
    assert_eq!(
        CounterTarget::parse(" 24/7"),
        CounterTarget::Numeric {
            target: 24,
            final_text: " 24/7".to_string()
        }
    );
    assert_eq!(
        CounterTarget::parse("-3"),
        CounterTarget::Numeric {
            target: -3,
            final_text: "-3".to_string()
        }
    );
}

#[test]
fn parse_treats_infinity_and_words_as_symbolic() {
    assert_eq!(
        CounterTarget::parse("\u{221e}"),
        CounterTarget::Symbolic("\u{221e}".to_string())
    );
    assert_eq!(
        CounterTarget::parse("many"),
        CounterTarget::Symbolic("many".to_string())
    );
    assert_eq!(CounterTarget::parse(""), CounterTarget::Symbolic(String::new()));
}

#[test]
fn once_flag_fires_once() {
    let mut flag = OnceFlag::default();
    assert!(!flag.has_fired());
    assert!(flag.fire());
    assert!(!flag.fire());
    assert!(!flag.fire());
    assert!(flag.has_fired());
}

#[test]
fn stagger_is_index_times_step() {
    assert_eq!(stagger(0, 200), 0);
    assert_eq!(stagger(3, 200), 600);
    assert_eq!(stagger(usize::MAX, 200), u32::MAX);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn stagger_saturates_instead_of_wrapping() {
    // Would wrap to index 1 if narrowed before multiplying.
    let index = u32::MAX as usize + 2;
    assert_eq!(stagger(index, 200), u32::MAX);
    assert_eq!(stagger(index, 0), 0);
}

#[test]
fn negative_target_counts_toward_zero_rounded() {
    let anim = CounterAnimation::new(-3, "-3", 2000.0);
    let values: Vec<i64> = [0.0, 1.0, 500.0, 1999.0, 2000.0]
        .iter()
        .map(|&t| anim.value_at(t))
        .collect();
    assert_eq!(values, vec![0, 0, -2, -2, -3]);

    let mut prev = 0i64;
    for step in 0..=400 {
        let v = anim.value_at(step as f64 * 5.0);
        assert!(v.abs() >= prev.abs(), "magnitude shrank at step {step}");
        assert!(v >= -3, "overshot target at step {step}: {v}");
        prev = v;
    }
}

#[test]
fn symbolic_stats_pulse_and_never_count() {
    assert!(matches!(StatCue::for_text("\u{221e}", 2000.0), StatCue::Pulse));
    assert!(matches!(StatCue::for_text(" \u{221e} ", 2000.0), StatCue::Pulse));
    assert!(matches!(StatCue::for_text("Always", 2000.0), StatCue::Pulse));
}

#[test]
fn numeric_stats_count_to_their_exact_text() {
    let StatCue::Count(anim) = StatCue::for_text("150+", 2000.0) else {
        panic!("150+ should count");
    };
    assert_eq!(anim.target(), 150);
    assert_eq!(anim.frame(0.0).text, "0");
    let end = anim.frame(2000.0);
    assert!(end.done);
    assert_eq!(end.text, "150+");
}
