// Host-side tests for pointer smoothing and pointer-relative geometry.

use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use sunshine_core::*;

#[test]
fn smoother_moves_fixed_fraction_each_step() {
    let mut s = Smoother::new(0.1);
    s.set_target(Vec2::new(100.0, 50.0));
    let p = s.step();
    assert!((p.x - 10.0).abs() < 1e-4);
    assert!((p.y - 5.0).abs() < 1e-4);
    let p = s.step();
    assert!((p.x - 19.0).abs() < 1e-4);
    assert!((p.y - 9.5).abs() < 1e-4);
}

#[test]
fn smoother_converges_without_overshoot() {
    let mut s = Smoother::new(0.05);
    s.set_target(Vec2::new(640.0, 360.0));
    let mut prev = s.current;
    for _ in 0..500 {
        let p = s.step();
        assert!(p.x >= prev.x && p.x <= 640.0);
        assert!(p.y >= prev.y && p.y <= 360.0);
        prev = p;
    }
    assert!((prev - Vec2::new(640.0, 360.0)).length() < 0.01);
}

#[test]
fn smoother_with_full_factor_snaps() {
    let mut s = Smoother::new(1.0);
    s.set_target(Vec2::new(3.0, -4.0));
    assert_eq!(s.step(), Vec2::new(3.0, -4.0));
}

#[test]
fn tilt_is_zero_at_centre_and_leans_away() {
    let rect = Rect::new(100.0, 100.0, 200.0, 100.0);
    let centre = tilt(&rect, 200.0, 150.0);
    assert_eq!(centre.rotate_x, 0.0);
    assert_eq!(centre.rotate_y, 0.0);

    let corner = tilt(&rect, 100.0, 100.0);
    assert!((corner.rotate_x - (-2.5)).abs() < 1e-9);
    assert!((corner.rotate_y - 5.0).abs() < 1e-9);
}

#[test]
fn magnetic_offset_is_tenth_of_centre_offset() {
    let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
    let (dx, dy) = magnetic_offset(&rect, 100.0, 40.0);
    assert!((dx - 5.0).abs() < 1e-9);
    assert!((dy - 2.0).abs() < 1e-9);
    assert_eq!(magnetic_offset(&rect, 50.0, 20.0), (0.0, 0.0));
}

#[test]
fn sun_drift_is_centred_and_guards_zero_viewport() {
    let viewport = Vec2::new(1000.0, 800.0);
    assert_eq!(sun_drift(Vec2::new(500.0, 400.0), viewport), Vec2::ZERO);
    let d = sun_drift(Vec2::new(1000.0, 0.0), viewport);
    assert!((d.x - 10.0).abs() < 1e-4);
    assert!((d.y + 10.0).abs() < 1e-4);
    assert_eq!(sun_drift(Vec2::new(10.0, 10.0), Vec2::ZERO), Vec2::ZERO);
}

#[test]
fn pointer_state_follows_synthetic_events() {
    let source: EventSource<PointerInput> = EventSource::new();
    let state = Rc::new(RefCell::new(PointerState::new(0.1, 0.05)));
    let handler_state = state.clone();
    source.subscribe(move |input| handler_state.borrow_mut().apply(input));

    source.emit(&PointerInput::Move(Vec2::new(200.0, 100.0)));
    {
        let s = state.borrow();
        assert!(s.inside);
        assert_eq!(s.latest, Vec2::new(200.0, 100.0));
        assert_eq!(s.glow.target, s.sun.target);
    }

    let glow = state.borrow_mut().glow.step();
    let sun = state.borrow_mut().sun.step();
    assert!(glow.x > sun.x, "glow smooths faster than the sun");

    source.emit(&PointerInput::Leave);
    assert!(!state.borrow().inside);
}
