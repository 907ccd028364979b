// Host-side tests for disposable ripple/wave/burst effects.

use sunshine_core::*;

#[test]
fn ripple_is_square_and_centred_on_click() {
    let rect = Rect::new(10.0, 20.0, 120.0, 40.0);
    let g = ripple_geometry(&rect, 70.0, 40.0);
    assert_eq!(g.size, 120.0);
    assert_eq!(g.left, 60.0 - 60.0);
    assert_eq!(g.top, 20.0 - 60.0);
}

#[test]
fn lifetimes_match_the_page() {
    assert_eq!(TransientKind::Ripple.lifetime_ms(), 600);
    assert_eq!(TransientKind::Wave.lifetime_ms(), 650);
    assert_eq!(TransientKind::Burst.lifetime_ms(), 600);
}

#[test]
fn concurrent_ripples_expire_independently() {
    let mut ledger = TransientLedger::new();
    let first = ledger.spawn(TransientKind::Ripple, 0.0, "first");
    let second = ledger.spawn(TransientKind::Ripple, 250.0, "second");
    let third = ledger.spawn(TransientKind::Ripple, 250.0, "third");
    assert_eq!(ledger.active(), 3);

    assert!(ledger.due(599.0).is_empty());
    assert_eq!(ledger.due(600.0), vec![first]);
    assert_eq!(ledger.retire(first), Some("first"));

    // Retiring the first did not move anyone else's expiry.
    assert_eq!(ledger.expires_at(second), Some(850.0));
    assert_eq!(ledger.expires_at(third), Some(850.0));
    assert_eq!(ledger.due(849.0), Vec::<TransientId>::new());
    assert_eq!(ledger.due(850.0), vec![second, third]);
}

#[test]
fn each_timer_tears_down_only_its_own_element() {
    // Mirrors the page: every spawn schedules a timer that retires its own
    // id and removes whatever payload comes back.
    let mut ledger = TransientLedger::new();
    let mut timers = Vec::new();
    for (at, name) in [(0.0, "a"), (100.0, "b"), (200.0, "c")] {
        let id = ledger.spawn(TransientKind::Ripple, at, name.to_string());
        timers.push((ledger.expires_at(id).unwrap_or(f64::NAN), id));
    }
    timers.sort_by(|x, y| x.0.total_cmp(&y.0));

    let mut removed = Vec::new();
    for (fires_at, id) in timers {
        if let Some(el) = ledger.retire(id) {
            removed.push((fires_at, el));
        }
        assert_eq!(ledger.retire(id), None, "second removal of {id:?}");
    }
    assert_eq!(
        removed,
        vec![
            (600.0, "a".to_string()),
            (700.0, "b".to_string()),
            (800.0, "c".to_string()),
        ]
    );
    assert_eq!(ledger.active(), 0);
}

#[test]
fn retire_is_idempotent_per_id() {
    let mut ledger = TransientLedger::new();
    let a = ledger.spawn(TransientKind::Wave, 0.0, 1u8);
    let b = ledger.spawn(TransientKind::Burst, 0.0, 2u8);
    assert_eq!(ledger.retire(a), Some(1));
    assert_eq!(ledger.retire(a), None);
    assert_eq!(ledger.kind(b), Some(TransientKind::Burst));
    assert_eq!(ledger.kind(a), None);
    assert_eq!(ledger.active(), 1);
}

#[test]
fn spawns_are_unbounded() {
    let mut ledger = TransientLedger::new();
    for i in 0..1000 {
        ledger.spawn(TransientKind::Ripple, i as f64, ());
    }
    assert_eq!(ledger.active(), 1000);
    assert_eq!(ledger.due(1599.0).len(), 1000);
}
