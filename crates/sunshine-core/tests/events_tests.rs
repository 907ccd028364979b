// Host-side tests for the typed event source.

use std::cell::RefCell;
use std::rc::Rc;
use sunshine_core::*;

#[test]
fn emit_reaches_subscribers_in_order() {
    let source: EventSource<u32> = EventSource::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    for tag in ["a", "b", "c"] {
        let seen = seen.clone();
        source.subscribe(move |v: &u32| seen.borrow_mut().push(format!("{tag}{v}")));
    }
    source.emit(&1);
    assert_eq!(*seen.borrow(), vec!["a1", "b1", "c1"]);
    assert_eq!(source.len(), 3);
}

#[test]
fn unsubscribe_stops_delivery() {
    let source: EventSource<()> = EventSource::new();
    let count = Rc::new(RefCell::new(0));
    let c = count.clone();
    let id = source.subscribe(move |_| *c.borrow_mut() += 1);
    source.emit(&());
    assert!(source.unsubscribe(id));
    assert!(!source.unsubscribe(id));
    source.emit(&());
    assert_eq!(*count.borrow(), 1);
    assert!(source.is_empty());
}

#[test]
fn subscribe_during_emit_takes_effect_next_emit() {
    let source: Rc<EventSource<u8>> = Rc::new(EventSource::new());
    let late_calls = Rc::new(RefCell::new(0));

    let src = source.clone();
    let late = late_calls.clone();
    let added = Rc::new(RefCell::new(false));
    source.subscribe(move |_| {
        if !*added.borrow() {
            *added.borrow_mut() = true;
            let late = late.clone();
            src.subscribe(move |_| *late.borrow_mut() += 1);
        }
    });

    source.emit(&0);
    assert_eq!(*late_calls.borrow(), 0);
    assert_eq!(source.len(), 2);
    source.emit(&0);
    assert_eq!(*late_calls.borrow(), 1);
}

#[test]
fn unsubscribe_self_during_emit() {
    let source: Rc<EventSource<u8>> = Rc::new(EventSource::new());
    let calls = Rc::new(RefCell::new(0));
    let my_id: Rc<RefCell<Option<SubscriptionId>>> = Rc::new(RefCell::new(None));

    let src = source.clone();
    let c = calls.clone();
    let id_cell = my_id.clone();
    let id = source.subscribe(move |_| {
        *c.borrow_mut() += 1;
        if let Some(id) = *id_cell.borrow() {
            src.unsubscribe(id);
        }
    });
    *my_id.borrow_mut() = Some(id);

    source.emit(&1);
    source.emit(&2);
    assert_eq!(*calls.borrow(), 1);
    assert!(source.is_empty());
}

#[test]
fn scroll_subscribers_see_the_same_sample() {
    let source: EventSource<ScrollSample> = EventSource::new();
    let widths = Rc::new(RefCell::new(Vec::new()));
    let shades = Rc::new(RefCell::new(Vec::new()));
    let w = widths.clone();
    source.subscribe(move |s: &ScrollSample| w.borrow_mut().push(progress_percent(s)));
    let n = shades.clone();
    source.subscribe(move |s: &ScrollSample| n.borrow_mut().push(navbar_shade(s.offset)));

    source.emit(&ScrollSample {
        offset: 1200.0,
        viewport_height: 800.0,
        document_height: 2000.0,
    });
    assert_eq!(*widths.borrow(), vec![100.0]);
    assert_eq!(*shades.borrow(), vec![NavbarShade::Scrolled]);
}
