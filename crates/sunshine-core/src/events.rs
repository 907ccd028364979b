//! Typed, single-threaded event source.
//!
//! The web front-end installs exactly one DOM listener per browser event and
//! re-emits it through an `EventSource`; effects subscribe to the source
//! instead of the DOM, so tests can drive them by emitting synthetic events.

use std::cell::{Cell, RefCell};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

type Handler<E> = Box<dyn FnMut(&E)>;

pub struct EventSource<E> {
    next_id: Cell<u64>,
    // Live subscriptions; updated immediately, even mid-emit.
    ids: RefCell<Vec<SubscriptionId>>,
    // Moved out while `emit` runs so handlers can (un)subscribe.
    handlers: RefCell<Vec<(SubscriptionId, Handler<E>)>>,
    added_during_emit: RefCell<Vec<(SubscriptionId, Handler<E>)>>,
    emitting: Cell<bool>,
}

impl<E> Default for EventSource<E> {
    fn default() -> Self {
        Self {
            next_id: Cell::new(0),
            ids: RefCell::new(Vec::new()),
            handlers: RefCell::new(Vec::new()),
            added_during_emit: RefCell::new(Vec::new()),
            emitting: Cell::new(false),
        }
    }
}

impl<E> EventSource<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.ids.borrow_mut().push(id);
        let entry = (id, Box::new(handler) as Handler<E>);
        if self.emitting.get() {
            self.added_during_emit.borrow_mut().push(entry);
        } else {
            self.handlers.borrow_mut().push(entry);
        }
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut ids = self.ids.borrow_mut();
        let before = ids.len();
        ids.retain(|i| *i != id);
        if ids.len() == before {
            return false;
        }
        if !self.emitting.get() {
            self.handlers.borrow_mut().retain(|(h, _)| *h != id);
        }
        true
    }

    /// Delivers `event` to every handler subscribed before this call, in
    /// subscription order. Subscriptions changed by a handler take effect on
    /// the next emit.
    pub fn emit(&self, event: &E) {
        if self.emitting.replace(true) {
            log::warn!("[events] nested emit ignored");
            return;
        }
        let mut running = std::mem::take(&mut *self.handlers.borrow_mut());
        for (_, handler) in running.iter_mut() {
            handler(event);
        }
        self.emitting.set(false);

        running.append(&mut self.added_during_emit.borrow_mut());
        let ids = self.ids.borrow();
        running.retain(|(h, _)| ids.contains(h));
        *self.handlers.borrow_mut() = running;
    }

    pub fn len(&self) -> usize {
        self.ids.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
