//! Disposable click/hover effects (ripple, wave, burst).
//!
//! Each spawn is independent: it gets its own id and its own expiry, and
//! retiring one never touches another. There is no cap on how many can be
//! alive at once.

use crate::constants::*;
use crate::pointer::Rect;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransientKind {
    Ripple,
    Wave,
    Burst,
}

impl TransientKind {
    pub fn lifetime_ms(self) -> u32 {
        match self {
            Self::Ripple => RIPPLE_LIFETIME_MS,
            Self::Wave => WAVE_LIFETIME_MS,
            Self::Burst => BURST_LIFETIME_MS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ripple => "ripple",
            Self::Wave => "wave",
            Self::Burst => "burst",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// Square ripple covering the host element, centred on the click.
pub fn ripple_geometry(rect: &Rect, client_x: f64, client_y: f64) -> RippleGeometry {
    let size = rect.width.max(rect.height);
    let (x, y) = rect.local(client_x, client_y);
    RippleGeometry {
        size,
        left: x - size / 2.0,
        top: y - size / 2.0,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransientId(pub u64);

#[derive(Debug)]
struct Live<T> {
    kind: TransientKind,
    expires_at_ms: f64,
    payload: T,
}

/// Live transient effects, each owning whatever must be torn down when it
/// expires (on the page, the effect's element).
#[derive(Debug)]
pub struct TransientLedger<T> {
    next_id: u64,
    live: FnvHashMap<TransientId, Live<T>>,
}

impl<T> Default for TransientLedger<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            live: FnvHashMap::default(),
        }
    }
}

impl<T> TransientLedger<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, kind: TransientKind, now_ms: f64, payload: T) -> TransientId {
        let id = TransientId(self.next_id);
        self.next_id += 1;
        self.live.insert(
            id,
            Live {
                kind,
                expires_at_ms: now_ms + kind.lifetime_ms() as f64,
                payload,
            },
        );
        id
    }

    pub fn expires_at(&self, id: TransientId) -> Option<f64> {
        self.live.get(&id).map(|l| l.expires_at_ms)
    }

    pub fn kind(&self, id: TransientId) -> Option<TransientKind> {
        self.live.get(&id).map(|l| l.kind)
    }

    /// Removes `id` and hands back its payload for teardown. `None` if it
    /// was already retired.
    pub fn retire(&mut self, id: TransientId) -> Option<T> {
        self.live.remove(&id).map(|l| l.payload)
    }

    /// Ids whose lifetime has elapsed at `now_ms`, oldest first.
    pub fn due(&self, now_ms: f64) -> Vec<TransientId> {
        let mut ids: Vec<_> = self
            .live
            .iter()
            .filter(|(_, l)| l.expires_at_ms <= now_ms)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    pub fn active(&self) -> usize {
        self.live.len()
    }
}
