//! Viewport-intersection reveal engine.
//!
//! The browser reports visibility; this engine decides what that means for
//! each registered element. One-shot registrations fire once and are then
//! forgotten. Repeating registrations report `Enter`/`Exit` whenever their
//! visibility state flips.

use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistrationId(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub struct Trigger {
    /// Visible fraction in [0, 1] at which the element counts as visible.
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `"0px 0px -50px 0px"`.
    pub root_margin: &'static str,
}

impl Trigger {
    pub fn at(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin: "0px",
        }
    }

    pub fn with_margin(mut self, root_margin: &'static str) -> Self {
        self.root_margin = root_margin;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    OneShot,
    Repeating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// One-shot reveal; the registration is gone after this.
    Reveal,
    Enter,
    Exit,
}

#[derive(Clone, Debug)]
struct Registration {
    mode: RevealMode,
    visible: bool,
}

#[derive(Debug, Default)]
pub struct RevealEngine {
    next_id: u32,
    registrations: FnvHashMap<RegistrationId, Registration>,
}

impl RevealEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, mode: RevealMode) -> RegistrationId {
        let id = RegistrationId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.registrations.insert(
            id,
            Registration {
                mode,
                visible: false,
            },
        );
        id
    }

    pub fn deregister(&mut self, id: RegistrationId) -> bool {
        self.registrations.remove(&id).is_some()
    }

    pub fn is_registered(&self, id: RegistrationId) -> bool {
        self.registrations.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Feeds one visibility report. Unknown (or already fired) ids yield
    /// `None`.
    pub fn observe(&mut self, id: RegistrationId, is_intersecting: bool) -> Option<RevealAction> {
        let reg = self.registrations.get_mut(&id)?;
        match reg.mode {
            RevealMode::OneShot => {
                if is_intersecting {
                    self.registrations.remove(&id);
                    Some(RevealAction::Reveal)
                } else {
                    None
                }
            }
            RevealMode::Repeating => {
                if reg.visible == is_intersecting {
                    return None;
                }
                reg.visible = is_intersecting;
                Some(if is_intersecting {
                    RevealAction::Enter
                } else {
                    RevealAction::Exit
                })
            }
        }
    }

    /// Processes one observer callback's batch of entries in order. The
    /// position of each fired action within the batch is returned alongside
    /// it so callers can stagger by batch index.
    pub fn observe_batch<I>(&mut self, entries: I) -> SmallVec<[(usize, RegistrationId, RevealAction); 8]>
    where
        I: IntoIterator<Item = (RegistrationId, bool)>,
    {
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(i, (id, hit))| self.observe(id, hit).map(|a| (i, id, a)))
            .collect()
    }
}

/// Delay for the `index`-th element of a staggered group.
#[inline]
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

/// CSS animation delay for the `index`-th character of a header reveal.
#[inline]
pub fn char_delay_s(index: usize) -> f64 {
    index as f64 * crate::constants::HEADER_CHAR_STEP_SEC
}
