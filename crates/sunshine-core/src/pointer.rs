//! Pointer-following smoothing and pointer-relative geometry.

use crate::constants::*;
use glam::Vec2;

/// Element bounding box in viewport coordinates, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer position relative to the top-left corner.
    #[inline]
    pub fn local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }
}

/// Exponential smoothing of a 2D position toward a moving target.
#[derive(Clone, Copy, Debug)]
pub struct Smoother {
    pub current: Vec2,
    pub target: Vec2,
    pub factor: f32,
}

impl Smoother {
    pub fn new(factor: f32) -> Self {
        Self {
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            factor,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Moves `current` one step toward `target` and returns it.
    #[inline]
    pub fn step(&mut self) -> Vec2 {
        self.current += (self.target - self.current) * self.factor;
        self.current
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

/// 3D tilt for a card, leaning away from the pointer's offset to its centre.
pub fn tilt(rect: &Rect, client_x: f64, client_y: f64) -> Tilt {
    let (x, y) = rect.local(client_x, client_y);
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    Tilt {
        rotate_x: (y - center_y) / TILT_DIVISOR,
        rotate_y: (center_x - x) / TILT_DIVISOR,
    }
}

/// Translation that pulls a button toward the pointer.
pub fn magnetic_offset(rect: &Rect, client_x: f64, client_y: f64) -> (f64, f64) {
    let (x, y) = rect.local(client_x, client_y);
    (
        (x - rect.width / 2.0) * MAGNETIC_PULL,
        (y - rect.height / 2.0) * MAGNETIC_PULL,
    )
}

/// Drift of the sun away from its resting spot, from the smoothed pointer.
pub fn sun_drift(smoothed: Vec2, viewport: Vec2) -> Vec2 {
    let axis = |p: f32, extent: f32| {
        if extent > 0.0 {
            (p / extent * 100.0 - 50.0) * SUN_DRIFT_SCALE
        } else {
            0.0
        }
    };
    Vec2::new(axis(smoothed.x, viewport.x), axis(smoothed.y, viewport.y))
}

/// Document-level pointer events, as re-emitted by the front-end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Move(Vec2),
    Leave,
}

/// Page-lifetime pointer state: the latest raw pointer position and the two
/// smoothers that chase it (cursor glow and sun drift).
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub latest: Vec2,
    pub glow: Smoother,
    pub sun: Smoother,
    pub inside: bool,
}

impl PointerState {
    pub fn new(glow_factor: f32, sun_factor: f32) -> Self {
        Self {
            latest: Vec2::ZERO,
            glow: Smoother::new(glow_factor),
            sun: Smoother::new(sun_factor),
            inside: false,
        }
    }

    pub fn moved(&mut self, pos: Vec2) {
        self.latest = pos;
        self.inside = true;
        self.glow.set_target(pos);
        self.sun.set_target(pos);
    }

    pub fn left(&mut self) {
        self.inside = false;
    }

    pub fn apply(&mut self, input: &PointerInput) {
        match *input {
            PointerInput::Move(pos) => self.moved(pos),
            PointerInput::Leave => self.left(),
        }
    }
}
