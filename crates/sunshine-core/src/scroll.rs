//! Scroll-sample updaters.
//!
//! Every function here is a pure function of one `ScrollSample` (or of an
//! element's top edge and the viewport height), so the same offset always
//! produces the same styles no matter what came before.

use crate::constants::*;
use crate::easing::clamp01;

/// One reading of the page's scroll geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollSample {
    /// Height that can actually be scrolled; zero or negative on short pages.
    #[inline]
    pub fn scrollable_height(&self) -> f64 {
        self.document_height - self.viewport_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunParallax {
    pub translate_y: f64,
    pub rotate_deg: f64,
}

#[inline]
pub fn sun_parallax(offset: f64) -> SunParallax {
    SunParallax {
        translate_y: offset * SUN_PARALLAX_FACTOR,
        rotate_deg: offset * SUN_ROTATE_FACTOR,
    }
}

/// How far an element has travelled up through the viewport: 0 when its top
/// edge sits on the bottom of the viewport, 1 when it reaches the top.
#[inline]
pub fn viewport_fraction(rect_top: f64, viewport_height: f64) -> Option<f64> {
    if viewport_height <= 0.0 {
        return None;
    }
    Some((viewport_height - rect_top) / viewport_height)
}

#[inline]
fn in_flight(rect_top: f64, viewport_height: f64) -> Option<f64> {
    viewport_fraction(rect_top, viewport_height).filter(|f| *f > 0.0 && *f < 1.0)
}

/// Vertical card offset in px; `None` leaves the card's last transform alone.
pub fn card_parallax(rect_top: f64, viewport_height: f64) -> Option<f64> {
    in_flight(rect_top, viewport_height).map(|f| (f - 0.5) * CARD_PARALLAX_RANGE_PX)
}

pub fn icon_rotation(rect_top: f64, viewport_height: f64) -> Option<f64> {
    in_flight(rect_top, viewport_height).map(|f| f * ICON_FULL_TURN_DEG)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarShade {
    Resting,
    Scrolled,
}

impl NavbarShade {
    pub fn background(self) -> &'static str {
        match self {
            Self::Resting => "rgba(18, 18, 26, 0.9)",
            Self::Scrolled => "rgba(10, 10, 15, 0.95)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            Self::Resting => "none",
            Self::Scrolled => "0 4px 16px rgba(0, 0, 0, 0.5)",
        }
    }
}

#[inline]
pub fn navbar_shade(offset: f64) -> NavbarShade {
    if offset > NAVBAR_SHADE_THRESHOLD_PX {
        NavbarShade::Scrolled
    } else {
        NavbarShade::Resting
    }
}

/// Scroll progress in percent, clamped to [0, 100]. Pages too short to
/// scroll report 0.
pub fn progress_percent(sample: &ScrollSample) -> f64 {
    let scrollable = sample.scrollable_height();
    if !(scrollable > 0.0) {
        return 0.0;
    }
    (sample.offset / scrollable * 100.0).clamp(0.0, 100.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressGlow {
    pub blur_px: f64,
    pub alpha: f64,
}

pub fn progress_glow(percent: f64) -> ProgressGlow {
    let g = clamp01(percent / 100.0);
    ProgressGlow {
        blur_px: PROGRESS_GLOW_BASE_PX + g * PROGRESS_GLOW_SPAN_PX,
        alpha: PROGRESS_ALPHA_BASE + g * PROGRESS_ALPHA_SPAN,
    }
}

/// Allows at most one pending frame callback at a time.
#[derive(Debug, Default)]
pub struct FrameGuard {
    pending: bool,
}

impl FrameGuard {
    /// Returns true if the caller should schedule a frame now.
    pub fn try_schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback once the work has run.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Latest scroll reading plus the coalescing guard, shared by the scroll
/// listener and the frame callback it schedules.
#[derive(Debug, Default)]
pub struct ScrollState {
    pub latest: ScrollSample,
    pub guard: FrameGuard,
}

impl ScrollState {
    /// Records `sample` and reports whether a frame needs scheduling.
    pub fn record(&mut self, sample: ScrollSample) -> bool {
        self.latest = sample;
        self.guard.try_schedule()
    }

    /// Takes the sample for the frame that is running now.
    pub fn begin_frame(&mut self) -> ScrollSample {
        self.guard.complete();
        self.latest
    }
}
