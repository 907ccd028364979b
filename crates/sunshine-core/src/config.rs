//! Page-effect configuration.
//!
//! `EffectsConfig::default()` reproduces the live page. The web front-end
//! validates it once at start-up and hands sections of it to each effect.

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SmoothingConfig {
    pub cursor_glow: f32,
    pub sun_drift: f32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            cursor_glow: CURSOR_GLOW_SMOOTHING,
            sun_drift: SUN_DRIFT_SMOOTHING,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterConfig {
    pub duration_ms: f64,
    pub stagger_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: COUNTER_DURATION_MS,
            stagger_ms: COUNTER_STAGGER_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrambleConfig {
    pub interval_ms: u32,
    pub ticks_per_char: u32,
    pub glyphs: &'static str,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            interval_ms: SCRAMBLE_INTERVAL_MS,
            ticks_per_char: SCRAMBLE_TICKS_PER_CHAR,
            glyphs: SCRAMBLE_GLYPHS,
        }
    }
}

/// CSS selectors the effects attach to. A selector matching nothing turns
/// the matching effect into a no-op.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectorConfig {
    pub sun: &'static str,
    pub navbar: &'static str,
    pub parallax_cards: &'static str,
    pub fade_in: &'static str,
    pub sections: &'static str,
    pub timeline_items: &'static str,
    pub stats_container: &'static str,
    pub stat_numbers: &'static str,
    pub hover_cards: &'static str,
    pub buttons: &'static str,
    pub donate_buttons: &'static str,
    pub week_badges: &'static str,
    pub hero_title: &'static str,
    pub section_headers: &'static str,
    pub icons: &'static str,
    pub nav_links: &'static str,
    pub lazy_images: &'static str,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            sun: ".sun",
            navbar: ".navbar",
            parallax_cards: ".about-card, .habit-card",
            fade_in: ".about-card, .habit-card, .impact-stat",
            sections: ".section",
            timeline_items: ".timeline-item",
            stats_container: ".hero-stats",
            stat_numbers: ".stat-number",
            hover_cards: ".about-card, .habit-card, .timeline-content",
            buttons: ".btn",
            donate_buttons: ".btn-donate, .btn-nav-donate",
            week_badges: ".week-badge",
            hero_title: ".hero-title",
            section_headers: ".section-header h2",
            icons: ".card-icon, .habit-icon, .impact-stat-icon",
            nav_links: ".nav-links a[href^=\"#\"]",
            lazy_images: "img[data-src]",
        }
    }
}

impl SelectorConfig {
    fn entries(&self) -> [(&'static str, &'static str); 17] {
        [
            ("sun", self.sun),
            ("navbar", self.navbar),
            ("parallax_cards", self.parallax_cards),
            ("fade_in", self.fade_in),
            ("sections", self.sections),
            ("timeline_items", self.timeline_items),
            ("stats_container", self.stats_container),
            ("stat_numbers", self.stat_numbers),
            ("hover_cards", self.hover_cards),
            ("buttons", self.buttons),
            ("donate_buttons", self.donate_buttons),
            ("week_badges", self.week_badges),
            ("hero_title", self.hero_title),
            ("section_headers", self.section_headers),
            ("icons", self.icons),
            ("nav_links", self.nav_links),
            ("lazy_images", self.lazy_images),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectsConfig {
    pub particles: ParticleConfig,
    pub smoothing: SmoothingConfig,
    pub counter: CounterConfig,
    pub scramble: ScrambleConfig,
    pub selectors: SelectorConfig,
}

impl EffectsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_factor("cursor_glow", self.smoothing.cursor_glow)?;
        check_factor("sun_drift", self.smoothing.sun_drift)?;
        if !(self.counter.duration_ms > 0.0) {
            return Err(ConfigError::Duration {
                name: "counter.duration_ms",
            });
        }
        if self.scramble.interval_ms == 0 {
            return Err(ConfigError::Duration {
                name: "scramble.interval_ms",
            });
        }
        if self.scramble.ticks_per_char == 0 {
            return Err(ConfigError::Duration {
                name: "scramble.ticks_per_char",
            });
        }
        if self.scramble.glyphs.is_empty() {
            return Err(ConfigError::EmptyGlyphs);
        }
        for (name, selector) in self.selectors.entries() {
            if selector.trim().is_empty() {
                return Err(ConfigError::EmptySelector(name));
            }
        }
        Ok(())
    }
}

fn check_factor(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::SmoothingFactor { name, value })
    }
}
