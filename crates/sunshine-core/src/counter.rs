//! Numeric counter animator.
//!
//! A stat such as `"150+"` counts up from 0 to 150 along an ease-out quartic
//! curve and then snaps back to its exact original text. Stats without a
//! leading integer (the infinity glyph) never count; they get a pulse cue
//! instead.

use crate::constants::COUNTER_SYMBOLIC_GLYPH;
use crate::easing::ease_out_quart;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterTarget {
    Numeric { target: i64, final_text: String },
    Symbolic(String),
}

impl CounterTarget {
    /// Reads a stat's final text. Leading whitespace and an optional sign are
    /// accepted, then as many digits as follow; anything after the digits is
    /// kept only in `final_text`.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed == COUNTER_SYMBOLIC_GLYPH {
            return Self::Symbolic(text.to_string());
        }
        match leading_integer(trimmed) {
            Some(target) => Self::Numeric {
                target,
                final_text: text.to_string(),
            },
            None => Self::Symbolic(text.to_string()),
        }
    }
}

fn leading_integer(s: &str) -> Option<i64> {
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    final_text: String,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: i64, final_text: impl Into<String>, duration_ms: f64) -> Self {
        Self {
            target,
            final_text: final_text.into(),
            duration_ms,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Displayed value `elapsed_ms` after the start. Rounds toward zero, so
    /// the magnitude never decreases and never passes the target, whatever
    /// its sign.
    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        let t = self.progress(elapsed_ms);
        if t >= 1.0 {
            return self.target;
        }
        (ease_out_quart(t) * self.target as f64).trunc() as i64
    }

    pub fn frame(&self, elapsed_ms: f64) -> CounterFrame {
        if self.progress(elapsed_ms) >= 1.0 {
            CounterFrame {
                text: self.final_text.clone(),
                done: true,
            }
        } else {
            CounterFrame {
                text: self.value_at(elapsed_ms).to_string(),
                done: false,
            }
        }
    }
}

/// How a stat is brought on screen once the stats block is visible.
#[derive(Clone, Debug)]
pub enum StatCue {
    /// Symbolic text stays as written and gets the pulse animation.
    Pulse,
    Count(CounterAnimation),
}

impl StatCue {
    pub fn for_text(text: &str, duration_ms: f64) -> Self {
        match CounterTarget::parse(text) {
            CounterTarget::Symbolic(_) => Self::Pulse,
            CounterTarget::Numeric { target, final_text } => {
                Self::Count(CounterAnimation::new(target, final_text, duration_ms))
            }
        }
    }
}

/// Fires exactly once for the lifetime of the page.
#[derive(Debug, Default)]
pub struct OnceFlag {
    fired: bool,
}

impl OnceFlag {
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
