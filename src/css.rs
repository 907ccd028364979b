// Inline-style values written by the effects. Kept free of web-sys so the
// formatting can be checked on the host.

use sunshine_core::{ParticleSpec, ProgressGlow, RippleGeometry, SunParallax, Tilt};

pub const CARD_HOVER_SHADOW: &str = "0 8px 32px rgba(244, 196, 48, 0.2)";
pub const DONATE_GLOW_SHADOW: &str = "0 0 60px rgba(244, 196, 48, 0.8)";
pub const STAT_PULSE_ANIMATION: &str = "pulseStat 2s ease-in-out infinite";
pub const BADGE_PULSE_ANIMATION: &str = "pulseBadge 0.5s ease";
pub const TILT_TRANSITION: &str = "box-shadow 0.3s ease";

pub const CURSOR_GLOW_STYLE: &str = "position: fixed; width: 300px; height: 300px; \
    border-radius: 50%; \
    background: radial-gradient(circle, rgba(244, 196, 48, 0.15) 0%, transparent 70%); \
    pointer-events: none; z-index: 9998; transform: translate(-50%, -50%); \
    transition: opacity 0.3s ease; opacity: 0;";

pub const PROGRESS_BAR_STYLE: &str = "position: fixed; top: 0; left: 0; height: 3px; \
    background: linear-gradient(90deg, #f4c430, #ffd966); width: 0%; z-index: 9999; \
    transition: width 0.1s ease; box-shadow: 0 0 10px rgba(244, 196, 48, 0.5);";

pub const WAVE_STYLE: &str = "position: absolute; top: 50%; left: 50%; width: 0; height: 0; \
    border-radius: 50%; \
    background: radial-gradient(circle, rgba(255, 255, 255, 0.2) 0%, transparent 70%); \
    transform: translate(-50%, -50%); transition: width 0.6s, height 0.6s; \
    pointer-events: none;";

#[inline]
pub fn px(v: f64) -> String {
    format!("{v}px")
}

#[inline]
pub fn pct(v: f64) -> String {
    format!("{v}%")
}

pub fn sun_transform(p: &SunParallax) -> String {
    format!(
        "translate(-50%, calc(-50% + {}px)) rotate({}deg)",
        p.translate_y, p.rotate_deg
    )
}

pub fn sun_left(drift_x: f32) -> String {
    format!("calc(50% + {drift_x}px)")
}

pub fn sun_top(drift_y: f32) -> String {
    format!("calc(20% + {drift_y}px)")
}

pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

pub fn translate(x: f64, y: f64) -> String {
    format!("translate({x}px, {y}px)")
}

pub fn rotate(deg: f64) -> String {
    format!("rotate({deg}deg)")
}

pub fn tilt_transform(t: &Tilt) -> String {
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) translateZ(10px)",
        t.rotate_x, t.rotate_y
    )
}

pub fn progress_shadow(g: &ProgressGlow) -> String {
    format!("0 0 {}px rgba(244, 196, 48, {})", g.blur_px, g.alpha)
}

pub fn fade_transition(delay_sec: f64) -> String {
    format!(
        "opacity 0.8s cubic-bezier(0.4, 0, 0.2, 1) {d}s, transform 0.8s cubic-bezier(0.4, 0, 0.2, 1) {d}s",
        d = delay_sec
    )
}

pub fn char_animation(delay_sec: f64) -> String {
    format!("fadeInChar 0.5s ease forwards {delay_sec}s")
}

pub fn particle_style(p: &ParticleSpec) -> String {
    format!(
        "left: {}%; animation-delay: {}s; animation-duration: {}s; width: {}px; height: {}px; opacity: {};",
        p.left_pct, p.delay_sec, p.duration_sec, p.size_px, p.size_px, p.opacity
    )
}

pub fn ripple_style(g: &RippleGeometry) -> String {
    format!(
        "width: {s}px; height: {s}px; left: {}px; top: {}px;",
        g.left,
        g.top,
        s = g.size
    )
}

pub fn burst_style(x: f64, y: f64) -> String {
    format!(
        "position: absolute; width: 10px; height: 10px; \
         background: radial-gradient(circle, rgba(255, 255, 255, 0.8) 0%, transparent 70%); \
         border-radius: 50%; left: {x}px; top: {y}px; \
         transform: translate(-50%, -50%) scale(0); animation: expandCircle 0.6s ease-out; \
         pointer-events: none;"
    )
}

/// Keyframes and classes the effects depend on; injected into `<head>`.
pub const KEYFRAMES_CSS: &str = r#"
@keyframes pulseStat {
    0%, 100% { transform: scale(1); opacity: 1; }
    50% { transform: scale(1.1); opacity: 0.8; }
}
@keyframes pulseBadge {
    0%, 100% { transform: scale(1); }
    50% { transform: scale(1.05); }
}
.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.3);
    transform: scale(0);
    animation: rippleEffect 0.6s ease-out;
    pointer-events: none;
}
@keyframes rippleEffect {
    to { transform: scale(2); opacity: 0; }
}
@keyframes fadeInChar {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes expandCircle {
    to { transform: translate(-50%, -50%) scale(30); opacity: 0; }
}
.timeline-item.visible {
    opacity: 1 !important;
    transform: translateY(0) !important;
}
"#;
