// Tuning constants shared by the core and the web front-end.

// Particle field
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_MAX_DELAY_SEC: f64 = 20.0;
pub const PARTICLE_MIN_DURATION_SEC: f64 = 15.0;
pub const PARTICLE_DURATION_SPAN_SEC: f64 = 15.0;
pub const PARTICLE_MIN_SIZE_PX: f64 = 2.0;
pub const PARTICLE_SIZE_SPAN_PX: f64 = 4.0;
pub const PARTICLE_MIN_OPACITY: f64 = 0.3;
pub const PARTICLE_OPACITY_SPAN: f64 = 0.7;

// Scroll-driven updaters
pub const SUN_PARALLAX_FACTOR: f64 = 0.3; // px of sun travel per px scrolled
pub const SUN_ROTATE_FACTOR: f64 = 0.05; // degrees per px scrolled
pub const CARD_PARALLAX_RANGE_PX: f64 = 20.0; // total travel across the viewport
pub const NAVBAR_SHADE_THRESHOLD_PX: f64 = 100.0;
pub const ICON_FULL_TURN_DEG: f64 = 360.0;
pub const PROGRESS_GLOW_BASE_PX: f64 = 10.0;
pub const PROGRESS_GLOW_SPAN_PX: f64 = 20.0;
pub const PROGRESS_ALPHA_BASE: f64 = 0.3;
pub const PROGRESS_ALPHA_SPAN: f64 = 0.4;

// Pointer-driven effects
pub const CURSOR_GLOW_SMOOTHING: f32 = 0.1;
pub const SUN_DRIFT_SMOOTHING: f32 = 0.05;
pub const SUN_DRIFT_SCALE: f32 = 0.2; // px of drift per percent off-centre
pub const TILT_DIVISOR: f64 = 20.0;
pub const MAGNETIC_PULL: f64 = 0.1;

// Transient effects (ms)
pub const RIPPLE_LIFETIME_MS: u32 = 600;
pub const WAVE_LIFETIME_MS: u32 = 650;
pub const WAVE_EXPAND_DELAY_MS: u32 = 10;
pub const WAVE_FINAL_SIZE_PX: f64 = 300.0;
pub const BURST_LIFETIME_MS: u32 = 600;

// Counters
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_STAGGER_MS: u32 = 200;
pub const COUNTER_SYMBOLIC_GLYPH: &str = "\u{221e}";

// Scramble
pub const SCRAMBLE_INTERVAL_MS: u32 = 30;
pub const SCRAMBLE_TICKS_PER_CHAR: u32 = 3;
pub const SCRAMBLE_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

// Reveals
pub const CARD_STAGGER_SEC: f64 = 0.1;
pub const CARD_REVEAL_STEP_MS: u32 = 100;
pub const TIMELINE_REVEAL_STEP_MS: u32 = 150;
pub const HEADER_CHAR_STEP_SEC: f64 = 0.03;
pub const CARD_HIDDEN_OFFSET_PX: f64 = 40.0;
