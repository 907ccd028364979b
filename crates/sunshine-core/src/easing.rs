#[inline]
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, 1.0)
}

/// `1 - (1 - t)^4`, with `t` clamped to [0, 1].
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    let t = clamp01(t);
    1.0 - (1.0 - t).powi(4)
}
