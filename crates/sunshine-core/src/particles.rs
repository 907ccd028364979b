use crate::constants::*;
use rand::Rng;

/// Randomized placement and timing for one floating particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub left_pct: f64,
    pub delay_sec: f64,
    pub duration_sec: f64,
    pub size_px: f64,
    pub opacity: f64,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.gen::<f64>() * 100.0,
            delay_sec: rng.gen::<f64>() * PARTICLE_MAX_DELAY_SEC,
            duration_sec: PARTICLE_MIN_DURATION_SEC + rng.gen::<f64>() * PARTICLE_DURATION_SPAN_SEC,
            size_px: PARTICLE_MIN_SIZE_PX + rng.gen::<f64>() * PARTICLE_SIZE_SPAN_PX,
            opacity: PARTICLE_MIN_OPACITY + rng.gen::<f64>() * PARTICLE_OPACITY_SPAN,
        }
    }
}

pub fn generate_particles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ParticleSpec> {
    (0..count).map(|_| ParticleSpec::random(rng)).collect()
}
