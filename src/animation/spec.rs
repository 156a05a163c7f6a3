use crate::{animation::random::RandomSource, config::wave::WaveConfig};

/// Motion parameters for one wave element, drawn once at startup.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveSpec {
    /// Horizontal amplitude.
    pub amp_x: f64,
    /// Vertical amplitude.
    pub amp_y: f64,
    /// Angular-frequency multiplier.
    pub speed: f64,
    /// Initial phase offset (radians).
    pub phase: f64,
    /// Rotation amplitude.
    pub rotate_amplitude: f64,
}

impl WaveSpec {
    /// Draw one spec; fields are sampled in declaration order.
    pub fn sample(rng: &mut dyn RandomSource, cfg: &WaveConfig) -> Self {
        Self {
            amp_x: cfg.amp_x.sample(rng),
            amp_y: cfg.amp_y.sample(rng),
            speed: cfg.speed.sample(rng),
            phase: cfg.phase.sample(rng),
            rotate_amplitude: cfg.rotate_amplitude.sample(rng),
        }
    }

    /// Whether every field lies in its configured range.
    pub fn is_within(&self, cfg: &WaveConfig) -> bool {
        cfg.amp_x.contains(self.amp_x)
            && cfg.amp_y.contains(self.amp_y)
            && cfg.speed.contains(self.speed)
            && cfg.phase.contains(self.phase)
            && cfg.rotate_amplitude.contains(self.rotate_amplitude)
    }
}

/// Generate `count` independent specs, index `i` belonging to the `i`-th element in document
/// order.
pub fn generate_wave_specs(
    rng: &mut dyn RandomSource,
    count: usize,
    cfg: &WaveConfig,
) -> Vec<WaveSpec> {
    (0..count).map(|_| WaveSpec::sample(&mut *rng, cfg)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spec.rs"]
mod tests;
