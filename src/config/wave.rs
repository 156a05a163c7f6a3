use std::path::Path;

use crate::{
    animation::random::RandomSource,
    foundation::error::{WaveError, WaveResult},
};

/// Half-open sampling range `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound.
    pub max: f64,
}

impl SampleRange {
    /// Build a range without validation; see [`SampleRange::validate`].
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `max - min`.
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Map one uniform draw from `rng` onto the range. The result stays below `max` even when
    /// `min + u * span` rounds up to it.
    pub fn sample(self, rng: &mut dyn RandomSource) -> f64 {
        let v = self.min + rng.next_f64() * self.span();
        if v >= self.max && self.max > self.min {
            return self.max.next_down();
        }
        v
    }

    /// Whether `v` lies in `[min, max)`.
    pub fn contains(self, v: f64) -> bool {
        self.min <= v && v < self.max
    }

    fn validate(self, name: &str) -> WaveResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(WaveError::config(format!("{name} range must be finite")));
        }
        if self.min > self.max {
            return Err(WaveError::config(format!("{name} range min must be <= max")));
        }
        Ok(())
    }
}

/// Tunables for wave generation and the per-frame update rule.
///
/// Every field has a default matching the stock page behavior, so an empty JSON object is a
/// valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaveConfig {
    /// Horizontal amplitude range.
    pub amp_x: SampleRange,
    /// Vertical amplitude range.
    pub amp_y: SampleRange,
    /// Angular-frequency multiplier range.
    pub speed: SampleRange,
    /// Initial phase range (radians).
    pub phase: SampleRange,
    /// Rotation amplitude range.
    pub rotate_amplitude: SampleRange,
    /// Factor applied to `speed` to get angular speed.
    pub speed_multiplier: f64,
    /// Hard cap on horizontal displacement magnitude.
    pub max_dx: f64,
    /// Amplitude scale applied under reduced motion.
    pub reduced_motion_scale: f64,
    /// Parallax factor of the first element.
    pub parallax_base: f64,
    /// Parallax factor increment per element index.
    pub parallax_step: f64,
    /// Scroll offset to parallax ratio.
    pub scroll_factor: f64,
    /// Viewports narrower than this force reduced motion.
    pub narrow_viewport_px: f64,
    /// Degrees written per unit of rotation.
    pub rotate_degrees_scale: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            amp_x: SampleRange::new(8.0, 18.0),
            amp_y: SampleRange::new(4.0, 16.0),
            speed: SampleRange::new(0.4, 1.4),
            phase: SampleRange::new(0.0, std::f64::consts::TAU),
            rotate_amplitude: SampleRange::new(-0.2, 0.2),
            speed_multiplier: 2.0,
            max_dx: 10.0,
            reduced_motion_scale: 0.25,
            parallax_base: 0.3,
            parallax_step: 0.15,
            scroll_factor: 0.5,
            narrow_viewport_px: 600.0,
            rotate_degrees_scale: 10.0,
        }
    }
}

impl WaveConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> WaveResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> WaveResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            WaveError::config(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    /// Check ranges and scalars.
    pub fn validate(&self) -> WaveResult<()> {
        self.amp_x.validate("amp_x")?;
        self.amp_y.validate("amp_y")?;
        self.speed.validate("speed")?;
        self.phase.validate("phase")?;
        self.rotate_amplitude.validate("rotate_amplitude")?;

        let scalars = [
            ("speed_multiplier", self.speed_multiplier),
            ("max_dx", self.max_dx),
            ("reduced_motion_scale", self.reduced_motion_scale),
            ("parallax_base", self.parallax_base),
            ("parallax_step", self.parallax_step),
            ("scroll_factor", self.scroll_factor),
            ("narrow_viewport_px", self.narrow_viewport_px),
            ("rotate_degrees_scale", self.rotate_degrees_scale),
        ];
        for (name, v) in scalars {
            if !v.is_finite() {
                return Err(WaveError::config(format!("{name} must be finite")));
            }
        }
        if self.max_dx < 0.0 {
            return Err(WaveError::config("max_dx must be >= 0"));
        }
        Ok(())
    }

    /// Parallax factor for the element at `index` (0-based, document order).
    pub fn parallax_factor(&self, index: usize) -> f64 {
        self.parallax_base + (index as f64) * self.parallax_step
    }

    /// Whether reduced motion applies for the given preference and viewport width.
    pub fn reduced_motion(&self, prefers_reduced: bool, viewport_width: f64) -> bool {
        prefers_reduced || viewport_width < self.narrow_viewport_px
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/wave.rs"]
mod tests;
