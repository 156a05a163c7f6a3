use crate::{
    animation::spec::WaveSpec,
    config::wave::WaveConfig,
    foundation::core::{Affine, FrameTime, Vec2},
    foundation::math::{clamp_sym, fixed2},
};

/// Inputs shared by every element within one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameCtx {
    /// Frame timestamp, identical for every element of the frame.
    pub time: FrameTime,
    /// Amplitude reduction flag, fixed at startup.
    pub reduced_motion: bool,
    /// Parallax snapshot taken once per frame.
    pub scroll_parallax_y: f64,
}

/// Intermediate terms of the per-frame update for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveSample {
    /// Phase argument `t * speed * multiplier + phase`.
    pub theta: f64,
    /// Horizontal displacement before the cap.
    pub dx_raw: f64,
    /// Horizontal displacement after the cap.
    pub dx: f64,
    /// Vertical oscillation alone.
    pub dy_wave: f64,
    /// Scroll-derived vertical offset.
    pub parallax_offset: f64,
    /// Rotation before degree scaling.
    pub rotate: f64,
}

/// Final transform written to one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WaveTransform {
    /// Horizontal translation.
    pub dx: f64,
    /// Vertical translation (wave + parallax).
    pub dy: f64,
    /// Rotation in degrees.
    pub rotate_deg: f64,
}

impl WaveTransform {
    /// SVG `transform` attribute value: `translate(x, y) rotate(deg)`, two decimals each.
    pub fn to_attr(self) -> String {
        format!(
            "translate({}, {}) rotate({})",
            fixed2(self.dx),
            fixed2(self.dy),
            fixed2(self.rotate_deg)
        )
    }

    /// The same transform as a matrix: translate, then rotate about the local origin.
    pub fn to_affine(self) -> Affine {
        Affine::translate(Vec2::new(self.dx, self.dy))
            * Affine::rotate(self.rotate_deg.to_radians())
    }
}

/// Evaluate the update rule for the element at `index` (document order).
pub fn sample_wave(spec: &WaveSpec, index: usize, ctx: FrameCtx, cfg: &WaveConfig) -> WaveSample {
    let t = ctx.time.as_secs();
    let omega = spec.speed * cfg.speed_multiplier;
    let theta = t * omega + spec.phase;

    let scale = if ctx.reduced_motion {
        cfg.reduced_motion_scale
    } else {
        1.0
    };
    let (sin, cos) = theta.sin_cos();

    let dx_raw = sin * spec.amp_x * scale;
    // Only the horizontal term is capped.
    let dx = clamp_sym(dx_raw, cfg.max_dx);
    let dy_wave = cos * spec.amp_y * scale;
    let rotate = spec.rotate_amplitude * sin;
    let parallax_offset = ctx.scroll_parallax_y * cfg.parallax_factor(index);

    WaveSample {
        theta,
        dx_raw,
        dx,
        dy_wave,
        parallax_offset,
        rotate,
    }
}

impl WaveSample {
    /// Combine the terms into the written transform.
    pub fn transform(&self, cfg: &WaveConfig) -> WaveTransform {
        WaveTransform {
            dx: self.dx,
            dy: self.dy_wave + self.parallax_offset,
            rotate_deg: self.rotate * cfg.rotate_degrees_scale,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/wave.rs"]
mod tests;
