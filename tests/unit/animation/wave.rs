use super::*;
use std::f64::consts::FRAC_PI_2;

fn spec(amp_x: f64, amp_y: f64, speed: f64, phase: f64, rotate_amplitude: f64) -> WaveSpec {
    WaveSpec {
        amp_x,
        amp_y,
        speed,
        phase,
        rotate_amplitude,
    }
}

fn ctx(time_ms: f64, reduced_motion: bool, scroll_parallax_y: f64) -> FrameCtx {
    FrameCtx {
        time: FrameTime::from_millis(time_ms),
        reduced_motion,
        scroll_parallax_y,
    }
}

#[test]
fn one_second_half_speed_matches_reference_values() {
    let cfg = WaveConfig::default();
    let s = sample_wave(&spec(10.0, 6.0, 0.5, 0.0, 0.1), 0, ctx(1000.0, false, 0.0), &cfg);
    assert!((s.theta - 1.0).abs() < 1e-12);
    assert!((s.dx_raw - 8.414_709_848_078_965).abs() < 1e-9);
    assert_eq!(s.dx, s.dx_raw);

    let attr = s.transform(&cfg).to_attr();
    assert!(attr.starts_with("translate(8.41, "), "{attr}");
}

#[test]
fn horizontal_cap_is_load_bearing() {
    let cfg = WaveConfig::default();
    // speed 0 freezes theta at the phase.
    let s = sample_wave(&spec(17.9, 4.0, 0.0, FRAC_PI_2, 0.0), 0, ctx(0.0, false, 0.0), &cfg);
    assert!((s.dx_raw - 17.9).abs() < 1e-12);
    assert_eq!(s.dx, 10.0);
    assert_eq!(s.transform(&cfg).to_attr(), "translate(10.00, 0.00) rotate(0.00)");

    let s = sample_wave(&spec(17.9, 4.0, 0.0, -FRAC_PI_2, 0.0), 0, ctx(0.0, false, 0.0), &cfg);
    assert_eq!(s.dx, -10.0);
}

#[test]
fn dx_never_exceeds_cap_over_time() {
    let cfg = WaveConfig::default();
    let sp = spec(17.99, 15.0, 1.3, 0.4, 0.19);
    for frame in 0..2_000 {
        let s = sample_wave(&sp, 2, ctx(frame as f64 * 16.7, false, 0.0), &cfg);
        assert!((-10.0..=10.0).contains(&s.dx));
    }
}

#[test]
fn vertical_and_rotation_are_not_capped() {
    let cfg = WaveConfig::default();
    let s = sample_wave(&spec(8.0, 15.0, 0.0, 0.0, 0.19), 3, ctx(0.0, false, 400.0), &cfg);
    let t = s.transform(&cfg);
    assert!((t.dy - (15.0 + 400.0 * 0.75)).abs() < 1e-9);
    assert!(t.dy > cfg.max_dx);
}

#[test]
fn reduced_motion_quarters_amplitudes() {
    let cfg = WaveConfig::default();
    let sp = spec(12.0, 10.0, 0.7, 0.3, 0.15);
    for time in [0.0, 250.0, 1000.0, 3333.0] {
        let full = sample_wave(&sp, 1, ctx(time, false, 0.0), &cfg);
        let reduced = sample_wave(&sp, 1, ctx(time, true, 0.0), &cfg);
        assert!((reduced.dy_wave - full.dy_wave * 0.25).abs() < 1e-12);
        assert!((reduced.dx_raw - full.dx_raw * 0.25).abs() < 1e-12);
        // Rotation is not amplitude-scaled.
        assert_eq!(reduced.rotate, full.rotate);
    }
}

#[test]
fn parallax_uses_index_depth() {
    let cfg = WaveConfig::default();
    let sp = spec(8.0, 4.0, 0.0, FRAC_PI_2, 0.0);
    let first = sample_wave(&sp, 0, ctx(0.0, false, 100.0), &cfg);
    let fourth = sample_wave(&sp, 3, ctx(0.0, false, 100.0), &cfg);
    assert!((first.parallax_offset - 30.0).abs() < 1e-9);
    assert!((fourth.parallax_offset - 75.0).abs() < 1e-9);
}

#[test]
fn rotation_is_written_in_scaled_degrees() {
    let cfg = WaveConfig::default();
    let s = sample_wave(&spec(8.0, 4.0, 0.0, FRAC_PI_2, -0.15), 0, ctx(0.0, false, 0.0), &cfg);
    let t = s.transform(&cfg);
    assert!((t.rotate_deg + 1.5).abs() < 1e-12);
    assert!(t.to_attr().ends_with("rotate(-1.50)"));
}

#[test]
fn affine_translates_then_rotates() {
    let t = WaveTransform {
        dx: 3.0,
        dy: -2.0,
        rotate_deg: 90.0,
    };
    let p = t.to_affine() * kurbo::Point::new(1.0, 0.0);
    assert!((p.x - 3.0).abs() < 1e-9);
    assert!((p.y - -1.0).abs() < 1e-9);

    let identity = WaveTransform {
        dx: 0.0,
        dy: 0.0,
        rotate_deg: 0.0,
    };
    assert_eq!(identity.to_affine(), Affine::IDENTITY);
}
