use super::*;
use crate::{
    animation::random::Rng64,
    host::sim::{SimDocument, SimHost, SimMotion},
};

fn fixed_spec(amp_x: f64, speed: f64, phase: f64) -> WaveSpec {
    WaveSpec {
        amp_x,
        amp_y: 8.0,
        speed,
        phase,
        rotate_amplitude: 0.1,
    }
}

fn elements(doc: &SimDocument) -> Vec<Rc<dyn WaveElement>> {
    doc.wave_elements()
}

#[test]
fn empty_document_registers_nothing() {
    let host = SimHost::default();
    let doc = SimDocument::with_waves(0);
    let handle = WaveAnimator::default()
        .start(&doc, &host.services(), &mut Rng64::new(1))
        .unwrap();
    assert!(handle.is_none());
    assert_eq!(host.scroll.listener_count(), 0);
    assert_eq!(host.scheduler.pending_frames(), 0);
    assert_eq!(host.scheduler.requests_made(), 0);
    assert_eq!(host.scroll.reads(), 0);
}

#[test]
fn start_arms_one_frame_and_reads_initial_scroll() {
    let host = SimHost::default();
    host.scroll.scroll_to(200.0);
    let doc = SimDocument::with_waves(3);
    let handle = WaveAnimator::default()
        .start(&doc, &host.services(), &mut Rng64::new(1))
        .unwrap()
        .unwrap();

    assert_eq!(handle.wave_count(), 3);
    assert_eq!(handle.specs().len(), 3);
    assert_eq!(host.scroll.listener_count(), 1);
    assert_eq!(host.scheduler.pending_frames(), 1);
    assert_eq!(handle.parallax_updates(), 1);
    assert_eq!(handle.state().scroll_parallax_y(), 100.0);
    assert_eq!(doc.total_writes(), 0);
}

#[test]
fn every_frame_writes_every_element_and_rearms() {
    let host = SimHost::default();
    let doc = SimDocument::with_waves(4);
    let handle = WaveAnimator::default()
        .start(&doc, &host.services(), &mut Rng64::new(5))
        .unwrap()
        .unwrap();

    for _ in 0..10 {
        host.scheduler.advance(16.0);
    }
    assert_eq!(handle.frames_rendered(), 10);
    for el in &doc.elements {
        assert_eq!(el.write_count(), 10);
    }
    assert_eq!(host.scheduler.pending_frames(), 1);
}

#[test]
fn written_attribute_matches_reference_frame() {
    let host = SimHost::default();
    let doc = SimDocument::with_waves(1);
    let handle = WaveAnimator::default()
        .start_with_specs(elements(&doc), vec![fixed_spec(10.0, 0.5, 0.0)], &host.services())
        .unwrap()
        .unwrap();

    host.scheduler.run_frame(FrameTime::from_millis(1000.0));
    let attr = doc.elements[0].last().unwrap();
    assert!(attr.starts_with("translate(8.41, "), "{attr}");
    assert_eq!(handle.sample_at(FrameTime::from_millis(1000.0))[0].to_attr(), attr);
}

#[test]
fn scroll_burst_is_coalesced_into_one_update() {
    let host = SimHost::default();
    let doc = SimDocument::with_waves(2);
    let handle = WaveAnimator::default()
        .start(&doc, &host.services(), &mut Rng64::new(2))
        .unwrap()
        .unwrap();
    assert_eq!(handle.parallax_updates(), 1);

    host.scroll.scroll_to(100.0);
    host.scroll.scroll_to(150.0);
    host.scroll.scroll_to(200.0);
    // frame loop + one coalesced parallax request
    assert_eq!(host.scheduler.pending_frames(), 2);

    host.scheduler.advance(16.0);
    assert_eq!(handle.parallax_updates(), 2);
    assert_eq!(handle.state().scroll_parallax_y(), 100.0);
}

#[test]
fn all_elements_share_one_parallax_snapshot_per_frame() {
    let host = SimHost::default();
    let doc = SimDocument::with_waves(4);
    let specs = vec![fixed_spec(8.0, 0.0, 0.0); 4];
    let handle = WaveAnimator::default()
        .start_with_specs(elements(&doc), specs, &host.services())
        .unwrap()
        .unwrap();

    host.scroll.scroll_to(400.0);
    host.scheduler.advance(16.0);
    // The frame callback was queued before the parallax update, so it saw the old value.
    assert_eq!(
        doc.elements[3].last().as_deref(),
        Some("translate(0.00, 8.00) rotate(0.00)")
    );
    assert_eq!(handle.state().scroll_parallax_y(), 200.0);

    host.scheduler.advance(16.0);
    let expected_y = [8.0 + 60.0, 8.0 + 90.0, 8.0 + 120.0, 8.0 + 150.0];
    for (el, y) in doc.elements.iter().zip(expected_y) {
        assert_eq!(
            el.last().unwrap(),
            format!("translate(0.00, {y:.2}) rotate(0.00)")
        );
    }
}

#[test]
fn reduced_motion_comes_from_preference_or_narrow_viewport() {
    for (motion, expected) in [
        (
            SimMotion {
                prefers_reduced: true,
                viewport_width: 1920.0,
            },
            true,
        ),
        (
            SimMotion {
                prefers_reduced: false,
                viewport_width: 599.0,
            },
            true,
        ),
        (SimMotion::default(), false),
    ] {
        let host = SimHost::new(motion);
        let doc = SimDocument::with_waves(1);
        let handle = WaveAnimator::default()
            .start(&doc, &host.services(), &mut Rng64::new(3))
            .unwrap()
            .unwrap();
        assert_eq!(handle.state().reduced_motion(), expected);
    }
}

#[test]
fn mismatched_specs_are_rejected() {
    let host = SimHost::default();
    let doc = SimDocument::with_waves(2);
    let err = WaveAnimator::default()
        .start_with_specs(elements(&doc), vec![fixed_spec(8.0, 1.0, 0.0)], &host.services())
        .unwrap_err();
    assert!(matches!(err, WaveError::Validation(_)));
    assert_eq!(host.scroll.listener_count(), 0);
}

#[test]
fn cancel_stops_frames_and_unregisters_listener() {
    let host = SimHost::default();
    let doc = SimDocument::with_waves(2);
    let handle = WaveAnimator::default()
        .start(&doc, &host.services(), &mut Rng64::new(4))
        .unwrap()
        .unwrap();

    host.scheduler.advance(16.0);
    host.scroll.scroll_to(50.0);
    handle.cancel();
    handle.cancel();

    assert!(!handle.is_running());
    assert_eq!(host.scheduler.pending_frames(), 0);
    assert_eq!(host.scroll.listener_count(), 0);

    host.scheduler.advance(16.0);
    assert_eq!(handle.frames_rendered(), 1);
    assert_eq!(doc.total_writes(), 2);
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let cfg = WaveConfig {
        max_dx: f64::NAN,
        ..WaveConfig::default()
    };
    assert!(WaveAnimator::new(cfg).is_err());
}
