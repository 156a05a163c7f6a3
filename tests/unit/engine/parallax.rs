use super::*;
use crate::host::sim::{ManualScheduler, SimScroll};

fn setup() -> (Rc<ManualScheduler>, Rc<SimScroll>, Rc<AnimatorState>, Rc<ScrollParallax>) {
    let sched = Rc::new(ManualScheduler::new());
    let scroll = Rc::new(SimScroll::new());
    let state = Rc::new(AnimatorState::new(false));
    let parallax = ScrollParallax::new(
        Rc::clone(&state),
        Rc::clone(&scroll) as Rc<dyn ScrollSource>,
        Rc::clone(&sched) as Rc<dyn FrameScheduler>,
        0.5,
    );
    (sched, scroll, state, parallax)
}

#[test]
fn recompute_halves_scroll_offset() {
    let (_sched, scroll, state, parallax) = setup();
    scroll.scroll_to(200.0);
    parallax.recompute();
    assert_eq!(state.scroll_parallax_y(), 100.0);
    assert_eq!(parallax.updates(), 1);
}

#[test]
fn burst_within_one_frame_recomputes_once_with_latest_offset() {
    let (sched, scroll, state, parallax) = setup();
    for y in [10.0, 50.0, 300.0] {
        scroll.scroll_to(y);
        parallax.on_scroll();
    }
    assert_eq!(sched.pending_frames(), 1);
    assert_eq!(state.scroll_parallax_y(), 0.0);

    sched.advance(16.0);
    assert_eq!(parallax.updates(), 1);
    assert_eq!(scroll.reads(), 1);
    assert_eq!(state.scroll_parallax_y(), 150.0);
    assert!(!parallax.has_pending());
}

#[test]
fn events_in_separate_frames_each_recompute() {
    let (sched, scroll, state, parallax) = setup();
    scroll.scroll_to(40.0);
    parallax.on_scroll();
    sched.advance(16.0);
    scroll.scroll_to(80.0);
    parallax.on_scroll();
    sched.advance(16.0);
    assert_eq!(parallax.updates(), 2);
    assert_eq!(state.scroll_parallax_y(), 40.0);
}

#[test]
fn cancel_drops_pending_recompute() {
    let (sched, scroll, state, parallax) = setup();
    scroll.scroll_to(500.0);
    parallax.on_scroll();
    parallax.cancel();
    sched.advance(16.0);
    assert_eq!(parallax.updates(), 0);
    assert_eq!(state.scroll_parallax_y(), 0.0);
}
