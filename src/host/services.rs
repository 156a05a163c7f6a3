//! Host services the animator consumes.
//!
//! In a browser these map onto `requestAnimationFrame`, the window scroll offset and `scroll`
//! event, `matchMedia("(prefers-reduced-motion: reduce)")` plus `innerWidth`, and SVG element
//! attributes. [`crate::host::sim`] provides deterministic implementations.

use std::rc::Rc;

use crate::foundation::core::{FrameRequestId, FrameTime, ListenerId};

/// One-shot display-frame callback, handed the frame timestamp.
pub type FrameCallback = Box<dyn FnOnce(FrameTime)>;

/// Scroll event listener.
pub type ScrollListener = Rc<dyn Fn()>;

/// Display-synchronized callback scheduler.
///
/// Callbacks run once; a callback requested while a frame is being dispatched runs on the
/// following frame.
pub trait FrameScheduler {
    /// Queue `callback` for the next display frame.
    fn request_frame(&self, callback: FrameCallback) -> FrameRequestId;

    /// Drop a queued callback. Unknown or already-run ids are ignored.
    fn cancel_frame(&self, id: FrameRequestId);
}

/// Global vertical scroll position and its change event.
pub trait ScrollSource {
    /// Current vertical scroll offset in pixels (non-negative).
    fn scroll_y(&self) -> f64;

    /// Register a listener fired on every scroll event.
    fn add_scroll_listener(&self, listener: ScrollListener) -> ListenerId;

    /// Unregister a listener. Unknown ids are ignored.
    fn remove_scroll_listener(&self, id: ListenerId);
}

/// Motion-reduction signals, sampled once at startup.
pub trait MotionPreference {
    /// Whether the user asked for reduced motion.
    fn prefers_reduced_motion(&self) -> bool;

    /// Viewport width in logical pixels.
    fn viewport_width(&self) -> f64;
}

/// Attribute sink of one animated wave element.
pub trait WaveElement {
    /// Overwrite the element's `transform` attribute.
    fn set_transform(&self, value: &str);
}

/// Source of the wave elements under the animation container.
pub trait WaveDocument {
    /// Wave elements in document order. Queried once; later changes are not tracked.
    fn wave_elements(&self) -> Vec<Rc<dyn WaveElement>>;
}

/// The host services an animator needs beyond its elements.
#[derive(Clone)]
pub struct HostServices {
    /// Display-frame scheduler.
    pub scheduler: Rc<dyn FrameScheduler>,
    /// Scroll position provider.
    pub scroll: Rc<dyn ScrollSource>,
    /// Motion preference provider.
    pub motion: Rc<dyn MotionPreference>,
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}
