//! Deterministic in-process host.
//!
//! Nothing here touches a real display: frames advance only when [`ManualScheduler::run_frame`]
//! or [`ManualScheduler::advance`] is called, and scrolling happens through
//! [`SimScroll::scroll_to`].

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

use crate::{
    foundation::core::{FrameRequestId, FrameTime, ListenerId},
    host::services::{
        FrameCallback, FrameScheduler, HostServices, MotionPreference, ScrollListener,
        ScrollSource, WaveDocument, WaveElement,
    },
};

/// Frame scheduler driven by explicit calls.
#[derive(Default)]
pub struct ManualScheduler {
    next_id: Cell<u64>,
    queue: RefCell<BTreeMap<FrameRequestId, FrameCallback>>,
    now: Cell<f64>,
    frames_run: Cell<u64>,
}

impl ManualScheduler {
    /// Empty scheduler at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one display frame at `time`.
    ///
    /// Only callbacks queued before the call run, in request order. Returns how many ran.
    pub fn run_frame(&self, time: FrameTime) -> usize {
        self.now.set(time.as_millis());
        self.frames_run.set(self.frames_run.get() + 1);

        let batch: Vec<FrameRequestId> = self.queue.borrow().keys().copied().collect();
        let mut ran = 0;
        for id in batch {
            // A callback earlier in the batch may have cancelled this one.
            let callback = self.queue.borrow_mut().remove(&id);
            if let Some(callback) = callback {
                callback(time);
                ran += 1;
            }
        }
        ran
    }

    /// Move the clock forward by `dt_ms` and dispatch a frame there.
    pub fn advance(&self, dt_ms: f64) -> usize {
        let time = self.now().advanced_by(dt_ms);
        self.run_frame(time)
    }

    /// Timestamp of the most recent frame.
    pub fn now(&self) -> FrameTime {
        FrameTime::from_millis(self.now.get())
    }

    /// Callbacks waiting for the next frame.
    pub fn pending_frames(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Frames dispatched so far.
    pub fn frames_run(&self) -> u64 {
        self.frames_run.get()
    }

    /// Total callbacks ever requested.
    pub fn requests_made(&self) -> u64 {
        self.next_id.get()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) -> FrameRequestId {
        let id = FrameRequestId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.queue.borrow_mut().insert(id, callback);
        id
    }

    fn cancel_frame(&self, id: FrameRequestId) {
        // Dropped outside the borrow: the callback may own handles back into this scheduler.
        let removed = self.queue.borrow_mut().remove(&id);
        drop(removed);
    }
}

/// Scroll position that moves only when told to.
#[derive(Default)]
pub struct SimScroll {
    y: Cell<f64>,
    reads: Cell<u64>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, ScrollListener)>>,
}

impl SimScroll {
    /// Scroll position zero, no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offset and fire one scroll event.
    pub fn scroll_to(&self, y: f64) {
        self.y.set(y.max(0.0));
        let listeners: Vec<ScrollListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    /// Registered listener count.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// How many times [`ScrollSource::scroll_y`] has been read.
    pub fn reads(&self) -> u64 {
        self.reads.get()
    }
}

impl ScrollSource for SimScroll {
    fn scroll_y(&self) -> f64 {
        self.reads.set(self.reads.get() + 1);
        self.y.get()
    }

    fn add_scroll_listener(&self, listener: ScrollListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn remove_scroll_listener(&self, id: ListenerId) {
        let removed: Vec<(ListenerId, ScrollListener)> = {
            let mut listeners = self.listeners.borrow_mut();
            let (gone, kept): (Vec<_>, Vec<_>) =
                listeners.drain(..).partition(|(lid, _)| *lid == id);
            *listeners = kept;
            gone
        };
        drop(removed);
    }
}

/// Fixed motion preference.
#[derive(Clone, Copy, Debug)]
pub struct SimMotion {
    /// Reported reduced-motion preference.
    pub prefers_reduced: bool,
    /// Reported viewport width.
    pub viewport_width: f64,
}

impl Default for SimMotion {
    fn default() -> Self {
        Self {
            prefers_reduced: false,
            viewport_width: 1280.0,
        }
    }
}

impl MotionPreference for SimMotion {
    fn prefers_reduced_motion(&self) -> bool {
        self.prefers_reduced
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }
}

/// Element that records every attribute write.
#[derive(Debug, Default)]
pub struct RecordingElement {
    writes: RefCell<Vec<String>>,
}

impl RecordingElement {
    /// Element with no writes yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent value, if any.
    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }

    /// Number of writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    /// Every value written, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl WaveElement for RecordingElement {
    fn set_transform(&self, value: &str) {
        self.writes.borrow_mut().push(value.to_owned());
    }
}

/// A document holding `n` recording elements.
#[derive(Debug, Default)]
pub struct SimDocument {
    /// Elements in document order.
    pub elements: Vec<Rc<RecordingElement>>,
}

impl SimDocument {
    /// Document with `count` fresh elements.
    pub fn with_waves(count: usize) -> Self {
        Self {
            elements: (0..count).map(|_| Rc::new(RecordingElement::new())).collect(),
        }
    }

    /// Total writes across all elements.
    pub fn total_writes(&self) -> usize {
        self.elements.iter().map(|e| e.write_count()).sum()
    }
}

impl WaveDocument for SimDocument {
    fn wave_elements(&self) -> Vec<Rc<dyn WaveElement>> {
        self.elements
            .iter()
            .map(|e| Rc::clone(e) as Rc<dyn WaveElement>)
            .collect()
    }
}

/// Concrete handles to a simulated host, plus the type-erased bundle the animator takes.
pub struct SimHost {
    /// Frame scheduler.
    pub scheduler: Rc<ManualScheduler>,
    /// Scroll provider.
    pub scroll: Rc<SimScroll>,
    /// Motion preference.
    pub motion: Rc<SimMotion>,
}

impl SimHost {
    /// Host with the given motion preference.
    pub fn new(motion: SimMotion) -> Self {
        Self {
            scheduler: Rc::new(ManualScheduler::new()),
            scroll: Rc::new(SimScroll::new()),
            motion: Rc::new(motion),
        }
    }

    /// Type-erased services for [`crate::WaveAnimator::start`].
    pub fn services(&self) -> HostServices {
        HostServices {
            scheduler: Rc::clone(&self.scheduler) as Rc<dyn FrameScheduler>,
            scroll: Rc::clone(&self.scroll) as Rc<dyn ScrollSource>,
            motion: Rc::clone(&self.motion) as Rc<dyn MotionPreference>,
        }
    }
}

impl Default for SimHost {
    fn default() -> Self {
        Self::new(SimMotion::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/sim.rs"]
mod tests;
