use std::{cell::Cell, rc::Rc};

use crate::{
    engine::animator::AnimatorState,
    foundation::core::FrameRequestId,
    host::services::{FrameScheduler, ScrollSource},
};

/// Frame-aligned scroll coalescer feeding `scroll_parallax_y`.
///
/// Each scroll event cancels the pending recomputation, if any, and requests a fresh one, so a
/// burst of events within one frame produces one recomputation reading the latest offset.
pub(crate) struct ScrollParallax {
    state: Rc<AnimatorState>,
    scroll: Rc<dyn ScrollSource>,
    scheduler: Rc<dyn FrameScheduler>,
    scroll_factor: f64,
    pending: Cell<Option<FrameRequestId>>,
    updates: Cell<u64>,
}

impl ScrollParallax {
    pub(crate) fn new(
        state: Rc<AnimatorState>,
        scroll: Rc<dyn ScrollSource>,
        scheduler: Rc<dyn FrameScheduler>,
        scroll_factor: f64,
    ) -> Rc<Self> {
        Rc::new(Self {
            state,
            scroll,
            scheduler,
            scroll_factor,
            pending: Cell::new(None),
            updates: Cell::new(0),
        })
    }

    /// Scroll event entry point.
    pub(crate) fn on_scroll(self: &Rc<Self>) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
        let this = Rc::clone(self);
        let id = self.scheduler.request_frame(Box::new(move |_| {
            this.pending.set(None);
            this.recompute();
        }));
        self.pending.set(Some(id));
    }

    /// Read the scroll offset now and publish the parallax value.
    pub(crate) fn recompute(&self) {
        let y = self.scroll.scroll_y();
        let parallax = y * self.scroll_factor;
        self.state.set_scroll_parallax_y(parallax);
        self.updates.set(self.updates.get() + 1);
        tracing::trace!(scroll_y = y, parallax, "parallax updated");
    }

    /// Drop any queued recomputation.
    pub(crate) fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
    }

    pub(crate) fn updates(&self) -> u64 {
        self.updates.get()
    }

    pub(crate) fn has_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/parallax.rs"]
mod tests;
