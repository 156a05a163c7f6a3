use std::{cell::Cell, rc::Rc};

use crate::{
    animation::{
        random::RandomSource,
        spec::{WaveSpec, generate_wave_specs},
        wave::{FrameCtx, WaveTransform, sample_wave},
    },
    config::wave::WaveConfig,
    engine::parallax::ScrollParallax,
    foundation::core::{FrameRequestId, FrameTime, ListenerId},
    foundation::error::{WaveError, WaveResult},
    host::services::{FrameScheduler, HostServices, ScrollSource, WaveDocument, WaveElement},
};

/// Per-animator shared state.
///
/// Written by the scroll task, read by the frame task. Both run on one thread, so a frame
/// always sees whatever value was last published before it started.
#[derive(Debug)]
pub struct AnimatorState {
    reduced_motion: bool,
    scroll_parallax_y: Cell<f64>,
}

impl AnimatorState {
    /// Fresh state with no parallax.
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            reduced_motion,
            scroll_parallax_y: Cell::new(0.0),
        }
    }

    /// Whether amplitudes are scaled down. Fixed at startup.
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Current parallax offset (half the scroll offset with the stock config).
    pub fn scroll_parallax_y(&self) -> f64 {
        self.scroll_parallax_y.get()
    }

    pub(crate) fn set_scroll_parallax_y(&self, v: f64) {
        self.scroll_parallax_y.set(v);
    }
}

/// Ambient wave animator.
///
/// [`WaveAnimator::start`] wires an animation onto a host; the returned [`AnimatorHandle`]
/// observes and cancels it.
#[derive(Clone, Debug, Default)]
pub struct WaveAnimator {
    config: WaveConfig,
}

impl WaveAnimator {
    /// Animator with a validated config.
    pub fn new(config: WaveConfig) -> WaveResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active config.
    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// Enumerate `document`'s wave elements, draw one spec per element from `rng`, and start.
    ///
    /// Returns `Ok(None)` without touching the host when the document has no wave elements.
    #[tracing::instrument(skip_all)]
    pub fn start(
        &self,
        document: &dyn WaveDocument,
        host: &HostServices,
        rng: &mut dyn RandomSource,
    ) -> WaveResult<Option<AnimatorHandle>> {
        let elements = document.wave_elements();
        if elements.is_empty() {
            tracing::debug!("no wave elements; animator stays idle");
            return Ok(None);
        }
        let specs = generate_wave_specs(rng, elements.len(), &self.config);
        self.start_with_specs(elements, specs, host)
    }

    /// Start with caller-provided specs, one per element in the same order.
    pub fn start_with_specs(
        &self,
        elements: Vec<Rc<dyn WaveElement>>,
        specs: Vec<WaveSpec>,
        host: &HostServices,
    ) -> WaveResult<Option<AnimatorHandle>> {
        if elements.is_empty() {
            return Ok(None);
        }
        if elements.len() != specs.len() {
            return Err(WaveError::validation(format!(
                "{} wave elements but {} specs",
                elements.len(),
                specs.len()
            )));
        }

        let reduced_motion = self.config.reduced_motion(
            host.motion.prefers_reduced_motion(),
            host.motion.viewport_width(),
        );
        let state = Rc::new(AnimatorState::new(reduced_motion));

        let parallax = ScrollParallax::new(
            Rc::clone(&state),
            Rc::clone(&host.scroll),
            Rc::clone(&host.scheduler),
            self.config.scroll_factor,
        );
        let on_scroll = Rc::clone(&parallax);
        let listener = host
            .scroll
            .add_scroll_listener(Rc::new(move || on_scroll.on_scroll()));

        let frame_loop = Rc::new(FrameLoop {
            elements,
            specs,
            config: self.config.clone(),
            state,
            scheduler: Rc::clone(&host.scheduler),
            pending: Cell::new(None),
            running: Cell::new(true),
            frames: Cell::new(0),
        });
        frame_loop.arm();
        parallax.recompute();

        tracing::debug!(
            waves = frame_loop.elements.len(),
            reduced_motion,
            "wave animator started"
        );

        Ok(Some(AnimatorHandle {
            frame_loop,
            parallax,
            scroll: Rc::clone(&host.scroll),
            listener: Cell::new(Some(listener)),
        }))
    }
}

/// Self re-arming per-frame task.
struct FrameLoop {
    elements: Vec<Rc<dyn WaveElement>>,
    specs: Vec<WaveSpec>,
    config: WaveConfig,
    state: Rc<AnimatorState>,
    scheduler: Rc<dyn FrameScheduler>,
    pending: Cell<Option<FrameRequestId>>,
    running: Cell<bool>,
    frames: Cell<u64>,
}

impl FrameLoop {
    fn arm(self: &Rc<Self>) {
        if !self.running.get() {
            return;
        }
        let this = Rc::clone(self);
        let id = self.scheduler.request_frame(Box::new(move |time: FrameTime| {
            this.pending.set(None);
            this.render(time);
            this.arm();
        }));
        self.pending.set(Some(id));
    }

    fn ctx(&self, time: FrameTime) -> FrameCtx {
        FrameCtx {
            time,
            reduced_motion: self.state.reduced_motion(),
            scroll_parallax_y: self.state.scroll_parallax_y(),
        }
    }

    fn transforms(&self, ctx: FrameCtx) -> impl Iterator<Item = WaveTransform> + '_ {
        self.specs
            .iter()
            .enumerate()
            .map(move |(i, spec)| sample_wave(spec, i, ctx, &self.config).transform(&self.config))
    }

    fn render(&self, time: FrameTime) {
        let ctx = self.ctx(time);
        for (el, transform) in self.elements.iter().zip(self.transforms(ctx)) {
            el.set_transform(&transform.to_attr());
        }
        self.frames.set(self.frames.get() + 1);
        tracing::trace!(
            time_ms = time.as_millis(),
            parallax = ctx.scroll_parallax_y,
            "wave frame"
        );
    }

    fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
    }
}

/// Observation and cancellation handle for a running animator.
///
/// Dropping the handle leaves the animation running for the host's lifetime; call
/// [`AnimatorHandle::cancel`] to stop it.
pub struct AnimatorHandle {
    frame_loop: Rc<FrameLoop>,
    parallax: Rc<ScrollParallax>,
    scroll: Rc<dyn ScrollSource>,
    listener: Cell<Option<ListenerId>>,
}

impl AnimatorHandle {
    /// Shared animator state.
    pub fn state(&self) -> &AnimatorState {
        &self.frame_loop.state
    }

    /// Specs in element order.
    pub fn specs(&self) -> &[WaveSpec] {
        &self.frame_loop.specs
    }

    /// Number of animated elements.
    pub fn wave_count(&self) -> usize {
        self.frame_loop.elements.len()
    }

    /// Frames rendered so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frame_loop.frames.get()
    }

    /// Parallax recomputations so far, including the initial one.
    pub fn parallax_updates(&self) -> u64 {
        self.parallax.updates()
    }

    /// Whether a coalesced parallax update is waiting for the next frame.
    pub fn parallax_pending(&self) -> bool {
        self.parallax.has_pending()
    }

    /// Whether the frame loop is still armed.
    pub fn is_running(&self) -> bool {
        self.frame_loop.running.get()
    }

    /// Transforms the loop would write at `time` with the current state, without writing them.
    pub fn sample_at(&self, time: FrameTime) -> Vec<WaveTransform> {
        let ctx = self.frame_loop.ctx(time);
        self.frame_loop.transforms(ctx).collect()
    }

    /// Stop the frame loop, drop any pending parallax update and unregister the scroll
    /// listener. Safe to call more than once.
    pub fn cancel(&self) {
        if !self.is_running() && self.listener.get().is_none() {
            return;
        }
        self.frame_loop.stop();
        self.parallax.cancel();
        if let Some(id) = self.listener.take() {
            self.scroll.remove_scroll_listener(id);
        }
        tracing::debug!(frames = self.frames_rendered(), "wave animator cancelled");
    }
}

impl std::fmt::Debug for AnimatorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatorHandle")
            .field("waves", &self.wave_count())
            .field("frames", &self.frames_rendered())
            .field("running", &self.is_running())
            .field("state", self.state())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/animator.rs"]
mod tests;
