//! wavefolio is a headless ambient wave animation engine for portfolio pages.
//!
//! Each wave element gets a randomly drawn [`WaveSpec`]. Once per display frame the animator
//! combines each spec's oscillation with a scroll-driven parallax offset and writes an SVG
//! `transform` attribute back to the element.
//!
//! # Pieces
//!
//! 1. **Generate**: `RandomSource + count -> Vec<WaveSpec>` ([`generate_wave_specs`])
//! 2. **Sample**: `WaveSpec + index + FrameCtx -> WaveTransform` ([`sample_wave`])
//! 3. **Run**: [`WaveAnimator::start`] arms a self re-arming frame task on a
//!    [`host::services::FrameScheduler`] and a frame-coalesced scroll listener, returning an
//!    [`AnimatorHandle`] that can cancel both.
//!
//! The browser services involved (frame scheduling, scroll offset, motion preference, element
//! attributes) sit behind the traits in [`host::services`]; [`host::sim`] implements them
//! deterministically.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No globals**: all mutable state belongs to one animator instance.
//! - **Single-threaded**: shared state is `Rc` + `Cell`, matching a UI event loop.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod engine;
mod foundation;

pub mod host;
pub mod page;

pub use animation::random::{RandomSource, Rng64, SequenceSource};
pub use animation::spec::{WaveSpec, generate_wave_specs};
pub use animation::wave::{FrameCtx, WaveSample, WaveTransform, sample_wave};
pub use config::wave::{SampleRange, WaveConfig};
pub use engine::animator::{AnimatorHandle, AnimatorState, WaveAnimator};
pub use foundation::core::{Affine, FrameRequestId, FrameTime, ListenerId, Vec2};
pub use foundation::error::{WaveError, WaveResult};
