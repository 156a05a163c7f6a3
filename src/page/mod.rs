//! DOM-free page logic that lives next to the animator on the portfolio page.
//!
//! None of it shares state with the animator.

/// Author topic graph request and response handling.
pub mod author_graph;
/// Lightbox image classes and project panel ids.
pub mod lightbox;
/// Active-section detection for arrow navigation.
pub mod sections;
/// Topic card search filter.
pub mod topics;
