//! Host boundary: the browser services the animator relies on, as traits, plus a simulated
//! host for tests and offline runs.

/// Service traits and the [`services::HostServices`] bundle.
pub mod services;
/// Deterministic simulated host.
pub mod sim;
