pub use kurbo::{Affine, Vec2};

/// Display-frame timestamp in milliseconds since an arbitrary, monotonic epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct FrameTime(pub f64);

impl FrameTime {
    /// The epoch itself.
    pub const ZERO: Self = Self(0.0);

    /// Wrap a millisecond timestamp.
    pub fn from_millis(ms: f64) -> Self {
        Self(ms)
    }

    /// Raw milliseconds.
    pub fn as_millis(self) -> f64 {
        self.0
    }

    /// Seconds since the epoch (`ms / 1000`).
    pub fn as_secs(self) -> f64 {
        self.0 * 0.001
    }

    /// This timestamp moved forward by `dt_ms` milliseconds.
    pub fn advanced_by(self, dt_ms: f64) -> Self {
        Self(self.0 + dt_ms)
    }
}

/// Handle for a pending display-frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameRequestId(pub u64);

/// Handle for a registered scroll listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);
