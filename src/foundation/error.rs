/// Convenience result type used across wavefolio.
pub type WaveResult<T> = Result<T, WaveError>;

/// Top-level error taxonomy used by engine APIs.
///
/// The animator itself has almost no failure surface; errors come from invalid configuration,
/// mismatched inputs handed to the engine, or host integrations.
#[derive(thiserror::Error, Debug)]
pub enum WaveError {
    /// Invalid user-provided data (spec/element mismatch, out-of-range values).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WaveError {
    /// Build a [`WaveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WaveError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for WaveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
