/// Convenience result type used across Cadence.
pub type CadenceResult<T> = Result<T, CadenceError>;

/// Error taxonomy for the timing engine and composition model.
///
/// Evaluation itself never fails: every variant here is raised while *building* a range, a
/// spring config or a composition.
#[derive(thiserror::Error, Debug)]
pub enum CadenceError {
    /// Malformed interpolation ranges (non-increasing input, length mismatch).
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Non-positive or non-finite spring parameters.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Invalid composition data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CadenceError {
    /// Build a [`CadenceError::InvalidRange`] value.
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Build a [`CadenceError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`CadenceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CadenceError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
