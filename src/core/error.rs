//! Error types for the simulation core.

use thiserror::Error;

/// Errors raised by the simulation core and its collaborators.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// A negative or non-finite time delta reached the integrator.
    #[error("invalid time step: {dt} (must be finite and >= 0)")]
    InvalidTimeStep { dt: f64 },

    /// A body with a non-positive (or non-finite) extent.
    #[error("degenerate body: {width}x{height} (extents must be > 0)")]
    DegenerateBody { width: f32, height: f32 },

    /// A body field that must be finite was not.
    #[error("non-finite body state: {0}")]
    NonFiniteState(&'static str),

    /// Configuration could not be parsed or failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The renderer collaborator reported a failure.
    #[error("renderer failed: {0}")]
    Renderer(String),
}

impl SimError {
    /// Create an invalid config error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a renderer error.
    pub fn renderer(msg: impl Into<String>) -> Self {
        Self::Renderer(msg.into())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

pub type SimResult<T> = Result<T, SimError>;
