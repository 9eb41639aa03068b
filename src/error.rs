//! Error types shared by the generators, the estimator seam and the trial harness

use thiserror::Error;

/// Errors that can occur while generating or evaluating synthetic data
#[derive(Debug, Error)]
pub enum SynthError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Estimator error: {0}")]
    Estimator(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for causal-synth operations
pub type SynthResult<T> = Result<T, SynthError>;
