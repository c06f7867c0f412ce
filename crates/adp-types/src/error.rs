use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdpError {
    /// The tensor does not describe a real, bounded displacement ellipsoid.
    #[error("anisotropic adp tensor is not positive definite: {reason}")]
    NotPositiveDefinite { reason: String },

    /// Power iteration ran past its bound. Indicates a defect, not bad input.
    #[error("Eigenvector iteration did not converge after {iterations} iterations")]
    NonConvergence { iterations: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdpError {
    pub fn not_positive_definite(reason: impl Into<String>) -> Self {
        AdpError::NotPositiveDefinite {
            reason: reason.into(),
        }
    }

    /// True for failures caused by the supplied data (recoverable per tensor).
    pub fn is_input_error(&self) -> bool {
        !matches!(self, AdpError::NonConvergence { .. })
    }
}

pub type AdpResult<T> = Result<T, AdpError>;
