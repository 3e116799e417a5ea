use thiserror::Error;

use crate::ai::AiError;
use crate::errors::domain::DomainError;

/// Facade-level error returned by [`crate::game_flow::GameFlow`] and configuration loading.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Ai(#[from] AiError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// The wrapped domain error, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(e) => Some(e),
            _ => None,
        }
    }

    /// True for failures that point at an engine bug rather than bad input.
    pub fn is_defect(&self) -> bool {
        match self {
            AppError::Domain(e) => e.is_defect(),
            AppError::Ai(AiError::Internal(_)) => true,
            _ => false,
        }
    }
}
