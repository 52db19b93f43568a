//! Errors from running a case.

use manor::ManorError;
use thiserror::Error;

/// Errors from exploration, judgment and the console collaborator.
#[derive(Debug, Error)]
pub enum InvestigationError {
    #[error("manor error: {0}")]
    Manor(#[from] ManorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("player input ended before the case was closed")]
    InputClosed,
}

/// Result alias for investigation operations.
pub type InvestigationResult<T> = Result<T, InvestigationError>;
