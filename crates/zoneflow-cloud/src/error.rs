//! Reconciliation error types

use thiserror::Error;

/// Errors raised while talking to the management zone API
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid plan: {0}")]
    InvalidPlan(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CloudError>;
