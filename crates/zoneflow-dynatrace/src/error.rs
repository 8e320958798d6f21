//! Dynatrace client error types

use thiserror::Error;
use zoneflow_cloud::CloudError;

#[derive(Error, Debug)]
pub enum DynatraceError {
    #[error("environment variable {0} is not set")]
    MissingEnvVar(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{method} {url} returned {status}: {body}")]
    Api {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DynatraceError>;

impl From<DynatraceError> for CloudError {
    fn from(err: DynatraceError) -> Self {
        match err {
            DynatraceError::Api { status, .. } if status == 401 || status == 403 => {
                CloudError::AuthenticationFailed(err.to_string())
            }
            DynatraceError::Api { status, .. } => CloudError::Api {
                status,
                message: err.to_string(),
            },
            DynatraceError::Http(e) => CloudError::Transport(e.to_string()),
            DynatraceError::JsonError(e) => CloudError::Json(e),
            DynatraceError::MissingEnvVar(_) | DynatraceError::InvalidConfig(_) => {
                CloudError::InvalidConfig(err.to_string())
            }
        }
    }
}
