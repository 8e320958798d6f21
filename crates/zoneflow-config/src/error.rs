use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read teams file: {path}\nreason: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse teams document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("team '{0}' has no 'entity' field")]
    MissingEntity(String),

    #[error("team '{team}' has an invalid 'entity': {reason}")]
    InvalidEntity { team: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
