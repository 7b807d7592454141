use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String)
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to write high score file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode high score record: {0}")]
    Encode(#[from] serde_json::Error)
}
