use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("Invalid event on line {line}: {source}")]
    InvalidEvent {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to read event script: {0}")]
    Io(#[from] std::io::Error),
}
