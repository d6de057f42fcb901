use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("failed to access session state {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize session state: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("session state lock poisoned")]
    Poisoned,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DispatchError {
    #[error("ui queue is full")]
    Full,

    #[error("ui loop is no longer running")]
    Closed,
}
