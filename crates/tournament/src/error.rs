use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid match config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("results serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
