//! Errors for loading snapshots, config and stored rankings

use scoring_core::ScoringError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("model {0:?} not found")]
    UnknownModel(String),

    #[error("no rankings stored at {}; run `leaderboard score` first", .0.display())]
    MissingStore(PathBuf),
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;

impl LeaderboardError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
