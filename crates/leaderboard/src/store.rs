//! Rankings store: the last computed leaderboard, persisted as JSON

use chrono::{SecondsFormat, Utc};
use scoring_core::ModelRanking;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::{LeaderboardError, Result};
use crate::snapshot::read_json;

/// Stored leaderboard, rankings in board order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRankings {
    pub rankings: Vec<ModelRanking>,
    /// RFC 3339, UTC
    pub last_updated: String,
}

impl StoredRankings {
    /// Stamp `rankings` with the current time
    pub fn new(rankings: Vec<ModelRanking>) -> Self {
        Self {
            rankings,
            last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    pub fn find(&self, model_id: &str) -> Option<&ModelRanking> {
        self.rankings.iter().find(|r| r.model_id == model_id)
    }

    /// Load rankings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LeaderboardError::MissingStore(path.to_path_buf()));
        }
        read_json(path)
    }

    /// Save rankings to a JSON file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| LeaderboardError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| LeaderboardError::io(path, e))?;
        info!(path = %path.display(), models = self.rankings.len(), "rankings saved");
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
