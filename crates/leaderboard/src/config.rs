//! Runner configuration (`leaderboard.toml`)
//!
//! ```toml
//! [data]
//! matches_dir = "data/matches"
//! predictions_dir = "data/predictions"
//! models_file = "data/models.json"
//! outcome_file = "data/tournament.json"
//!
//! [output]
//! rankings_file = "data/rankings.json"
//! ```
//!
//! An optional `[rules]` table replaces the default points table. It must
//! list every phase.

use scoring_core::ScoringRules;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{LeaderboardError, Result};

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = "leaderboard.toml";

/// Default data directory
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub output: OutputConfig,
    /// Points table override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<ScoringRules>,
}

/// Where the snapshot is read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory of `*.json` match lists
    pub matches_dir: PathBuf,
    /// Directory of per-model prediction files
    pub predictions_dir: PathBuf,
    /// Model catalogue
    pub models_file: PathBuf,
    /// Actual tournament outcome, for bonuses
    pub outcome_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Rankings store
    pub rankings_file: PathBuf,
}

impl DataConfig {
    /// Standard layout under `root`
    pub fn under(root: &Path) -> Self {
        Self {
            matches_dir: root.join("matches"),
            predictions_dir: root.join("predictions"),
            models_file: root.join("models.json"),
            outcome_file: root.join("tournament.json"),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::under(Path::new(DEFAULT_DATA_DIR))
    }
}

impl OutputConfig {
    pub fn under(root: &Path) -> Self {
        Self {
            rankings_file: root.join("rankings.json"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::under(Path::new(DEFAULT_DATA_DIR))
    }
}

impl Config {
    /// Parse config from TOML text
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| LeaderboardError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| LeaderboardError::io(path, e))?;
        Self::from_toml(&contents, path)
    }

    /// Load config, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Point every data and output path at the standard layout under `root`
    pub fn with_data_root(mut self, root: &Path) -> Self {
        self.data = DataConfig::under(root);
        self.output = OutputConfig::under(root);
        self
    }

    /// Active points table
    pub fn scoring_rules(&self) -> ScoringRules {
        self.rules.clone().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
