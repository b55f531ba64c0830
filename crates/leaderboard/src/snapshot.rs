//! Snapshot loading: matches, prediction files, model catalogue, outcome.
//!
//! Prediction files come in two shapes, a nested `predictedResult` object
//! or flat `homeScore`/`awayScore` fields. Both are normalized to
//! [`Prediction`] here so the scorer only ever sees one shape.

use scoring_core::{Match, MatchResult, Prediction};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::bonus::{TournamentOutcome, TournamentPicks};
use crate::config::DataConfig;
use crate::error::{LeaderboardError, Result};

/// Catalogue entry for a competing model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub provider: String,
}

/// Known models, in catalogue order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelCatalog {
    models: Vec<ModelInfo>,
}

impl ModelCatalog {
    pub fn new(models: Vec<ModelInfo>) -> Self {
        Self { models }
    }

    /// Load the catalogue; a missing file is an empty catalogue
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(read_json_or_default(path)?))
    }

    pub fn get(&self, model_id: &str) -> Option<&ModelInfo> {
        self.models.iter().find(|m| m.id == model_id)
    }

    /// Catalogue name, or the id itself for uncatalogued models
    pub fn display_name<'a>(&'a self, model_id: &'a str) -> &'a str {
        self.get(model_id).map_or(model_id, |m| m.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelInfo> {
        self.models.iter()
    }
}

/// A prediction as written in a file, before normalization
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPrediction {
    pub match_id: String,
    pub model_id: Option<String>,
    pub predicted_result: Option<MatchResult>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub timestamp: Option<String>,
}

impl RawPrediction {
    /// Canonical prediction owned by `model_id`.
    ///
    /// The nested result wins over flat fields; a single flat field counts
    /// the missing side as 0. Returns `None` when no score is given at all.
    pub fn normalize(self, model_id: &str, fallback_timestamp: Option<&str>) -> Option<Prediction> {
        let predicted_result = match (self.predicted_result, self.home_score, self.away_score) {
            (Some(result), _, _) => result,
            (None, None, None) => return None,
            (None, home, away) => MatchResult::new(home.unwrap_or(0), away.unwrap_or(0)),
        };

        let timestamp = self
            .timestamp
            .or_else(|| fallback_timestamp.map(str::to_string))
            .unwrap_or_default();

        Some(Prediction {
            match_id: self.match_id,
            model_id: model_id.to_string(),
            predicted_result,
            timestamp,
        })
    }
}

/// One model's prediction file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPredictionsFile {
    pub model_id: String,
    #[serde(default)]
    pub predictions: Vec<RawPrediction>,
    #[serde(default)]
    pub tournament_predictions: TournamentPicks,
    pub generated_at: Option<String>,
}

/// A model's normalized predictions and tournament picks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelEntry {
    pub model_id: String,
    pub predictions: Vec<Prediction>,
    pub picks: TournamentPicks,
}

impl ModelEntry {
    /// Normalize a prediction file, dropping predictions without a score
    pub fn from_file(file: ModelPredictionsFile) -> Self {
        let ModelPredictionsFile {
            model_id,
            predictions: raw,
            tournament_predictions,
            generated_at,
        } = file;

        let mut predictions = Vec::with_capacity(raw.len());
        for prediction in raw {
            if let Some(owner) = prediction.model_id.as_deref() {
                if owner != model_id {
                    warn!(file_model = %model_id, prediction_model = owner, match_id = %prediction.match_id,
                        "prediction claims another model, keeping file owner");
                }
            }
            let match_id = prediction.match_id.clone();
            match prediction.normalize(&model_id, generated_at.as_deref()) {
                Some(p) => predictions.push(p),
                None => warn!(model = %model_id, match_id = %match_id, "prediction has no score, skipped"),
            }
        }

        Self {
            model_id,
            predictions,
            picks: tournament_predictions,
        }
    }

    /// Fold a second file for the same model into this entry.
    ///
    /// Predictions are appended as-is. Picks left unset here are taken from
    /// `other`; where both set a different pick, the one already held wins.
    pub fn merge(&mut self, other: ModelEntry) {
        self.predictions.extend(other.predictions);

        let model = self.model_id.as_str();
        fill_pick(model, "champion", &mut self.picks.champion, other.picks.champion);
        fill_pick(model, "finalist", &mut self.picks.finalist, other.picks.finalist);

        for (group, team) in other.picks.group_winners {
            match self.picks.group_winners.get(&group) {
                Some(held) if held != &team => {
                    warn!(model, group = %group, kept = %held, ignored = %team,
                        "conflicting group winner picks");
                }
                Some(_) => {}
                None => {
                    self.picks.group_winners.insert(group, team);
                }
            }
        }
    }
}

fn fill_pick(model: &str, pick: &str, held: &mut Option<String>, incoming: Option<String>) {
    let Some(team) = incoming else {
        return;
    };
    match held.as_deref() {
        None => *held = Some(team),
        Some(kept) if kept != team => {
            warn!(model, pick, kept, ignored = %team, "conflicting tournament picks");
        }
        Some(_) => {}
    }
}

/// Everything one scoring run needs
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub matches: Vec<Match>,
    /// One entry per model, sorted by model id
    pub entries: Vec<ModelEntry>,
    pub catalog: ModelCatalog,
    pub outcome: TournamentOutcome,
}

impl Snapshot {
    /// Load a snapshot from the configured data layout.
    ///
    /// Missing directories and files count as empty; unreadable or
    /// malformed ones are errors.
    pub fn load(data: &DataConfig) -> Result<Self> {
        let mut matches = Vec::new();
        for path in json_files(&data.matches_dir)? {
            let mut batch: Vec<Match> = read_json(&path)?;
            debug!(path = %path.display(), count = batch.len(), "loaded matches");
            matches.append(&mut batch);
        }

        let mut by_model: BTreeMap<String, ModelEntry> = BTreeMap::new();
        for path in json_files(&data.predictions_dir)? {
            let file: ModelPredictionsFile = read_json(&path)?;
            let entry = ModelEntry::from_file(file);
            debug!(path = %path.display(), model = %entry.model_id,
                count = entry.predictions.len(), "loaded predictions");

            match by_model.get_mut(&entry.model_id) {
                Some(existing) => {
                    warn!(model = %entry.model_id, path = %path.display(),
                        "second prediction file for model, merging");
                    existing.merge(entry);
                }
                None => {
                    by_model.insert(entry.model_id.clone(), entry);
                }
            }
        }

        let catalog = ModelCatalog::load(&data.models_file)?;
        let outcome: TournamentOutcome = read_json_or_default(&data.outcome_file)?;

        let snapshot = Self {
            matches,
            entries: by_model.into_values().collect(),
            catalog,
            outcome,
        };
        info!(
            matches = snapshot.matches.len(),
            played = snapshot.played_matches(),
            models = snapshot.entries.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    pub fn played_matches(&self) -> usize {
        self.matches.iter().filter(|m| m.is_played()).count()
    }

    pub fn entry(&self, model_id: &str) -> Option<&ModelEntry> {
        self.entries.iter().find(|e| e.model_id == model_id)
    }
}

/// `*.json` files in `dir`, sorted by name. A missing directory is empty.
fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(dir = %dir.display(), "data directory missing");
            return Ok(Vec::new());
        }
        Err(e) => return Err(LeaderboardError::io(dir, e)),
    };

    let mut files = Vec::new();
    for entry in read_dir {
        let path = entry.map_err(|e| LeaderboardError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| LeaderboardError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| LeaderboardError::json(path, e))
}

fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        debug!(path = %path.display(), "optional data file missing");
        return Ok(T::default());
    }
    read_json(path)
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
