//! Value types shared by the scorer, aggregator and ranking builder.
//!
//! Field names serialize in camelCase so the JSON data files and the
//! persisted rankings keep a single wire shape.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ScoringError;

// =============================================================================
// Tournament phases
// =============================================================================

/// Tournament stage a match belongs to; selects the points scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum Phase {
    Groups,
    RoundOf32,
    RoundOf16,
    QuarterFinals,
    SemiFinals,
    ThirdPlace,
    Final,
}

impl Phase {
    /// Every phase in tournament order
    pub const ALL: [Phase; 7] = [
        Phase::Groups,
        Phase::RoundOf32,
        Phase::RoundOf16,
        Phase::QuarterFinals,
        Phase::SemiFinals,
        Phase::ThirdPlace,
        Phase::Final,
    ];

    /// Wire name, e.g. `round-of-16`
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Groups => "groups",
            Phase::RoundOf32 => "round-of-32",
            Phase::RoundOf16 => "round-of-16",
            Phase::QuarterFinals => "quarter-finals",
            Phase::SemiFinals => "semi-finals",
            Phase::ThirdPlace => "third-place",
            Phase::Final => "final",
        }
    }

    /// Position in [`Phase::ALL`]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.as_str() == s)
            .ok_or_else(|| ScoringError::UnknownPhase(s.to_string()))
    }
}

impl TryFrom<String> for Phase {
    type Error = ScoringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Phase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// =============================================================================
// Matches and predictions
// =============================================================================

/// Final score of a match, actual or predicted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub home_score: u32,
    pub away_score: u32,
    /// Shoot-out score; carried for display, never scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalties: Option<Penalties>,
}

/// Penalty shoot-out tally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Penalties {
    pub home_score: u32,
    pub away_score: u32,
}

impl MatchResult {
    pub fn new(home_score: u32, away_score: u32) -> Self {
        Self {
            home_score,
            away_score,
            penalties: None,
        }
    }

    /// Absolute goal margin
    pub fn goal_difference(&self) -> u32 {
        self.home_score.abs_diff(self.away_score)
    }

    /// True when both regulation scores agree (penalties ignored)
    pub fn same_score(&self, other: &MatchResult) -> bool {
        self.home_score == other.home_score && self.away_score == other.away_score
    }
}

/// A scheduled or played match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub phase: Phase,
    /// Group letter, group stage only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_number: Option<u32>,
    pub home_team: String,
    pub away_team: String,
    /// Kick-off time, ISO 8601
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    /// Absent until the match has been played
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
}

impl Match {
    pub fn new(id: &str, phase: Phase, home_team: &str, away_team: &str) -> Self {
        Self {
            id: id.to_string(),
            phase,
            group: None,
            match_number: None,
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            datetime: None,
            result: None,
        }
    }

    pub fn with_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn with_result(mut self, result: MatchResult) -> Self {
        self.result = Some(result);
        self
    }

    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }
}

/// One model's forecast for one match, in canonical shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub match_id: String,
    pub model_id: String,
    pub predicted_result: MatchResult,
    #[serde(default)]
    pub timestamp: String,
}

impl Prediction {
    pub fn new(match_id: &str, model_id: &str, predicted_result: MatchResult) -> Self {
        Self {
            match_id: match_id.to_string(),
            model_id: model_id.to_string(),
            predicted_result,
            timestamp: String::new(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }
}

// =============================================================================
// Scoring outputs
// =============================================================================

/// Outcome of scoring one prediction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub points: u32,
    pub exact_score: bool,
    pub correct_winner: bool,
    pub correct_goal_difference: bool,
}

/// Descriptive statistics over a model's scored predictions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingStats {
    /// Predictions whose match has a result
    pub total_predictions: u32,
    pub exact_scores: u32,
    pub correct_winners: u32,
    pub correct_goal_difference: u32,
    /// Whole percentage of correct winners, 0..=100
    pub accuracy: u32,
}

/// Points per phase bucket plus tournament bonuses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub group_stage: u32,
    #[serde(rename = "roundOf32")]
    pub round_of_32: u32,
    #[serde(rename = "roundOf16")]
    pub round_of_16: u32,
    pub quarter_finals: u32,
    pub semi_finals: u32,
    #[serde(rename = "final")]
    pub final_: u32,
    pub bonuses: u32,
}

impl ScoreBreakdown {
    /// Credit match points to the bucket for `phase`.
    ///
    /// The third-place play-off has no bucket of its own and counts
    /// towards `semi_finals`.
    pub fn credit(&mut self, phase: Phase, points: u32) {
        let bucket = match phase {
            Phase::Groups => &mut self.group_stage,
            Phase::RoundOf32 => &mut self.round_of_32,
            Phase::RoundOf16 => &mut self.round_of_16,
            Phase::QuarterFinals => &mut self.quarter_finals,
            Phase::SemiFinals | Phase::ThirdPlace => &mut self.semi_finals,
            Phase::Final => &mut self.final_,
        };
        *bucket = bucket.saturating_add(points);
    }

    /// Sum of all phase buckets, bonuses excluded
    pub fn match_points(&self) -> u32 {
        [
            self.round_of_32,
            self.round_of_16,
            self.quarter_finals,
            self.semi_finals,
            self.final_,
        ]
        .into_iter()
        .fold(self.group_stage, u32::saturating_add)
    }
}

/// One model's row on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRanking {
    pub model_id: String,
    pub total_points: u32,
    pub stats: RankingStats,
    pub breakdown: ScoreBreakdown,
}

impl ModelRanking {
    /// All-zero ranking for a model with nothing scored yet
    pub fn empty(model_id: &str) -> Self {
        Self {
            model_id: model_id.to_string(),
            total_points: 0,
            stats: RankingStats::default(),
            breakdown: ScoreBreakdown::default(),
        }
    }

    /// Merge externally evaluated tournament bonus points.
    ///
    /// Totals saturate at `u32::MAX` rather than wrap.
    pub fn with_bonus(mut self, points: u32) -> Self {
        self.breakdown.bonuses = self.breakdown.bonuses.saturating_add(points);
        self.total_points = self.total_points.saturating_add(points);
        self
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
