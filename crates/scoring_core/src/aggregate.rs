//! Aggregation of a model's predictions into a leaderboard row

use std::collections::HashMap;
use tracing::debug;

use crate::rules::ScoringRules;
use crate::scorer::score;
use crate::types::{Match, ModelRanking, Prediction, RankingStats, ScoreBreakdown, ScoreResult};

/// Scores prediction sets with a fixed rules table
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    rules: ScoringRules,
}

impl Aggregator {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Score one prediction against its match
    pub fn score(&self, prediction: &Prediction, m: &Match) -> ScoreResult {
        score(&self.rules, prediction, m)
    }

    /// Build the ranking row for `model_id` from its predictions.
    ///
    /// Predictions for matches missing from `matches` are skipped. Only
    /// predictions on played matches count towards `total_predictions`.
    /// Bonus points are not computed here; see [`ModelRanking::with_bonus`].
    pub fn aggregate(
        &self,
        model_id: &str,
        predictions: &[Prediction],
        matches: &[Match],
    ) -> ModelRanking {
        let by_id: HashMap<&str, &Match> = matches.iter().map(|m| (m.id.as_str(), m)).collect();

        let mut total_points: u32 = 0;
        let mut stats = RankingStats::default();
        let mut breakdown = ScoreBreakdown::default();
        let mut skipped = 0usize;

        for prediction in predictions {
            let Some(m) = by_id.get(prediction.match_id.as_str()) else {
                skipped += 1;
                continue;
            };
            if !m.is_played() {
                continue;
            }

            let result = self.score(prediction, m);
            total_points = total_points.saturating_add(result.points);
            breakdown.credit(m.phase, result.points);

            stats.total_predictions += 1;
            stats.exact_scores += u32::from(result.exact_score);
            stats.correct_winners += u32::from(result.correct_winner);
            stats.correct_goal_difference += u32::from(result.correct_goal_difference);
        }

        stats.accuracy = accuracy(stats.correct_winners, stats.total_predictions);

        if skipped > 0 {
            debug!(model = model_id, skipped, "predictions reference unknown matches");
        }

        ModelRanking {
            model_id: model_id.to_string(),
            total_points,
            stats,
            breakdown,
        }
    }

    /// Aggregate several models against the same match set
    pub fn aggregate_all<'a, I>(&self, entries: I, matches: &[Match]) -> Vec<ModelRanking>
    where
        I: IntoIterator<Item = (&'a str, &'a [Prediction])>,
    {
        entries
            .into_iter()
            .map(|(model_id, predictions)| self.aggregate(model_id, predictions, matches))
            .collect()
    }
}

/// Whole percentage of `correct` over `total`, rounding halves up; 0 when `total` is 0
pub fn accuracy(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (correct, total) = (u64::from(correct), u64::from(total));
    ((200 * correct + total) / (2 * total)) as u32
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod aggregate_tests;
