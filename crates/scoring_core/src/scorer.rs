//! Scoring of a single prediction against the match it targets

use crate::rules::ScoringRules;
use crate::types::{Match, MatchResult, Prediction, ScoreResult};

/// Which side won a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Home,
    Away,
    Draw,
}

impl Outcome {
    pub fn of(result: &MatchResult) -> Self {
        if result.home_score > result.away_score {
            Outcome::Home
        } else if result.away_score > result.home_score {
            Outcome::Away
        } else {
            Outcome::Draw
        }
    }
}

/// Score `prediction` against `m`.
///
/// Unplayed matches score zero. An exact score earns the phase's exact
/// points and nothing else; otherwise a correct winner earns the winner
/// points, plus the goal-difference points when the actual result is
/// decisive and the margins agree.
pub fn score(rules: &ScoringRules, prediction: &Prediction, m: &Match) -> ScoreResult {
    let mut result = ScoreResult::default();

    let Some(actual) = m.result.as_ref() else {
        return result;
    };
    let predicted = &prediction.predicted_result;
    let scoring = rules.scoring_for(m.phase);

    if predicted.same_score(actual) {
        return ScoreResult {
            points: scoring.exact_score,
            exact_score: true,
            correct_winner: true,
            correct_goal_difference: true,
        };
    }

    let actual_outcome = Outcome::of(actual);
    if Outcome::of(predicted) == actual_outcome {
        result.correct_winner = true;
        result.points += scoring.correct_winner;

        if actual_outcome != Outcome::Draw
            && actual.goal_difference() == predicted.goal_difference()
        {
            result.correct_goal_difference = true;
            result.points = result.points.saturating_add(scoring.goal_difference);
        }
    }

    result
}

#[cfg(test)]
#[path = "scorer_tests.rs"]
mod scorer_tests;
