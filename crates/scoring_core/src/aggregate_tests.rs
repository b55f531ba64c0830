use super::*;
use crate::rules::{PhaseScoring, DEFAULT_BONUSES};
use crate::types::{MatchResult, Phase};
use std::collections::BTreeMap;

fn matches() -> Vec<Match> {
    vec![
        Match::new("match-001", Phase::Groups, "arg", "fra")
            .with_group("A")
            .with_result(MatchResult::new(2, 1)),
        Match::new("match-002", Phase::Groups, "bra", "ger")
            .with_group("B")
            .with_result(MatchResult::new(0, 0)),
        Match::new("match-073", Phase::RoundOf32, "esp", "ned").with_result(MatchResult::new(1, 3)),
        Match::new("match-103", Phase::ThirdPlace, "por", "eng").with_result(MatchResult::new(2, 0)),
        Match::new("match-104", Phase::Final, "arg", "bra"),
    ]
}

fn predict(match_id: &str, home: u32, away: u32) -> Prediction {
    Prediction::new(match_id, "claude-opus-4.5", MatchResult::new(home, away))
}

#[test]
fn test_total_points() {
    let aggregator = Aggregator::default();
    let predictions = vec![predict("match-001", 2, 1), predict("match-002", 1, 1)];

    let ranking = aggregator.aggregate("claude-opus-4.5", &predictions, &matches());
    assert_eq!(ranking.total_points, 7);
    assert_eq!(ranking.breakdown.group_stage, 7);
}

#[test]
fn test_stats() {
    let aggregator = Aggregator::default();
    let predictions = vec![
        predict("match-001", 2, 1), // exact
        predict("match-002", 1, 1), // winner
        predict("match-073", 0, 2), // winner + diff
        predict("match-103", 0, 1), // wrong
        predict("match-104", 1, 0), // pending
    ];

    let ranking = aggregator.aggregate("claude-opus-4.5", &predictions, &matches());
    assert_eq!(ranking.stats.total_predictions, 4);
    assert_eq!(ranking.stats.exact_scores, 1);
    assert_eq!(ranking.stats.correct_winners, 3);
    assert_eq!(ranking.stats.correct_goal_difference, 2);
    assert_eq!(ranking.stats.accuracy, 75);
    assert_eq!(ranking.total_points, 5 + 2 + 3 + 1);
}

#[test]
fn test_breakdown_buckets() {
    let aggregator = Aggregator::default();
    let predictions = vec![
        predict("match-001", 2, 1),
        predict("match-073", 1, 3),
        predict("match-103", 2, 0),
    ];

    let ranking = aggregator.aggregate("claude-opus-4.5", &predictions, &matches());
    assert_eq!(ranking.breakdown.group_stage, 5);
    assert_eq!(ranking.breakdown.round_of_32, 6);
    assert_eq!(ranking.breakdown.semi_finals, 10);
    assert_eq!(ranking.breakdown.final_, 0);
    assert_eq!(ranking.breakdown.match_points(), ranking.total_points);
}

#[test]
fn test_unknown_match_skipped() {
    let aggregator = Aggregator::default();
    let predictions = vec![predict("match-001", 2, 1), predict("match-999", 2, 1)];

    let ranking = aggregator.aggregate("claude-opus-4.5", &predictions, &matches());
    assert_eq!(ranking.total_points, 5);
    assert_eq!(ranking.stats.total_predictions, 1);
}

#[test]
fn test_no_played_matches() {
    let aggregator = Aggregator::default();
    let predictions = vec![predict("match-104", 1, 0)];

    let ranking = aggregator.aggregate("claude-opus-4.5", &predictions, &matches());
    assert_eq!(ranking, ModelRanking::empty("claude-opus-4.5"));
}

#[test]
fn test_accuracy_rounding() {
    assert_eq!(accuracy(0, 0), 0);
    assert_eq!(accuracy(1, 3), 33);
    assert_eq!(accuracy(2, 3), 67);
    assert_eq!(accuracy(1, 8), 13); // 12.5 rounds up
    assert_eq!(accuracy(5, 5), 100);
}

#[test]
fn test_with_bonus() {
    let aggregator = Aggregator::default();
    let ranking = aggregator
        .aggregate("claude-opus-4.5", &[predict("match-001", 2, 1)], &matches())
        .with_bonus(25);

    assert_eq!(ranking.breakdown.bonuses, 25);
    assert_eq!(ranking.total_points, 30);
    assert_eq!(ranking.breakdown.match_points(), 5);
}

#[test]
fn test_bonus_saturates() {
    let ranking = ModelRanking::empty("grok-3")
        .with_bonus(u32::MAX)
        .with_bonus(1);
    assert_eq!(ranking.total_points, u32::MAX);
    assert_eq!(ranking.breakdown.bonuses, u32::MAX);
}

#[test]
fn test_huge_rules_saturate() {
    let huge = PhaseScoring::new(u32::MAX, u32::MAX, u32::MAX);
    let phases: BTreeMap<_, _> = Phase::ALL.iter().map(|&p| (p, huge)).collect();
    let rules = ScoringRules::from_table(&phases, DEFAULT_BONUSES).unwrap();
    let aggregator = Aggregator::new(rules);

    // Two exact hits plus a winner-and-difference hit, all at u32::MAX
    let predictions = vec![
        predict("match-001", 2, 1),
        predict("match-002", 0, 0),
        predict("match-073", 0, 2),
        predict("match-103", 2, 0),
    ];
    let ranking = aggregator
        .aggregate("claude-opus-4.5", &predictions, &matches())
        .with_bonus(20);

    assert_eq!(ranking.total_points, u32::MAX);
    assert_eq!(ranking.breakdown.group_stage, u32::MAX);
    assert_eq!(ranking.breakdown.round_of_32, u32::MAX);
    assert_eq!(ranking.breakdown.match_points(), u32::MAX);
    assert_eq!(ranking.stats.total_predictions, 4);
}

#[test]
fn test_aggregate_all() {
    let aggregator = Aggregator::default();
    let first = vec![predict("match-001", 2, 1)];
    let second = vec![predict("match-001", 0, 1)];

    let rankings = aggregator.aggregate_all(
        [("gpt-5.2", first.as_slice()), ("grok-3", second.as_slice())],
        &matches(),
    );
    assert_eq!(rankings.len(), 2);
    assert_eq!(rankings[0].model_id, "gpt-5.2");
    assert_eq!(rankings[0].total_points, 5);
    assert_eq!(rankings[1].total_points, 0);
}
