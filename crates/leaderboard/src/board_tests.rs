use super::*;
use crate::bonus::{TournamentOutcome, TournamentPicks};
use crate::snapshot::{ModelCatalog, ModelEntry, ModelInfo};
use scoring_core::{Match, MatchResult, Phase, Prediction};

fn entry(model_id: &str, scores: &[(&str, u32, u32)]) -> ModelEntry {
    ModelEntry {
        model_id: model_id.to_string(),
        predictions: scores
            .iter()
            .map(|(id, h, a)| Prediction::new(id, model_id, MatchResult::new(*h, *a)))
            .collect(),
        picks: TournamentPicks::default(),
    }
}

fn info(id: &str) -> ModelInfo {
    ModelInfo {
        id: id.to_string(),
        name: id.to_uppercase(),
        provider: "test".to_string(),
    }
}

fn snapshot() -> Snapshot {
    let mut champion_pick = entry("grok-3", &[("match-001", 0, 1)]);
    champion_pick.picks.champion = Some("MEX".to_string());

    Snapshot {
        matches: vec![
            Match::new("match-001", Phase::Groups, "mex", "rsa").with_result(MatchResult::new(2, 0)),
            Match::new("match-002", Phase::Groups, "kor", "cze").with_result(MatchResult::new(1, 1)),
        ],
        entries: vec![
            entry("gpt-5.2", &[("match-001", 2, 0), ("match-002", 0, 0)]),
            champion_pick,
            entry("deepseek-v3.2", &[("match-001", 1, 0)]),
        ],
        catalog: ModelCatalog::new(vec![info("gpt-5.2"), info("mistral-large")]),
        outcome: TournamentOutcome {
            champion: Some("mex".to_string()),
            ..Default::default()
        },
    }
}

#[test]
fn test_board_order_and_bonus() {
    let board = build_rankings(&snapshot(), &ScoringRules::default());

    let summary: Vec<_> = board
        .iter()
        .map(|r| (r.model_id.as_str(), r.total_points))
        .collect();
    assert_eq!(
        summary,
        [
            ("grok-3", 20),
            ("gpt-5.2", 7),
            ("deepseek-v3.2", 2),
            ("mistral-large", 0),
        ]
    );
    assert_eq!(board[0].breakdown.bonuses, 20);
    assert_eq!(board[0].stats.total_predictions, 1);
}

#[test]
fn test_catalog_only_models_are_zero() {
    let board = build_rankings(&snapshot(), &ScoringRules::default());
    let idle = board.iter().find(|r| r.model_id == "mistral-large").unwrap();
    assert_eq!(*idle, ModelRanking::empty("mistral-large"));
}

#[test]
fn test_rebuild_is_identical() {
    let snapshot = snapshot();
    let rules = ScoringRules::default();
    assert_eq!(build_rankings(&snapshot, &rules), build_rankings(&snapshot, &rules));
}

#[test]
fn test_empty_snapshot() {
    assert!(build_rankings(&Snapshot::default(), &ScoringRules::default()).is_empty());
}
