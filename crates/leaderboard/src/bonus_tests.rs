use super::*;
use scoring_core::DEFAULT_BONUSES;

fn groups(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(g, t)| (g.to_string(), t.to_string()))
        .collect()
}

fn picks() -> TournamentPicks {
    TournamentPicks {
        champion: Some("ARG".to_string()),
        finalist: Some("FRA".to_string()),
        group_winners: groups(&[("A", "MEX"), ("B", "CAN"), ("C", "BRA")]),
    }
}

#[test]
fn test_unknown_outcome_awards_nothing() {
    let award = evaluate_bonus(&DEFAULT_BONUSES, &picks(), &TournamentOutcome::default());
    assert_eq!(award, BonusAward::default());
    assert_eq!(award.total(), 0);
}

#[test]
fn test_full_house() {
    let outcome = TournamentOutcome {
        champion: Some("arg".to_string()),
        finalist: Some("FRA".to_string()),
        group_winners: groups(&[("A", "MEX"), ("B", "SUI"), ("C", "bra")]),
    };

    let award = evaluate_bonus(&DEFAULT_BONUSES, &picks(), &outcome);
    assert_eq!(award.champion, 20);
    assert_eq!(award.finalist, 10);
    assert_eq!(award.group_winners, 10);
    assert_eq!(award.total(), 40);
}

#[test]
fn test_finalist_means_runner_up() {
    // Picking the eventual champion as runner-up earns nothing
    let outcome = TournamentOutcome {
        champion: Some("FRA".to_string()),
        finalist: Some("ARG".to_string()),
        ..Default::default()
    };

    let award = evaluate_bonus(&DEFAULT_BONUSES, &picks(), &outcome);
    assert_eq!(award.total(), 0);
}

#[test]
fn test_group_only_counted_when_decided() {
    let outcome = TournamentOutcome {
        group_winners: groups(&[("a", "MEX")]),
        ..Default::default()
    };

    let award = evaluate_bonus(&DEFAULT_BONUSES, &picks(), &outcome);
    assert_eq!(award.group_winners, 5);
}

#[test]
fn test_picks_from_json() {
    let json = r#"{
        "champion": "ESP",
        "finalist": "ENG",
        "groupWinners": { "A": "MEX", "H": "ESP" },
        "reasoning": "Depth in midfield"
    }"#;
    let picks: TournamentPicks = serde_json::from_str(json).unwrap();
    assert_eq!(picks.champion.as_deref(), Some("ESP"));
    assert_eq!(picks.group_winners.len(), 2);

    // Free text is not carried
    let value = serde_json::to_value(&picks).unwrap();
    assert!(value.get("reasoning").is_none());
}

#[test]
fn test_award_total_saturates() {
    let award = BonusAward {
        champion: u32::MAX,
        finalist: 10,
        group_winners: 5,
    };
    assert_eq!(award.total(), u32::MAX);
}
