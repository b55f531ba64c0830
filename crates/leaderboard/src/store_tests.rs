use super::*;

fn rankings() -> Vec<ModelRanking> {
    vec![
        ModelRanking::empty("gpt-5.2").with_bonus(20),
        ModelRanking::empty("grok-3"),
    ]
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("rankings.json");

    let stored = StoredRankings::new(rankings());
    stored.save(&path).unwrap();

    let loaded = StoredRankings::load(&path).unwrap();
    assert_eq!(loaded, stored);
    assert_eq!(loaded.find("gpt-5.2").unwrap().total_points, 20);
    assert!(loaded.find("llama-4-405b").is_none());
}

#[test]
fn test_wire_shape() {
    let stored = StoredRankings {
        rankings: rankings(),
        last_updated: "2026-06-12T00:00:00Z".to_string(),
    };
    let json = serde_json::to_value(&stored).unwrap();

    assert_eq!(json["lastUpdated"], "2026-06-12T00:00:00Z");
    assert_eq!(json["rankings"][0]["modelId"], "gpt-5.2");
    assert_eq!(json["rankings"][0]["totalPoints"], 20);
    assert_eq!(json["rankings"][0]["breakdown"]["bonuses"], 20);
    assert_eq!(json["rankings"][1]["stats"]["accuracy"], 0);
}

#[test]
fn test_missing_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rankings.json");

    let err = StoredRankings::load(&path).unwrap_err();
    assert!(matches!(err, LeaderboardError::MissingStore(p) if p == path));
}

#[test]
fn test_timestamp_is_rfc3339() {
    let stored = StoredRankings::new(Vec::new());
    assert!(chrono::DateTime::parse_from_rfc3339(&stored.last_updated).is_ok());
}
