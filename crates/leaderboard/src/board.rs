//! Scoring run: snapshot in, ordered rankings out

use rayon::prelude::*;
use scoring_core::{rank, Aggregator, ModelRanking, ScoringRules};
use std::collections::HashSet;
use tracing::{debug, info};

use crate::bonus::evaluate_bonus;
use crate::snapshot::Snapshot;

/// Score every model in `snapshot` and order the board.
///
/// Models run in parallel; each gets its tournament bonus merged in.
/// Catalogued models without a prediction file appear with zero points.
pub fn build_rankings(snapshot: &Snapshot, rules: &ScoringRules) -> Vec<ModelRanking> {
    let aggregator = Aggregator::new(rules.clone());
    let bonuses = rules.bonuses();

    let mut rankings: Vec<ModelRanking> = snapshot
        .entries
        .par_iter()
        .map(|entry| {
            let award = evaluate_bonus(&bonuses, &entry.picks, &snapshot.outcome);
            let ranking = aggregator.aggregate(&entry.model_id, &entry.predictions, &snapshot.matches);
            debug!(
                model = %entry.model_id,
                match_points = ranking.total_points,
                bonus = award.total(),
                "model scored"
            );
            ranking.with_bonus(award.total())
        })
        .collect();

    let scored: HashSet<String> = rankings.iter().map(|r| r.model_id.clone()).collect();
    for model in snapshot.catalog.iter() {
        if !scored.contains(&model.id) {
            rankings.push(ModelRanking::empty(&model.id));
        }
    }

    let rankings = rank(rankings);
    if let Some(leader) = rankings.first() {
        info!(
            models = rankings.len(),
            leader = %leader.model_id,
            points = leader.total_points,
            "rankings computed"
        );
    }
    rankings
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
