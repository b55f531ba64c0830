//! Leaderboard ordering

use serde::{Deserialize, Serialize};

use crate::types::ModelRanking;

/// Podium medal for the first three positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a 0-based leaderboard index
    pub fn for_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Medal::Gold),
            1 => Some(Medal::Silver),
            2 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
        }
    }
}

/// A ranking together with its place on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    /// 1-based
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medal: Option<Medal>,
    pub ranking: ModelRanking,
}

/// Sort rankings by total points, highest first.
///
/// Ties are broken by ascending model id. The sort is stable, so rows that
/// share both keep their input order.
pub fn rank(mut rankings: Vec<ModelRanking>) -> Vec<ModelRanking> {
    rankings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.model_id.cmp(&b.model_id))
    });
    rankings
}

/// Rank and number the board. Positions follow the sorted order; tied
/// models get consecutive positions.
pub fn standings(rankings: Vec<ModelRanking>) -> Vec<Standing> {
    rank(rankings)
        .into_iter()
        .enumerate()
        .map(|(index, ranking)| Standing {
            position: index + 1,
            medal: Medal::for_index(index),
            ranking,
        })
        .collect()
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod ranking_tests;
