//! Tournament-level bonuses: champion, runner-up and group winners.
//!
//! These need whole-tournament knowledge, so they are evaluated here and
//! handed to the scoring core through [`ModelRanking::with_bonus`].
//!
//! [`ModelRanking::with_bonus`]: scoring_core::ModelRanking::with_bonus

use scoring_core::Bonuses;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A model's tournament-wide picks, as written in its prediction file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentPicks {
    /// Team code
    pub champion: Option<String>,
    /// Team code of the runner-up
    pub finalist: Option<String>,
    /// Group letter -> team code
    pub group_winners: BTreeMap<String, String>,
}

/// What actually happened, as far as it is known
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentOutcome {
    pub champion: Option<String>,
    /// Runner-up
    pub finalist: Option<String>,
    pub group_winners: BTreeMap<String, String>,
}

/// Bonus points earned by one model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusAward {
    pub champion: u32,
    pub finalist: u32,
    pub group_winners: u32,
}

impl BonusAward {
    pub fn total(&self) -> u32 {
        self.champion
            .saturating_add(self.finalist)
            .saturating_add(self.group_winners)
    }
}

/// Team codes match ignoring case and surrounding whitespace
fn same_team(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

fn picked(pick: Option<&String>, actual: Option<&String>) -> bool {
    matches!((pick, actual), (Some(p), Some(a)) if same_team(p, a))
}

/// Evaluate one model's picks against the known outcome.
///
/// Each correct group winner earns the group bonus once; unknown outcome
/// entries earn nothing.
pub fn evaluate_bonus(
    bonuses: &Bonuses,
    picks: &TournamentPicks,
    outcome: &TournamentOutcome,
) -> BonusAward {
    let mut award = BonusAward::default();

    if picked(picks.champion.as_ref(), outcome.champion.as_ref()) {
        award.champion = bonuses.champion;
    }
    if picked(picks.finalist.as_ref(), outcome.finalist.as_ref()) {
        award.finalist = bonuses.finalist;
    }

    for (group, winner) in &outcome.group_winners {
        let pick = picks
            .group_winners
            .iter()
            .find(|(g, _)| same_team(g, group))
            .map(|(_, team)| team);
        if picked(pick, Some(winner)) {
            award.group_winners = award.group_winners.saturating_add(bonuses.group_winner);
        }
    }

    award
}

#[cfg(test)]
#[path = "bonus_tests.rs"]
mod bonus_tests;
