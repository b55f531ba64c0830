//! Points table per tournament phase and the tournament bonus schedule

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, ScoringError};
use crate::types::Phase;

/// Points awarded for one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseScoring {
    pub exact_score: u32,
    pub correct_winner: u32,
    pub goal_difference: u32,
}

impl PhaseScoring {
    pub const fn new(exact_score: u32, correct_winner: u32, goal_difference: u32) -> Self {
        Self {
            exact_score,
            correct_winner,
            goal_difference,
        }
    }
}

/// Tournament-level bonus points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bonuses {
    pub champion: u32,
    pub finalist: u32,
    /// Awarded per group whose winner was called correctly
    pub group_winner: u32,
}

/// Default bonus schedule
pub const DEFAULT_BONUSES: Bonuses = Bonuses {
    champion: 20,
    finalist: 10,
    group_winner: 5,
};

/// Default points table, indexed in [`Phase::ALL`] order
pub const DEFAULT_PHASE_SCORING: [PhaseScoring; 7] = [
    PhaseScoring::new(5, 2, 1),   // groups
    PhaseScoring::new(6, 3, 1),   // round-of-32
    PhaseScoring::new(8, 4, 2),   // round-of-16
    PhaseScoring::new(10, 5, 2),  // quarter-finals
    PhaseScoring::new(12, 6, 3),  // semi-finals
    PhaseScoring::new(10, 5, 2),  // third-place
    PhaseScoring::new(15, 8, 4),  // final
];

/// Complete scoring configuration.
///
/// Built once at start-up and never mutated. Every phase always has an
/// entry, so [`ScoringRules::scoring_for`] cannot fail; incomplete tables
/// are rejected when the rules are constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RulesTable", into = "RulesTable")]
pub struct ScoringRules {
    phases: [PhaseScoring; 7],
    bonuses: Bonuses,
}

/// Keyed form of [`ScoringRules`] used for (de)serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesTable {
    pub phases: BTreeMap<Phase, PhaseScoring>,
    pub bonuses: Bonuses,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            phases: DEFAULT_PHASE_SCORING,
            bonuses: DEFAULT_BONUSES,
        }
    }
}

impl ScoringRules {
    /// Build rules from a keyed table. Every phase must be present.
    pub fn from_table(phases: &BTreeMap<Phase, PhaseScoring>, bonuses: Bonuses) -> Result<Self> {
        let mut table = DEFAULT_PHASE_SCORING;
        for phase in Phase::ALL {
            table[phase.index()] = *phases
                .get(&phase)
                .ok_or(ScoringError::MissingPhase(phase))?;
        }
        Ok(Self {
            phases: table,
            bonuses,
        })
    }

    /// Points for matches played in `phase`
    pub fn scoring_for(&self, phase: Phase) -> PhaseScoring {
        self.phases[phase.index()]
    }

    pub fn bonuses(&self) -> Bonuses {
        self.bonuses
    }

    /// Keyed view of the table, in tournament order
    pub fn table(&self) -> RulesTable {
        RulesTable {
            phases: Phase::ALL
                .into_iter()
                .map(|phase| (phase, self.scoring_for(phase)))
                .collect(),
            bonuses: self.bonuses,
        }
    }
}

impl TryFrom<RulesTable> for ScoringRules {
    type Error = ScoringError;

    fn try_from(table: RulesTable) -> Result<Self> {
        Self::from_table(&table.phases, table.bonuses)
    }
}

impl From<ScoringRules> for RulesTable {
    fn from(rules: ScoringRules) -> Self {
        rules.table()
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
