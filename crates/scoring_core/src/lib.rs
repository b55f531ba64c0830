//! Scoring core for the AI prediction battle
//!
//! This crate provides:
//! - The per-phase points table and tournament bonus schedule
//! - Scoring of a single prediction against its match
//! - Aggregation of a model's predictions into totals, stats and a per-phase breakdown
//! - Leaderboard ordering with positions and medals
//!
//! Everything here is pure computation over caller-supplied values. Loading
//! matches and predictions, evaluating tournament bonuses and persisting
//! rankings happen outside this crate.
//!
//! # Usage
//!
//! ```
//! use scoring_core::{rank, Aggregator, Match, MatchResult, Phase, Prediction, ScoringRules};
//!
//! let matches = vec![Match::new("match-001", Phase::Groups, "arg", "fra")
//!     .with_result(MatchResult::new(2, 1))];
//! let predictions = vec![Prediction::new("match-001", "gpt-5.2", MatchResult::new(3, 2))];
//!
//! let aggregator = Aggregator::new(ScoringRules::default());
//! let ranking = aggregator.aggregate("gpt-5.2", &predictions, &matches);
//! assert_eq!(ranking.total_points, 3);
//!
//! let board = rank(vec![ranking]);
//! assert_eq!(board[0].model_id, "gpt-5.2");
//! ```

mod aggregate;
mod error;
mod ranking;
mod rules;
mod scorer;
mod types;

pub use aggregate::*;
pub use error::*;
pub use ranking::*;
pub use rules::*;
pub use scorer::*;
pub use types::*;
