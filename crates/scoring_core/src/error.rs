//! Errors raised while building the scoring configuration

use thiserror::Error;

use crate::types::Phase;

/// Configuration errors. Scoring itself is total and never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("unknown tournament phase: {0:?}")]
    UnknownPhase(String),

    #[error("scoring table has no entry for phase {0}")]
    MissingPhase(Phase),
}

pub type Result<T> = std::result::Result<T, ScoringError>;
