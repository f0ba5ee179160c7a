//! Classifier types and data structures

use serde::{Deserialize, Serialize};

/// Outcome of scoring a single message.
///
/// A message that normalizes to zero tokens has no defined spam probability;
/// callers must handle that case instead of receiving a NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScoreOutcome {
    /// Spam probability in (0, 1)
    Scored(f64),
    /// The message produced no tokens
    Unscoreable,
}

impl ScoreOutcome {
    /// The spam probability, if one could be computed.
    pub fn probability(&self) -> Option<f64> {
        match self {
            ScoreOutcome::Scored(p) => Some(*p),
            ScoreOutcome::Unscoreable => None,
        }
    }

    /// Decide spam at a threshold. Unscoreable messages are never spam.
    pub fn is_spam(&self, threshold: f64) -> bool {
        matches!(self, ScoreOutcome::Scored(p) if *p >= threshold)
    }
}
