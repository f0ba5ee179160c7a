//! Message scoring engine
//!
//! Fuses per-token probabilities into one message-level spam probability and
//! exposes the classifier facade built on top of the frequency dictionaries.

use std::collections::HashMap;

use super::dictionary::FrequencyDictionary;
use super::estimator::token_probability;
use super::types::ScoreOutcome;
use crate::error::Result;
use crate::tokenize::{Segmenter, TokenNormalizer};

/// Fuses per-token probabilities under the independence assumption.
///
/// The fused score is `Π p / (Π p + Π (1 - p))` over the `top_k` most
/// spam-indicative probabilities. By default all probabilities are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageScorer {
    top_k: Option<usize>,
}

impl MessageScorer {
    pub fn new() -> Self {
        Self { top_k: None }
    }

    /// Keep only the K highest probabilities when fusing.
    pub fn with_top_k(top_k: usize) -> Self {
        Self { top_k: Some(top_k) }
    }

    /// Fuse a token → probability mapping into a message score.
    ///
    /// An empty mapping yields [`ScoreOutcome::Unscoreable`]. The score is
    /// always strictly inside (0, 1): messages with hundreds of extreme
    /// probabilities underflow the direct products, so the fusion falls back
    /// to log space and the result is clamped away from 0 and 1.
    pub fn fuse(&self, probabilities: &HashMap<String, f64>) -> ScoreOutcome {
        if probabilities.is_empty() {
            return ScoreOutcome::Unscoreable;
        }

        let mut values: Vec<f64> = probabilities.values().copied().collect();
        values.sort_by(|a, b| b.total_cmp(a));
        if let Some(top_k) = self.top_k {
            values.truncate(top_k);
        }

        let product_p: f64 = values.iter().product();
        let product_complement: f64 = values.iter().map(|p| 1.0 - p).product();

        let score = if product_p > 0.0 && product_complement > 0.0 {
            product_p / (product_p + product_complement)
        } else {
            // Equivalent fusion in log space, immune to underflow
            let ln_p: f64 = values.iter().map(|p| p.ln()).sum();
            let ln_complement: f64 = values.iter().map(|p| (1.0 - p).ln()).sum();
            1.0 / (1.0 + (ln_complement - ln_p).exp())
        };

        // The exact score can be closer to 0 or 1 than f64 resolves
        ScoreOutcome::Scored(score.clamp(f64::MIN_POSITIVE, 1.0 - f64::EPSILON))
    }
}

/// Spam classifier facade: normalize, estimate, fuse, decide.
///
/// Holds the two frequency dictionaries read-only; scoring has no side
/// effects and no state across calls.
pub struct SpamClassifier {
    spam_dict: FrequencyDictionary,
    normal_dict: FrequencyDictionary,
    normalizer: TokenNormalizer,
    scorer: MessageScorer,
}

impl SpamClassifier {
    /// Create a classifier over the two dictionaries with the default
    /// segmenter and fusion settings.
    pub fn new(spam_dict: FrequencyDictionary, normal_dict: FrequencyDictionary) -> Self {
        Self {
            spam_dict,
            normal_dict,
            normalizer: TokenNormalizer::new(),
            scorer: MessageScorer::new(),
        }
    }

    /// Replace the segmenter backing the normalizer.
    pub fn with_segmenter(mut self, segmenter: Box<dyn Segmenter>) -> Self {
        self.normalizer = TokenNormalizer::with_segmenter(segmenter);
        self
    }

    /// Keep only the K most spam-indicative probabilities when fusing.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.scorer = MessageScorer::with_top_k(top_k);
        self
    }

    pub fn spam_dictionary(&self) -> &FrequencyDictionary {
        &self.spam_dict
    }

    pub fn normal_dictionary(&self) -> &FrequencyDictionary {
        &self.normal_dict
    }

    /// Per-token spam probabilities for one raw message line.
    pub fn token_probabilities(&self, raw_line: &str) -> Result<HashMap<String, f64>> {
        let tokens = self.normalizer.normalize(raw_line)?;
        Ok(tokens
            .into_iter()
            .map(|token| {
                let p = token_probability(&token, &self.spam_dict, &self.normal_dict);
                (token, p)
            })
            .collect())
    }

    /// Spam probability for one raw message line.
    pub fn score_message(&self, raw_line: &str) -> Result<ScoreOutcome> {
        let probabilities = self.token_probabilities(raw_line)?;
        Ok(self.scorer.fuse(&probabilities))
    }

    /// Decide spam at a threshold: true iff the score is >= threshold.
    /// Unscoreable messages are not spam.
    pub fn is_spam(&self, raw_line: &str, threshold: f64) -> Result<bool> {
        Ok(self.score_message(raw_line)?.is_spam(threshold))
    }

    pub(crate) fn fuse(&self, probabilities: &HashMap<String, f64>) -> ScoreOutcome {
        self.scorer.fuse(probabilities)
    }
}
