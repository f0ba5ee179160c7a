//! Per-token spam probability estimation
//!
//! Estimates P(spam | token) from the two frequency dictionaries with the
//! fixed smoothing and clamping rules of the model. Pure; evaluated once per
//! distinct token per message.

use super::dictionary::FrequencyDictionary;

/// Floor for a token probability: confidently benign tokens.
pub const MIN_PROBABILITY: f64 = 0.01;
/// Ceiling for a token probability: confidently spammy tokens.
pub const MAX_PROBABILITY: f64 = 0.99;
/// Neutral prior for unknown or low-evidence tokens.
pub const NEUTRAL_PROBABILITY: f64 = 0.4;

/// Combined count at or below which a token known to both classes is
/// treated as low-evidence.
const LOW_EVIDENCE_COMBINED: u64 = 3;
/// Single-class count at or below which a token known to one class is
/// treated as low-evidence.
const LOW_EVIDENCE_SINGLE: u64 = 2;

/// Probability that a message containing `token` is spam.
///
/// `ns` is the token's spam count, `nn` its normal count. Rules in priority
/// order:
/// 1. present in both: `ns + nn <= 3` → 0.4, else `ns / (ns + nn)`;
/// 2. only normal: `nn <= 2` → 0.4, else 0.01;
/// 3. only spam: `ns <= 2` → 0.4, else 0.99;
/// 4. neither → 0.4.
///
/// The result is clamped into [0.01, 0.99] unconditionally so future rule
/// changes cannot leak extreme values.
pub fn token_probability(
    token: &str,
    spam_dict: &FrequencyDictionary,
    normal_dict: &FrequencyDictionary,
) -> f64 {
    let ns = spam_dict.count(token);
    let nn = normal_dict.count(token);

    let p = match (spam_dict.contains(token), normal_dict.contains(token)) {
        (true, true) => {
            if ns + nn <= LOW_EVIDENCE_COMBINED {
                NEUTRAL_PROBABILITY
            } else {
                ns as f64 / (ns + nn) as f64
            }
        }
        (false, true) => {
            if nn <= LOW_EVIDENCE_SINGLE {
                NEUTRAL_PROBABILITY
            } else {
                MIN_PROBABILITY
            }
        }
        (true, false) => {
            if ns <= LOW_EVIDENCE_SINGLE {
                NEUTRAL_PROBABILITY
            } else {
                MAX_PROBABILITY
            }
        }
        (false, false) => NEUTRAL_PROBABILITY,
    };

    p.clamp(MIN_PROBABILITY, MAX_PROBABILITY)
}
