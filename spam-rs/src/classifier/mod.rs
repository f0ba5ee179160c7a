//! Bayesian classification module
//!
//! Frequency-dictionary learning and persistence, per-token probability
//! estimation, probability fusion, and the message-level classifier facade.

pub mod dictionary;
pub mod estimator;
pub mod scorer;
pub mod types;

pub use dictionary::FrequencyDictionary;
pub use estimator::token_probability;
pub use scorer::{MessageScorer, SpamClassifier};
pub use types::*;
