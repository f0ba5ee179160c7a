//! spam-rs: Bayesian spam filter for short text messages
//!
//! A word-frequency naive-Bayes-style classifier. Messages are normalized
//! and segmented into tokens, each token is assigned a smoothed spam
//! probability from two frequency dictionaries, and the probabilities are
//! fused into a single message-level score.
//!
//! # Features
//!
//! - **Learning**: build frequency dictionaries from line-based corpora
//! - **Persistence**: flat `<token> = <count>` dictionary files
//! - **Scoring**: per-message spam probability and threshold decisions
//! - **Evaluation**: streaming batch runs with per-message logs and
//!   threshold-sweep statistics
//! - **Pluggable segmentation**: bring your own word segmenter
//!
//! # Example
//!
//! ```no_run
//! use spam_rs::classifier::{FrequencyDictionary, SpamClassifier};
//! use spam_rs::tokenize::TokenNormalizer;
//!
//! fn main() -> spam_rs::Result<()> {
//!     let normalizer = TokenNormalizer::new();
//!     let spam = FrequencyDictionary::learn("data/learn/spam.txt", &normalizer)?;
//!     let normal = FrequencyDictionary::learn("data/learn/normal.txt", &normalizer)?;
//!
//!     let classifier = SpamClassifier::new(spam, normal);
//!     if classifier.is_spam("想赢。搜公纵號〔妞姐看牌〕", 0.09)? {
//!         println!("spam");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`classifier`]: dictionaries, probability estimation, scoring
//! - [`config`]: configuration management
//! - [`corpus`]: raw-file joining utilities
//! - [`error`]: error types and handling
//! - [`evaluate`]: batch evaluation and threshold sweeps
//! - [`tokenize`]: normalization and pluggable segmentation

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;
pub mod evaluate;
pub mod tokenize;

// Re-export commonly used types
pub use classifier::{FrequencyDictionary, ScoreOutcome, SpamClassifier};
pub use config::Config;
pub use error::{Result, SpamError};
