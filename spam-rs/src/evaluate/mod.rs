//! Batch evaluation module
//!
//! Streams test corpora through the classifier, writes per-message log
//! files, and characterizes the false-positive/true-positive trade-off
//! across decision thresholds.

pub mod evaluator;
pub mod sweep;

pub use evaluator::{BatchEvaluator, CorpusEvaluation};
pub use sweep::{sweep_thresholds, SweepPoint};
