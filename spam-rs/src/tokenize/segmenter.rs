//! Pluggable text segmentation
//!
//! The classifier only needs "given text, produce a sequence of substrings".
//! [`UnicodeSegmenter`] is the default implementation; hosts with a
//! language-specific word segmenter can provide their own [`Segmenter`].

use std::collections::HashSet;

use stop_words::LANGUAGE;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;

/// Splits a normalized line of text into candidate tokens.
///
/// Implementations are expected to perform their own stop-word filtering;
/// the normalizer only deduplicates and drops blank tokens afterwards.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Result<Vec<String>>;
}

/// Default segmenter built on Unicode word boundaries (UAX #29).
///
/// Handles mixed-script input: Latin text splits on word boundaries, CJK
/// ideographs come out one per token. Stop-words are removed before the
/// tokens are handed back.
pub struct UnicodeSegmenter {
    stopwords: HashSet<String>,
}

impl UnicodeSegmenter {
    /// Create a segmenter with the built-in English stop-word list.
    pub fn new() -> Self {
        Self {
            stopwords: HashSet::from_iter(stop_words::get(LANGUAGE::English)),
        }
    }

    /// Create a segmenter with a caller-supplied stop-word list.
    pub fn with_stopwords(stopwords: HashSet<String>) -> Self {
        Self { stopwords }
    }
}

impl Default for UnicodeSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .unicode_words()
            .filter(|word| !self.stopwords.contains(*word))
            .map(|word| word.to_string())
            .collect())
    }
}
