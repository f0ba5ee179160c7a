//! Token normalization
//!
//! Post-processing applied to every raw message line before scoring or
//! learning: line endings removed, the whole line lowercased, then the
//! segmenter output deduplicated into a token set.

use std::collections::HashSet;

use super::segmenter::{Segmenter, UnicodeSegmenter};
use crate::error::Result;

/// Normalizes a raw message line into a set of distinct tokens.
pub struct TokenNormalizer {
    segmenter: Box<dyn Segmenter>,
}

impl TokenNormalizer {
    /// Create a normalizer backed by the default [`UnicodeSegmenter`].
    pub fn new() -> Self {
        Self {
            segmenter: Box::new(UnicodeSegmenter::new()),
        }
    }

    /// Create a normalizer backed by a custom segmenter.
    pub fn with_segmenter(segmenter: Box<dyn Segmenter>) -> Self {
        Self { segmenter }
    }

    /// Normalize a raw line into a set of distinct tokens.
    ///
    /// The model is case-insensitive, so the line is lowercased before
    /// segmentation. Repeated words contribute a single token. The result
    /// may be empty; zero-token messages are a distinguished case for the
    /// scorer, not an error.
    pub fn normalize(&self, raw_line: &str) -> Result<HashSet<String>> {
        let mut line = raw_line.replace(['\n', '\r'], "");
        line = line.to_lowercase();

        let segments = self.segmenter.segment(&line)?;

        let mut tokens: HashSet<String> = segments.into_iter().collect();
        tokens.remove(" ");
        Ok(tokens)
    }
}

impl Default for TokenNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        let normalizer = TokenNormalizer::new();
        let tokens = normalizer.normalize("WIN LOTTERY").unwrap();
        assert!(tokens.contains("win"));
        assert!(tokens.contains("lottery"));
        assert!(!tokens.contains("WIN"));
    }

    #[test]
    fn test_normalize_strips_line_endings() {
        let normalizer = TokenNormalizer::new();
        let tokens = normalizer.normalize("lottery\r\n").unwrap();
        assert!(tokens.contains("lottery"));
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_normalize_deduplicates() {
        let normalizer = TokenNormalizer::new();
        let tokens = normalizer.normalize("viagra viagra viagra").unwrap();
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_normalize_empty_line() {
        let normalizer = TokenNormalizer::new();
        let tokens = normalizer.normalize("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_normalize_mixed_script() {
        let normalizer = TokenNormalizer::new();
        let tokens = normalizer.normalize("WIN 赢").unwrap();
        assert!(tokens.contains("win"));
        assert!(tokens.contains("赢"));
    }

    #[test]
    fn test_normalize_removes_single_space_token() {
        struct SpacySegmenter;
        impl Segmenter for SpacySegmenter {
            fn segment(&self, text: &str) -> Result<Vec<String>> {
                Ok(text.split(',').map(|s| s.to_string()).collect())
            }
        }

        let normalizer = TokenNormalizer::with_segmenter(Box::new(SpacySegmenter));
        let tokens = normalizer.normalize("a, ,b").unwrap();
        assert!(!tokens.contains(" "));
        assert!(tokens.contains("a"));
        assert!(tokens.contains("b"));
    }
}
