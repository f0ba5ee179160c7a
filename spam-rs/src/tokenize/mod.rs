//! Tokenization module
//!
//! Turns a raw message line into the set of distinct tokens the classifier
//! scores. Segmentation itself is pluggable behind the [`Segmenter`] trait.

pub mod normalizer;
pub mod segmenter;

pub use normalizer::TokenNormalizer;
pub use segmenter::{Segmenter, UnicodeSegmenter};
