//! Frequency dictionaries
//!
//! A frequency dictionary maps tokens to the number of training messages
//! that contained them. Two independently owned instances exist, one built
//! from spam messages and one from normal messages. Dictionaries are built
//! in a batch learning pass, persisted as flat `<token> = <count>` text,
//! and read-only during scoring.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Result, SpamError};
use crate::tokenize::TokenNormalizer;

/// Literal separator used by the persistence format. Tokens containing this
/// substring cannot round-trip and are rejected at save time.
const SEPARATOR: &str = " = ";

/// Token → occurrence count for one message class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyDictionary {
    counts: HashMap<String, u64>,
}

impl FrequencyDictionary {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Occurrence count for a token, 0 if absent.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Increment a token's count by one.
    pub fn record(&mut self, token: &str) {
        *self.counts.entry(token.to_string()).or_insert(0) += 1;
    }

    /// Build a dictionary from a training corpus, one message per line.
    ///
    /// Each distinct token in a line increments its count by exactly 1,
    /// regardless of how often it repeats within the line. Lines that
    /// normalize to zero tokens contribute nothing; lines whose segmentation
    /// fails are skipped with a warning.
    pub fn learn<P: AsRef<Path>>(corpus_path: P, normalizer: &TokenNormalizer) -> Result<Self> {
        let path = corpus_path.as_ref();
        if !path.exists() {
            return Err(SpamError::NotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut dictionary = Self::new();
        let mut lines = 0u64;
        let mut skipped = 0u64;

        for line in reader.lines() {
            let line = line?;
            lines += 1;

            let tokens = match normalizer.normalize(&line) {
                Ok(tokens) => tokens,
                Err(e) => {
                    skipped += 1;
                    warn!("Skipping unsegmentable line {} in {}: {}", lines, path.display(), e);
                    continue;
                }
            };

            for token in &tokens {
                dictionary.record(token);
            }
        }

        info!(
            "Learned {} messages from {} ({} tokens, {} skipped)",
            lines,
            path.display(),
            dictionary.len(),
            skipped
        );
        Ok(dictionary)
    }

    /// Persist the dictionary as one `<token> = <count>` line per entry.
    ///
    /// Entry order is not guaranteed. Tokens containing the literal
    /// separator are rejected rather than silently corrupting the file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);

        for (token, count) in &self.counts {
            if token.contains(SEPARATOR) {
                return Err(SpamError::UnpersistableToken(token.clone()));
            }
            writeln!(writer, "{}{}{}", token, SEPARATOR, count)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Load a dictionary persisted by [`save`](Self::save).
    ///
    /// A missing file is an explicit error, never an empty dictionary. A
    /// line without the separator or with a non-integer count is a fatal
    /// parse error reported with the offending line and path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SpamError::NotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut dictionary = Self::new();
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let (token, count) = line.split_once(SEPARATOR).ok_or_else(|| {
                SpamError::MalformedDictionary {
                    path: path.display().to_string(),
                    line: line.clone(),
                }
            })?;

            let count: u64 = count.parse().map_err(|_| SpamError::MalformedDictionary {
                path: path.display().to_string(),
                line: line.clone(),
            })?;

            dictionary.counts.insert(token.to_string(), count);
        }

        Ok(dictionary)
    }
}

impl FromIterator<(String, u64)> for FrequencyDictionary {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
