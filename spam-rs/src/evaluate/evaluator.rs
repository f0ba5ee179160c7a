//! Streaming corpus evaluation
//!
//! Scores every line of a test corpus and writes a structured per-message
//! log. Corpora may be arbitrarily large, so lines are streamed one at a
//! time and only the scores are kept in memory.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use crate::classifier::{ScoreOutcome, SpamClassifier};
use crate::error::{Result, SpamError};

/// Emit an elapsed-time progress marker every this many lines.
const PROGRESS_INTERVAL: u64 = 500_000;

/// Results of evaluating one corpus.
#[derive(Debug, Clone)]
pub struct CorpusEvaluation {
    /// Per-message spam probabilities, in input order
    pub scores: Vec<f64>,
    /// Lines read from the corpus
    pub processed: u64,
    /// Lines skipped because segmentation failed
    pub skipped: u64,
    /// Lines that produced no tokens and therefore no probability
    pub unscoreable: u64,
}

/// Streams corpora through a classifier.
pub struct BatchEvaluator<'a> {
    classifier: &'a SpamClassifier,
}

impl<'a> BatchEvaluator<'a> {
    pub fn new(classifier: &'a SpamClassifier) -> Self {
        Self { classifier }
    }

    /// Score every line of `corpus_path`, appending one log block per line
    /// to `log_path`.
    ///
    /// Each block is the `probability = <value>` line, the raw message, the
    /// token → probability mapping as JSON, then a blank line. Blocks appear
    /// in input order. Per-message segmentation failures are recorded and
    /// skipped; corpus-level I/O failures abort the evaluation.
    pub fn evaluate<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        corpus_path: P,
        log_path: Q,
    ) -> Result<CorpusEvaluation> {
        let corpus_path = corpus_path.as_ref();
        if !corpus_path.exists() {
            return Err(SpamError::NotFound(corpus_path.display().to_string()));
        }

        let reader = BufReader::new(File::open(corpus_path)?);
        let mut log = BufWriter::new(File::create(log_path.as_ref())?);

        let mut scores = Vec::new();
        let mut processed = 0u64;
        let mut skipped = 0u64;
        let mut unscoreable = 0u64;
        let mut tick = Instant::now();

        for line in reader.lines() {
            let line = line?;
            processed += 1;

            let probabilities = match self.classifier.token_probabilities(&line) {
                Ok(probabilities) => probabilities,
                Err(e) => {
                    skipped += 1;
                    warn!(
                        "Skipping line {} of {}: {}",
                        processed,
                        corpus_path.display(),
                        e
                    );
                    continue;
                }
            };

            match self.classifier.fuse(&probabilities) {
                ScoreOutcome::Scored(probability) => {
                    scores.push(probability);
                    write_log_block(&mut log, probability, &line, &probabilities)?;
                }
                ScoreOutcome::Unscoreable => {
                    unscoreable += 1;
                    writeln!(log, "probability = unscoreable\n{}\n{{}}\n", line)?;
                }
            }

            if processed % PROGRESS_INTERVAL == 0 {
                info!("{}: {:.3} s", processed, tick.elapsed().as_secs_f64());
                tick = Instant::now();
            }
        }

        log.flush()?;
        info!(
            "Evaluated {}: {} messages, {} skipped, {} unscoreable",
            corpus_path.display(),
            processed,
            skipped,
            unscoreable
        );

        Ok(CorpusEvaluation {
            scores,
            processed,
            skipped,
            unscoreable,
        })
    }
}

fn write_log_block(
    log: &mut BufWriter<File>,
    probability: f64,
    line: &str,
    probabilities: &std::collections::HashMap<String, f64>,
) -> Result<()> {
    // BTreeMap for a stable key order in the dump
    let ordered: BTreeMap<&str, f64> = probabilities.iter().map(|(t, p)| (t.as_str(), *p)).collect();
    writeln!(log, "probability = {}", probability)?;
    writeln!(log, "{}", line)?;
    writeln!(log, "{}", serde_json::to_string(&ordered)?)?;
    writeln!(log)?;
    Ok(())
}
