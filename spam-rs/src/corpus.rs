//! Corpus utilities
//!
//! Joins raw data files into a single training or testing corpus. Pure file
//! concatenation, streamed line by line.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Result, SpamError};

/// Concatenate `sources` into `dest`, one message per line.
///
/// Sources are read in the given order; a missing source aborts the join.
/// Returns the number of lines written.
pub fn join_corpora<P: AsRef<Path>, Q: AsRef<Path>>(sources: &[P], dest: Q) -> Result<u64> {
    let mut writer = BufWriter::new(File::create(dest.as_ref())?);
    let mut total = 0u64;

    for source in sources {
        let source = source.as_ref();
        if !source.exists() {
            return Err(SpamError::NotFound(source.display().to_string()));
        }

        let reader = BufReader::new(File::open(source)?);
        let mut lines = 0u64;
        for line in reader.lines() {
            writeln!(writer, "{}", line?)?;
            lines += 1;
        }
        info!("Joined {} ({} messages)", source.display(), lines);
        total += lines;
    }

    writer.flush()?;
    Ok(total)
}
