//! Ranking and printing
//!
//! Entries are ordered by count, highest first. Equal counts fall back to the
//! word in ascending order so repeated runs print the same listing.

use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::{debug, debug_span, info};

use crate::core::error::TallyError;
use crate::core::model::{RankedEntry, WordCount};
use crate::core::options::{TallyOptions, DEFAULT_MAX_WORDS, MAX_WORDS_ARG};
use crate::core::render::render_entries;

/// Parse the row limit, falling back to [`DEFAULT_MAX_WORDS`] when absent
pub fn resolve_limit(raw: Option<&str>) -> Result<usize, TallyError> {
    match raw {
        Some(value) => value
            .parse::<usize>()
            .map_err(|source| TallyError::MalformedLimit {
                value: value.to_string(),
                source,
            }),
        None => {
            info!(
                "Command line argument {} missing. Using default : {}",
                MAX_WORDS_ARG, DEFAULT_MAX_WORDS
            );
            Ok(DEFAULT_MAX_WORDS)
        }
    }
}

/// The `limit` most frequent entries of `counts`
pub fn rank(counts: &WordCount, limit: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = counts
        .iter()
        .map(|(word, count)| RankedEntry::new(word, count))
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    entries.truncate(limit);
    entries
}

/// Rank `counts` and write the listing to `writer`. Returns the number of rows.
pub fn print_ranking<W: Write>(
    writer: W,
    counts: &WordCount,
    options: &TallyOptions,
) -> Result<usize> {
    let _span = debug_span!("pipeline_stage", stage = "rank").entered();

    let limit = resolve_limit(options.max_words.as_deref())?;
    let entries = rank(counts, limit);

    match render_entries(writer, &entries, options.format) {
        Ok(()) => {}
        // A closed pipe (e.g. `| head`) ends the listing early.
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
        Err(err) => return Err(err).context("Failed to write ranking"),
    }

    debug!(rows = entries.len(), limit, "printed ranking");
    Ok(entries.len())
}
