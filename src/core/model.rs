//! Word tally data model
//!
//! All keys held here are already normalized (lower-cased and trimmed). The
//! structures live for a single invocation.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::core::error::TallyError;

/// Normalized words excluded from counting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an already-normalized word; duplicates collapse
    pub fn insert(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Occurrence count per normalized word
///
/// Every stored count is at least 1 and no key is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCount {
    counts: HashMap<String, u64>,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`. Empty words are ignored.
    pub fn record(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

/// One row of the ranked listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub count: u64,
    pub word: String,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            count,
            word: word.into(),
        }
    }
}

/// Outcome of a stage that may find its input absent
#[derive(Debug)]
pub enum Load<T> {
    Loaded(T),
    Missing(TallyError),
}
