//! Word frequencies and kept/ignored partition.
use std::collections::{BTreeSet, HashMap};

use log::info;
use serde::{Deserialize, Serialize};

use crate::corpus::WordStrophes;

/// Words found in the strophes, split between kept and ignored (rare) ones.
///
/// `kept` and `ignored` are disjoint and together hold every distinct token,
/// line break markers included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// token counts, in first-seen order.
    frequencies: Vec<(String, usize)>,
    kept: BTreeSet<String>,
    ignored: BTreeSet<String>,
    min_word_frequency: usize,
}

impl Vocabulary {
    /// Counts tokens and ignores those seen less than `min_word_frequency` times.
    pub fn from_strophes(strophes: &WordStrophes, min_word_frequency: usize) -> Self {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut frequencies: Vec<(String, usize)> = Vec::new();

        for word in strophes.iter().flatten() {
            let pos = *positions.entry(word.as_str()).or_insert_with(|| {
                frequencies.push((word.clone(), 0));
                frequencies.len() - 1
            });
            frequencies[pos].1 += 1;
        }

        let (kept, ignored): (Vec<_>, Vec<_>) = frequencies
            .iter()
            .partition(|(_, count)| *count >= min_word_frequency);
        let kept: BTreeSet<String> = kept.into_iter().map(|(w, _)| w.clone()).collect();
        let ignored: BTreeSet<String> = ignored.into_iter().map(|(w, _)| w.clone()).collect();

        info!(
            "vocabulary: {} distinct words, {} kept, {} ignored (min frequency {})",
            frequencies.len(),
            kept.len(),
            ignored.len(),
            min_word_frequency
        );

        Self {
            frequencies,
            kept,
            ignored,
            min_word_frequency,
        }
    }

    /// Words seen at least [Vocabulary::min_word_frequency] times.
    pub fn kept(&self) -> &BTreeSet<String> {
        &self.kept
    }

    /// Words seen less than [Vocabulary::min_word_frequency] times.
    pub fn ignored(&self) -> &BTreeSet<String> {
        &self.ignored
    }

    pub fn is_ignored(&self, word: &str) -> bool {
        self.ignored.contains(word)
    }

    /// Token counts in first-seen order.
    pub fn frequencies(&self) -> &[(String, usize)] {
        &self.frequencies
    }

    pub fn min_word_frequency(&self) -> usize {
        self.min_word_frequency
    }

    /// Number of kept words, plus one for the reserved unknown/padding index.
    pub fn total_words(&self) -> usize {
        self.kept.len() + 1
    }
}
