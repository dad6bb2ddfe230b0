//! Word ↔ index mapping.
use std::collections::HashMap;

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use super::Vocabulary;

/// Index reserved for unknown words and padding.
pub const UNKNOWN_INDEX: u32 = 0;

/// Maps kept words to indices `1..=len`.
///
/// Indices are given by descending frequency, ties broken by first-seen order.
/// Ignored words are never indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TokenizerSer", into = "TokenizerSer")]
pub struct Tokenizer {
    word_index: HashMap<String, u32>,
    index_word: Vec<String>,
}

/// Only the ordered word list is stored, `word_index` is rebuilt on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenizerSer {
    index_word: Vec<String>,
}

impl From<Tokenizer> for TokenizerSer {
    fn from(t: Tokenizer) -> Self {
        Self {
            index_word: t.index_word,
        }
    }
}

impl From<TokenizerSer> for Tokenizer {
    fn from(t: TokenizerSer) -> Self {
        Self::from_words(t.index_word)
    }
}

impl Tokenizer {
    /// Builds the index from the kept words of `vocabulary`.
    pub fn fit(vocabulary: &Vocabulary) -> Self {
        let words: Vec<String> = vocabulary
            .frequencies()
            .iter()
            .filter(|(word, _)| vocabulary.kept().contains(word))
            // stable sort: equal counts keep their first-seen order
            .sorted_by_key(|(_, count)| std::cmp::Reverse(*count))
            .map(|(word, _)| word.clone())
            .collect();

        debug!("tokenizer fitted on {} words", words.len());
        Self::from_words(words)
    }

    /// `words[i]` gets index `i + 1`.
    fn from_words(index_word: Vec<String>) -> Self {
        let word_index = index_word
            .iter()
            .enumerate()
            .map(|(idx, word)| (word.clone(), idx as u32 + 1))
            .collect();
        Self {
            word_index,
            index_word,
        }
    }

    /// Number of indexed words.
    pub fn len(&self) -> usize {
        self.index_word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_word.is_empty()
    }

    pub fn index_of(&self, word: &str) -> Option<u32> {
        self.word_index.get(word).copied()
    }

    /// Returns the word at `index`, `None` for [UNKNOWN_INDEX] and out of range indices.
    pub fn word_of(&self, index: u32) -> Option<&str> {
        let idx = (index as usize).checked_sub(1)?;
        self.index_word.get(idx).map(String::as_str)
    }

    /// Maps words to their indices, unknown words to [UNKNOWN_INDEX].
    pub fn encode<S: AsRef<str>>(&self, words: &[S]) -> Vec<u32> {
        words
            .iter()
            .map(|w| self.index_of(w.as_ref()).unwrap_or(UNKNOWN_INDEX))
            .collect()
    }

    /// Maps indices back to words, skipping [UNKNOWN_INDEX] and unknown indices.
    pub fn decode(&self, indices: &[u32]) -> Vec<&str> {
        indices.iter().filter_map(|i| self.word_of(*i)).collect()
    }

    /// Word → index mapping.
    pub fn word_index(&self) -> &HashMap<String, u32> {
        &self.word_index
    }
}

#[cfg(test)]
mod tests {
    use super::{Tokenizer, UNKNOWN_INDEX};
    use crate::{corpus::Strophes, vocab::Vocabulary};

    fn tokenizer() -> (Vocabulary, Tokenizer) {
        let strophes = Strophes::new(vec![
            "b a a c\n".to_string(),
            "c a rare d d".to_string(),
            "b".to_string(),
        ]);
        let v = Vocabulary::from_strophes(&strophes.into_words(), 2);
        let t = Tokenizer::fit(&v);
        (v, t)
    }

    #[test]
    fn indices_by_frequency_then_first_seen() {
        let (_, t) = tokenizer();
        // a:3, then b, c, d:2 in first-seen order; "\n" and "rare" are ignored
        assert_eq!(t.index_of("a"), Some(1));
        assert_eq!(t.index_of("b"), Some(2));
        assert_eq!(t.index_of("c"), Some(3));
        assert_eq!(t.index_of("d"), Some(4));
        assert_eq!(t.len(), 4);
        assert_eq!(t.word_index().len(), 4);
        assert_eq!(t.word_index().get("a"), Some(&1));
    }

    #[test]
    fn ignored_words_are_not_indexed() {
        let (v, t) = tokenizer();
        for word in v.ignored() {
            assert_eq!(t.index_of(word), None);
        }
        assert_eq!(t.len() + 1, v.total_words());
    }

    #[test]
    fn bijection() {
        let (v, t) = tokenizer();
        for word in v.kept() {
            let idx = t.index_of(word).unwrap();
            assert!(idx >= 1);
            assert_eq!(t.word_of(idx), Some(word.as_str()));
        }
        assert_eq!(t.word_of(UNKNOWN_INDEX), None);
        assert_eq!(t.word_of(5), None);
    }

    #[test]
    fn encode_decode() {
        let (_, t) = tokenizer();
        let encoded = t.encode(&["d", "rare", "a"]);
        assert_eq!(encoded, vec![4, UNKNOWN_INDEX, 1]);
        assert_eq!(t.decode(&encoded), vec!["d", "a"]);
    }

    #[test]
    fn serde_rebuilds_index() {
        let (_, t) = tokenizer();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"index_word":["a","b","c","d"]}"#);
        let t2: Tokenizer = serde_json::from_str(&json).unwrap();
        assert_eq!(t, t2);
    }
}
