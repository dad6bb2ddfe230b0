//! Strophes, before and after word splitting.
use log::debug;
use serde::{Deserialize, Serialize};

use crate::filtering::Filter;

/// Token standing for a line break inside a strophe.
pub const NEWLINE: &str = "\n";

/// Raw text strophes, as produced by [super::CleanCorpus::segment].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Strophes(Vec<String>);

impl Strophes {
    pub fn new(strophes: Vec<String>) -> Self {
        Self(strophes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Keeps strophes detected by `filter`, in order.
    pub fn filter<F>(self, filter: &F) -> Self
    where
        F: for<'a> Filter<&'a str>,
    {
        let before = self.0.len();
        let kept: Vec<String> = self
            .0
            .into_iter()
            .filter(|strophe| filter.detect(strophe.as_str()))
            .collect();
        debug!("filter kept {}/{} strophes", kept.len(), before);
        Self(kept)
    }

    /// Splits every strophe into words, keeping line breaks as [NEWLINE] tokens.
    pub fn into_words(self) -> WordStrophes {
        WordStrophes(self.0.iter().map(|s| split_words(s)).collect())
    }
}

/// Splits a strophe on single spaces after padding line breaks,
/// dropping blank pieces but keeping [NEWLINE] markers.
fn split_words(strophe: &str) -> Vec<String> {
    strophe
        .replace(NEWLINE, " \n ")
        .split(' ')
        .filter(|word| *word == NEWLINE || !word.trim().is_empty())
        .map(String::from)
        .collect()
}

/// Strophes as word sequences.
///
/// Every token is either [NEWLINE] or a non-whitespace word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordStrophes(Vec<Vec<String>>);

impl WordStrophes {
    pub fn new(strophes: Vec<Vec<String>>) -> Self {
        Self(strophes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<String>> {
        self.0.iter()
    }

    /// Total number of tokens.
    pub fn nb_tokens(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }
}

impl<'a> IntoIterator for &'a WordStrophes {
    type Item = &'a Vec<String>;
    type IntoIter = std::slice::Iter<'a, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Strophes, NEWLINE};
    use crate::filtering::Filter;

    #[test]
    fn words() {
        let s = Strophes::new(vec!["example text\n".to_string(), "another example".to_string()]);
        let words = s.into_words();
        let expected = vec![
            vec!["example", "text", "\n"],
            vec!["another", "example"],
        ];
        let got: Vec<Vec<&str>> = words
            .iter()
            .map(|s| s.iter().map(String::as_str).collect())
            .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn words_only_keep_newline_and_words() {
        let s = Strophes::new(vec!["  dale\nmami  \n\nque  ".to_string()]);
        let words = s.into_words();
        let strophe = words.iter().next().unwrap();
        assert_eq!(strophe, &vec!["dale", "\n", "mami", "\n", "\n", "que"]);
        assert!(strophe
            .iter()
            .all(|w| w == NEWLINE || !w.chars().any(char::is_whitespace)));
    }

    struct StartsWithA;
    impl Filter<&str> for StartsWithA {
        fn detect(&self, item: &str) -> bool {
            item.starts_with('a')
        }
    }

    #[test]
    fn filter_keeps_order() {
        let s = Strophes::new(vec!["ab".into(), "b".into(), "ac".into()]);
        let s = s.filter(&StartsWithA);
        assert_eq!(s.as_slice(), &["ab", "ac"]);
    }
}
