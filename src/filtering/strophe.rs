//! strophe-level filtering
use super::Filter;
use crate::identifiers::Identifier;

/// Coarse length filter.
/// Returns `false` if splitting the strophe on single spaces
/// gives less than [Length::min_words] pieces.
///
/// Newlines do not split and empty pieces count, so this only approximates the number of
/// words: a strophe that passes may still be too short once split into words, and the other
/// way around.
pub struct Length {
    min_words: usize,
}

impl Length {
    /// specify a minimum number of words
    pub fn with_min_words(min_words: usize) -> Self {
        Self { min_words }
    }

    /// Get a reference to the length's min words.
    pub fn min_words(&self) -> &usize {
        &self.min_words
    }
}

impl Filter<&str> for Length {
    fn detect(&self, strophe: &str) -> bool {
        strophe.split(' ').count() >= self.min_words
    }
}

/// Keeps strophes identified as [Language::target].
///
/// Strophes that can't be identified are discarded.
pub struct Language<'a> {
    identifier: &'a dyn Identifier,
    target: String,
}

impl<'a> Language<'a> {
    pub fn new(identifier: &'a dyn Identifier, target: String) -> Self {
        Self { identifier, target }
    }

    /// Get a reference to the target language code.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Filter<&str> for Language<'_> {
    fn detect(&self, strophe: &str) -> bool {
        self.identifier.detect(strophe).is(&self.target)
    }
}
