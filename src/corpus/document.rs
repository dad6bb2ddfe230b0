//! Whole-corpus document states.
use serde::{Deserialize, Serialize};

use super::Strophes;

/// Separator between two strophes: exactly one blank line.
pub const STROPHE_SEPARATOR: &str = "\n\n";

/// Normalized (lowercased, NFC) corpus text.
///
/// Only a [crate::transformers::Normalizer] builds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus(String);

impl Corpus {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn into_text(self) -> String {
        self.0
    }
}

/// Corpus text once cleaned, where paragraph breaks are exactly one blank line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CleanCorpus(String);

impl CleanCorpus {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// Splits the text on [STROPHE_SEPARATOR].
    ///
    /// This is a plain separator split: leading/trailing separators yield empty strophes,
    /// which are left for the length filter to discard.
    pub fn segment(&self) -> Strophes {
        Strophes::new(self.0.split(STROPHE_SEPARATOR).map(String::from).collect())
    }
}
