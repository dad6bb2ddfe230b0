//! Lowercasing and Unicode canonical composition.
use std::path::Path;

use log::debug;
use unicode_normalization::UnicodeNormalization;

use super::Transform;
use crate::{corpus::Corpus, error::Error, io::read_corpus};

/// Lowercases text, then composes it to NFC.
#[derive(Debug, Default, Clone, Copy)]
pub struct Normalizer;

impl Normalizer {
    /// Reads `src` and normalizes its content.
    ///
    /// # Errors
    /// Fails with [Error::Io] if `src` is unreadable.
    pub fn from_path(&self, src: &Path) -> Result<Corpus, Error> {
        let text = read_corpus(src)?;
        Ok(self.transform_own(text))
    }
}

impl Transform<String, Corpus> for Normalizer {
    fn transform_own(&self, text: String) -> Corpus {
        let normalized: String = text.to_lowercase().nfc().collect();
        debug!("normalized corpus: {} chars", normalized.chars().count());
        Corpus::new(normalized)
    }
}
