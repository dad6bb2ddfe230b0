//! Preprocessing parameters.
//!
//! A [Config] is built from the command line and is embedded in
//! the serialized output, so that a trainer knows which window size the pairs were built with.
use log::debug;
use oxilangtag::LanguageTag;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default context length.
pub const WINDOW_SIZE: usize = 10;
/// Default minimum number of occurrences for a word to be kept in the vocabulary.
pub const MIN_WORD_FREQUENCY: usize = 3;
/// Default language kept by the language filter.
pub const TARGET_LANGUAGE: &str = "es";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of words in a training context.
    pub window_size: usize,
    /// Words seen less than this many times are ignored.
    pub min_word_frequency: usize,
    /// Language code the language filter keeps (e.g. `es`).
    pub target_language_code: String,
    /// Enables the language filter.
    pub language_filter: bool,
    /// Seed of the shuffler. `None` uses OS entropy.
    pub seed: Option<u64>,
}

impl Config {
    /// Checks that parameters are usable.
    ///
    /// # Errors
    /// [Error::Config] on zero window size or frequency,
    /// [Error::LanguageTag] if the target code is not a valid BCP 47 tag.
    pub fn validate(&self) -> Result<(), Error> {
        if self.window_size == 0 {
            return Err(Error::Config("window_size must be greater than zero".into()));
        }
        if self.min_word_frequency == 0 {
            return Err(Error::Config(
                "min_word_frequency must be greater than zero".into(),
            ));
        }

        let tag = LanguageTag::parse(self.target_language_code.as_str())?;
        debug!("target language tag: {tag:?}");
        if tag.as_str() != tag.primary_language() {
            return Err(Error::Config(format!(
                "target language code should be a bare language subtag, got {}",
                self.target_language_code
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            min_word_frequency: MIN_WORD_FREQUENCY,
            target_language_code: TARGET_LANGUAGE.to_string(),
            language_filter: true,
            seed: None,
        }
    }
}
