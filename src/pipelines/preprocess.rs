//! Lyrics preprocessing pipeline
//!
//! Turns a raw lyrics file into shuffled `(context, next word)` pairs.
//!
//! # Processing
//! 1. The corpus is lowercased and NFC-normalized.
//! 1. Annotations (`[...]`, `(...)`), digits and punctuation are removed, blank line runs are collapsed.
//! 1. The corpus is split into strophes on blank lines.
//! 1. Strophes not identified as the target language are discarded (optional).
//! 1. Strophes too short to hold a window are discarded.
//! 1. Strophes are split into words, rare words are ignored and the others indexed.
//! 1. Windows without ignored words become training pairs, which get shuffled.
use std::path::PathBuf;

use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use super::{Pipeline, Preprocessed};
use crate::{
    config::Config,
    dataset::TrainingSet,
    error::Error,
    filtering::{Language, Length},
    identifiers::Identifier,
    transformers::{Cleaner, Normalizer, Transform},
    vocab::{Tokenizer, Vocabulary},
};

pub struct Preprocess {
    src: PathBuf,
    config: Config,
    identifier: Option<Box<dyn Identifier>>,
}

impl Preprocess {
    pub fn new(src: PathBuf, config: Config) -> Self {
        debug!("preprocessing {:?} with {:?}", src, config);
        Self {
            src,
            config,
            identifier: None,
        }
    }

    /// Sets the identifier used by the language filter.
    pub fn with_identifier(mut self, identifier: Box<dyn Identifier>) -> Self {
        self.identifier = Some(identifier);
        self
    }

    /// Get a reference to the pipeline's config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the language identifier if the language filter is on.
    ///
    /// # Errors
    /// [Error::Config] if the filter is on but no identifier has been set.
    fn language_identifier(&self) -> Result<Option<&dyn Identifier>, Error> {
        match (self.config.language_filter, self.identifier.as_deref()) {
            (false, identifier) => {
                if identifier.is_some() {
                    warn!("language filter is off, identifier will not be used");
                }
                Ok(None)
            }
            (true, Some(identifier)) => Ok(Some(identifier)),
            (true, None) => Err(Error::Config(
                "language filter enabled without a language identifier".to_string(),
            )),
        }
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Pipeline<Preprocessed> for Preprocess {
    fn run(&self) -> Result<Preprocessed, Error> {
        self.config.validate()?;
        let identifier = self.language_identifier()?;
        let window_size = self.config.window_size;

        let corpus = Normalizer.from_path(&self.src)?;
        let document = Cleaner.transform_own(corpus);

        let strophes = document.segment();
        info!("{} strophes", strophes.len());

        let strophes = match identifier {
            Some(identifier) => {
                let target = self.config.target_language_code.clone();
                let strophes = strophes.filter(&Language::new(identifier, target));
                info!(
                    "{} strophes in {}",
                    strophes.len(),
                    self.config.target_language_code
                );
                strophes
            }
            None => strophes,
        };

        let strophes = strophes.filter(&Length::with_min_words(window_size));
        info!("{} strophes long enough", strophes.len());

        let strophes = strophes.into_words();
        let vocabulary = Vocabulary::from_strophes(&strophes, self.config.min_word_frequency);
        let tokenizer = Tokenizer::fit(&vocabulary);

        let training_set = TrainingSet::generate(&strophes, &vocabulary, window_size);
        if training_set.is_empty() {
            warn!("no training pair generated, check window size and minimum word frequency");
        }
        let training_set = training_set.shuffle(&mut self.rng());

        Ok(Preprocessed::new(
            self.config.clone(),
            document,
            strophes,
            vocabulary,
            tokenizer,
            training_set,
        ))
    }
}
