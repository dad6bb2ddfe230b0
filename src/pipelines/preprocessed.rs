//! Output of the preprocessing pipeline.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    corpus::{CleanCorpus, WordStrophes},
    dataset::TrainingSet,
    error::Error,
    io::{read_blob, write_blob},
    vocab::{Tokenizer, Vocabulary},
};

/// Full pipeline state, as handed over to training.
///
/// Trainers only need [Preprocessed::total_words], [Preprocessed::tokenizer] and the
/// pairs of [Preprocessed::training_set]; the rest is kept for inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preprocessed {
    config: Config,
    document: CleanCorpus,
    strophes: WordStrophes,
    vocabulary: Vocabulary,
    total_words: usize,
    tokenizer: Tokenizer,
    #[serde(flatten)]
    training_set: TrainingSet,
}

/// Sizes of a [Preprocessed], for quick inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary<'a> {
    pub config: &'a Config,
    pub nb_strophes: usize,
    pub nb_tokens: usize,
    pub nb_kept_words: usize,
    pub nb_ignored_words: usize,
    pub total_words: usize,
    pub nb_pairs: usize,
}

impl Preprocessed {
    pub fn new(
        config: Config,
        document: CleanCorpus,
        strophes: WordStrophes,
        vocabulary: Vocabulary,
        tokenizer: Tokenizer,
        training_set: TrainingSet,
    ) -> Self {
        let total_words = vocabulary.total_words();
        Self {
            config,
            document,
            strophes,
            vocabulary,
            total_words,
            tokenizer,
            training_set,
        }
    }

    /// Writes a compressed blob at `dst`.
    ///
    /// # Errors
    /// Fails on unwritable paths.
    pub fn save(&self, dst: &Path) -> Result<(), Error> {
        write_blob(self, dst)
    }

    /// Loads a blob written by [Preprocessed::save].
    ///
    /// # Errors
    /// Fails on missing, truncated or invalid blobs.
    pub fn load(src: &Path) -> Result<Self, Error> {
        read_blob(src)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn document(&self) -> &CleanCorpus {
        &self.document
    }

    pub fn strophes(&self) -> &WordStrophes {
        &self.strophes
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Size of the index space, unknown/padding index included.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn training_set(&self) -> &TrainingSet {
        &self.training_set
    }

    pub fn summary(&self) -> Summary<'_> {
        Summary {
            config: &self.config,
            nb_strophes: self.strophes.len(),
            nb_tokens: self.strophes.nb_tokens(),
            nb_kept_words: self.vocabulary.kept().len(),
            nb_ignored_words: self.vocabulary.ignored().len(),
            total_words: self.total_words,
            nb_pairs: self.training_set.len(),
        }
    }
}
