//! Context/target pair extraction.
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    corpus::WordStrophes,
    vocab::{Tokenizer, Vocabulary},
};

/// Parallel contexts (`x`) and next words (`y`).
///
/// `x[i]` is the context immediately preceding `y[i]` in a single strophe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSet {
    pub(crate) x: Vec<Vec<String>>,
    pub(crate) y: Vec<String>,
}

/// A window is valid if none of its words is ignored.
pub fn is_valid<S: AsRef<str>>(window: &[S], vocabulary: &Vocabulary) -> bool {
    !window.iter().any(|word| vocabulary.is_ignored(word.as_ref()))
}

impl TrainingSet {
    /// Slides a `window_size + 1` window over each strophe.
    ///
    /// Windows holding an ignored word are skipped, and windows never span two strophes.
    /// Strophes of `window_size` words or less yield nothing.
    pub fn generate(strophes: &WordStrophes, vocabulary: &Vocabulary, window_size: usize) -> Self {
        let mut x = Vec::new();
        let mut y = Vec::new();
        let mut nb_windows = 0;

        for strophe in strophes {
            for window in strophe.windows(window_size + 1) {
                nb_windows += 1;
                if !is_valid(window, vocabulary) {
                    continue;
                }
                let Some((target, context)) = window.split_last() else {
                    continue;
                };
                x.push(context.to_vec());
                y.push(target.clone());
            }
        }

        info!(
            "generated {} pairs out of {} windows (window size {})",
            x.len(),
            nb_windows,
            window_size
        );
        Self { x, y }
    }

    /// Builds a set from already aligned contexts and targets.
    ///
    /// Returns `None` if lengths differ.
    pub fn from_pairs(x: Vec<Vec<String>>, y: Vec<String>) -> Option<Self> {
        (x.len() == y.len()).then_some(Self { x, y })
    }

    pub fn x(&self) -> &[Vec<String>] {
        &self.x
    }

    pub fn y(&self) -> &[String] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Iterates over `(context, target)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&[String], &str)> {
        self.x
            .iter()
            .map(Vec::as_slice)
            .zip(self.y.iter().map(String::as_str))
    }

    /// Encodes contexts and targets to tokenizer indices.
    pub fn encode(&self, tokenizer: &Tokenizer) -> (Vec<Vec<u32>>, Vec<u32>) {
        let x = self.x.iter().map(|ctx| tokenizer.encode(ctx.as_slice())).collect();
        let y = tokenizer.encode(self.y.as_slice());
        (x, y)
    }
}
