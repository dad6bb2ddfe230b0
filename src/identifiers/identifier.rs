/*! Identifier trait

All identifiers should implement [Identifier] to be useable in the language filter.
!*/
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A language guess and its probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identification {
    label: String,
    prob: f32,
}

impl Identification {
    pub fn new(label: String, prob: f32) -> Self {
        Self { label, prob }
    }

    /// Get a reference to the identification's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get a reference to the identification's prob.
    pub fn prob(&self) -> &f32 {
        &self.prob
    }
}

/// Outcome of a language detection.
///
/// Identifier errors and missing guesses both end up as [Detection::Unknown].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    Detected(String),
    Unknown,
}

impl Detection {
    /// `true` if the detected language is `code`.
    pub fn is(&self, code: &str) -> bool {
        matches!(self, Detection::Detected(label) if label == code)
    }
}

pub trait Identifier {
    /// returns the best language guess, if any.
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error>;

    /// Identifies `sentence`, folding failures into [Detection::Unknown].
    fn detect(&self, sentence: &str) -> Detection {
        match self.identify(sentence) {
            Ok(Some(id)) => Detection::Detected(id.label),
            Ok(None) => Detection::Unknown,
            Err(e) => {
                debug!("identification failed, treating as unknown: {:?}", e);
                Detection::Unknown
            }
        }
    }
}
