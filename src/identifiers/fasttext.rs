//! Fasttext identifier
use std::path::Path;

use fasttext::{FastText as FastTextLib, Prediction};
use log::debug;

use super::{Identification, Identifier};
use crate::error::Error;

const LABEL_PREFIX: &str = "__label__";

/// Clean the prediction label field from `__label__xx` into `xx`.
///
/// # Errors
/// Returns an error if the label does not start with `__label__`.
fn clean_prediction(prediction: &Prediction) -> Result<Identification, Error> {
    match prediction.label.strip_prefix(LABEL_PREFIX) {
        Some(label) => Ok(Identification::new(label.to_string(), prediction.prob)),
        None => Err(Error::FastText(format!(
            "unexpected label: {}",
            prediction.label
        ))),
    }
}

/// fasttext predicts on a single line and chokes on null chars.
fn prepare(sentence: &str) -> String {
    sentence
        .chars()
        .filter(|c| *c != char::from(0))
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}

/// Holds a [fasttext::FastText] instance and its prediction threshold.
pub struct FastText {
    predictor: FastTextLib,
    pub threshold: f32,
}

impl FastText {
    /// Default model path.
    pub const LID_PATH: &'static str = "lid.176.bin";

    /// Create a new fasttext classifier using `lid.176.bin` at `.`,
    /// with no threshold: the best guess is always returned.
    pub fn new_lid() -> Result<Self, Error> {
        Self::new(Path::new(Self::LID_PATH), 0.0)
    }

    /// Create a new fasttext classifier.
    ///
    /// filename has to be a path to a `bin` file.
    pub fn new(filename: &Path, threshold: f32) -> Result<Self, Error> {
        let filename = filename
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid filepath for lid: {:?}", filename)))?;

        debug!("loading fasttext model {}", filename);
        let mut predictor = FastTextLib::new();
        predictor.load_model(filename)?;
        Ok(Self {
            predictor,
            threshold,
        })
    }
}

impl Identifier for FastText {
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error> {
        let predictions = self.predictor.predict(&prepare(sentence), 1, self.threshold)?;
        match predictions.first() {
            Some(prediction) => clean_prediction(prediction).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use fasttext::Prediction;

    use super::{clean_prediction, prepare, FastText};
    use crate::identifiers::{Detection, Identifier};

    #[test]
    fn test_clean_prediction() {
        let p = Prediction {
            prob: 0.9,
            label: "__label__es".to_string(),
        };
        let id = clean_prediction(&p).unwrap();
        assert_eq!(id.label(), "es");
        assert_eq!(id.prob(), &0.9);
    }

    #[test]
    fn test_clean_prediction_invalid() {
        let p = Prediction {
            prob: 0.9,
            label: "es".to_string(),
        };
        assert!(clean_prediction(&p).is_err());
    }

    #[test]
    fn test_prepare() {
        assert_eq!(prepare("hola\nmundo\u{0}"), "hola mundo");
    }

    #[test]
    #[ignore = "needs lid.176.bin in the working directory"]
    fn test_es_en() {
        let classifier = FastText::new_lid().expect("could not instantiate a classifier");
        let english = "Amy normally hated Monday mornings, but this year was different. Kamal was in her art class and she liked Kamal.";
        let spanish = "Me llamo Pedro y hoy quiero hablar del parque que hay junto a mi casa.\nYo me divierto todos los días en el parque.";

        assert_eq!(classifier.detect(english), Detection::Detected("en".into()));
        assert_eq!(classifier.detect(spanish), Detection::Detected("es".into()));
    }
}
