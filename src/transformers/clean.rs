//! Removes annotations and noise from lyrics.
//!
//! Lyrics sites annotate songs with `[Coro: Artista]` or `(x2)` like tags,
//! which are removed along with digits and punctuation:
//!
//! ```text
//! [Intro]
//! Dale, mami (¡ey!)
//!
//!
//!
//! [Coro]
//! Hasta abajo...
//! ```
//!
//! becomes
//!
//! ```text
//!
//! Dale mami
//!
//! Hasta abajo
//! ```
//!
//! Rules are applied in order, bracket removal being first so that the punctuation rule
//! does not leave bracket contents behind. Brackets are matched non-greedily, without
//! nesting and without crossing line breaks.
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::Transform;
use crate::corpus::{CleanCorpus, Corpus, STROPHE_SEPARATOR};

lazy_static! {
    static ref SQUARE_BRACKETS: Regex = Regex::new(r"\[.*?\]").unwrap();
    static ref PARENTHESES: Regex = Regex::new(r"\(.*?\)").unwrap();
    static ref NOISE: Regex =
        Regex::new(r#"[\d!¡¿?\[\]()"*.\#$%\&+\-/;—<=>@^_`'|{}\~“”’:,]"#).unwrap();
    static ref BLANK_LINES: Regex = Regex::new(r"\n\n+").unwrap();
}

/// Strips bracketed annotations, digits and punctuation, then collapses blank line runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cleaner;

impl Transform<Corpus, CleanCorpus> for Cleaner {
    fn transform_own(&self, corpus: Corpus) -> CleanCorpus {
        let text = corpus.into_text();
        let before = text.len();

        let text = SQUARE_BRACKETS.replace_all(&text, "");
        let text = PARENTHESES.replace_all(&text, "");
        let text = NOISE.replace_all(&text, "");
        let text = BLANK_LINES.replace_all(&text, STROPHE_SEPARATOR);

        debug!("cleaning: {} -> {} bytes", before, text.len());
        CleanCorpus::new(text.into_owned())
    }
}
