/*! Corpus states

Each preprocessing stage consumes one of these types and produces the next one,
so that stages can't be run out of order:

[String] → [Corpus] → [CleanCorpus] → [Strophes] → [WordStrophes]
!*/
mod document;
mod strophes;

pub use document::{CleanCorpus, Corpus, STROPHE_SEPARATOR};
pub use strophes::{Strophes, WordStrophes, NEWLINE};
