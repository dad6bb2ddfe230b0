/*! Vocabulary building

Word counting, rare word pruning ([Vocabulary]) and word indexing ([Tokenizer]).
!*/
mod tokenizer;
mod vocabulary;

pub use tokenizer::{Tokenizer, UNKNOWN_INDEX};
pub use vocabulary::Vocabulary;
