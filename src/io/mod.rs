/*!
# IO utilities

Corpus reading, lyrics merging and saving/loading of preprocessed blobs.
!*/
mod merge;
pub mod reader;
pub mod writer;

pub use merge::merge_lyrics;
pub use reader::{read_blob, read_corpus};
pub use writer::write_blob;
