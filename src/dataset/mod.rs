/*! Training pairs

Builds `(context, next word)` pairs out of tokenized strophes, and shuffles them.
!*/
mod shuffle;
mod window;

pub use window::{is_valid, TrainingSet};
