/*! Corpus transformers.

Transforms the whole corpus text before it gets split into strophes.

!*/

mod clean;
mod normalize;
mod transform;

pub use clean::Cleaner;
pub use normalize::Normalizer;
pub use transform::Transform;
