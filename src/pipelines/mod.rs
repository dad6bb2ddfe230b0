//! Pipelines.
//!
//! The preprocessing pipeline is implemented here, along with a light [pipeline::Pipeline] trait
//! and the [Preprocessed] type it produces.
pub mod pipeline;
mod preprocess;
mod preprocessed;

pub use pipeline::Pipeline;
pub use preprocess::Preprocess;
pub use preprocessed::{Preprocessed, Summary};
