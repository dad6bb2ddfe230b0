pub mod config;
pub mod corpus;
pub mod dataset;
pub mod error;
pub mod filtering;
pub mod identifiers;
pub mod io;
pub mod pipelines;
pub mod transformers;
pub mod vocab;
