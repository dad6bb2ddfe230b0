/*! Filtering utilities

Filters operate on strophe level, and implement [filter::Filter].

- [strophe::Length] keeps strophes that are long enough to hold a training window,
- [strophe::Language] keeps strophes written in the target language.
! */
mod filter;
mod strophe;

pub use filter::Filter;
pub use strophe::{Language, Length};
