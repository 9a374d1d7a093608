//! CSS selector types, parsing and derivation.

mod parser;
mod types;

pub use types::*;
