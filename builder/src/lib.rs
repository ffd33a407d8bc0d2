pub mod build;
pub mod enrich;
pub mod error;
pub mod output;
pub mod scramble;

#[cfg(test)]
pub mod tests;

pub use crate::build::{build, BuildReport, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use crate::enrich::{enrich_archive, EnrichedPuzzle, EnrichedWord};
pub use crate::error::BuildError;
pub use crate::scramble::scramble_word;
