//! Pseudoword Engine — pronounceable pseudo-words from corpus statistics.
//!
//! Models the phonotactics of a text corpus (letter-pair weights, syllable
//! counts, onset/coda clusters) and samples new words from that model,
//! syllable by syllable.

pub mod core;
pub mod schema;

pub use crate::core::pipeline::{generate_words, PipelineError, WordGenerator};
