//! # Lexis
//!
//! Dictionary lookup with "did you mean?" suggestions.
//!
//! ## Features
//!
//! - Levenshtein edit distance over characters or grapheme clusters
//! - Single nearest-neighbour spelling suggestion with length pruning
//!   and a distance-1 early exit
//! - Loading of the compact `dictionary.json` word store
//! - Conversion of Wordset dictionary data into that store
//! - A small CLI for lookups, suggestions and conversion

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::dictionary::{Corpus, DictionaryEntry, DictionaryService, LookupOutcome};
    pub use crate::error::{LexisError, Result};
    pub use crate::spelling::{
        EditDistance, Levenshtein, SuggestionConfig, SuggestionEngine, TextUnit,
        levenshtein_distance,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
