//! Word store and lookup service.
//!
//! The corpus is loaded once from the app's `dictionary.json`, never mutated
//! afterwards, and shared read-only with every lookup. Misses are handed to
//! the [`SuggestionEngine`](crate::spelling::SuggestionEngine) for a
//! "Did you mean?" candidate.

pub mod corpus;
pub mod entry;
pub mod service;
pub mod wordset;

pub use corpus::*;
pub use entry::*;
pub use service::*;
pub use wordset::{ConversionStats, WordsetConverter};
