//! Spelling suggestion for dictionary misses.
//!
//! This module provides the edit-distance metric and the nearest-neighbour
//! search behind "Did you mean?" prompts when a dictionary lookup fails.

pub mod levenshtein;
pub mod suggest;

// Re-export commonly used types
pub use levenshtein::*;
pub use suggest::*;
