//! Levenshtein distance calculation for spelling suggestion.

use std::cmp::min;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// The unit a string is split into before distances are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextUnit {
    /// Unicode scalar values (`char`).
    #[default]
    Char,
    /// Extended grapheme clusters, so "e" followed by a combining accent is one unit.
    Grapheme,
}

impl TextUnit {
    /// Length of `s` counted in this unit.
    pub fn len(self, s: &str) -> usize {
        match self {
            TextUnit::Char => s.chars().count(),
            TextUnit::Grapheme => s.graphemes(true).count(),
        }
    }

    /// Edit distance between `a` and `b` counted in this unit.
    pub fn distance(self, a: &str, b: &str) -> usize {
        match self {
            TextUnit::Char => levenshtein_distance(a, b),
            TextUnit::Grapheme => grapheme_distance(a, b),
        }
    }
}

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
///
/// Characters are compared as whole Unicode scalar values, never as bytes.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    distance_over(&a_chars, &b_chars)
}

/// Calculate the Levenshtein distance counting extended grapheme clusters as units.
pub fn grapheme_distance(a: &str, b: &str) -> usize {
    let a_units: Vec<&str> = a.graphemes(true).collect();
    let b_units: Vec<&str> = b.graphemes(true).collect();
    distance_over(&a_units, &b_units)
}

/// Two-row dynamic programme over arbitrary comparable units.
///
/// Only the previous and current rows (each `b.len() + 1` long) are kept alive.
fn distance_over<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let n = b.len();
    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for (i, a_unit) in a.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, b_unit) in b.iter().enumerate() {
            let cost = if a_unit == b_unit { 0 } else { 1 };

            curr_row[j + 1] = min(
                min(
                    curr_row[j] + 1,     // insertion
                    prev_row[j + 1] + 1, // deletion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// A string metric the suggestion engine can rank candidates with.
///
/// Implementations must be pure: the same pair always yields the same distance.
pub trait EditDistance {
    /// Distance between `a` and `b`.
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Unit used to measure word lengths for pruning.
    fn unit(&self) -> TextUnit {
        TextUnit::Char
    }
}

/// Plain Levenshtein distance in the configured unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein {
    unit: TextUnit,
}

impl Levenshtein {
    /// Create a metric over Unicode scalar values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a metric over the given unit.
    pub fn with_unit(unit: TextUnit) -> Self {
        Levenshtein { unit }
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        self.unit.distance(a, b)
    }

    fn unit(&self) -> TextUnit {
        self.unit
    }
}

impl<D: EditDistance + ?Sized> EditDistance for &D {
    fn distance(&self, a: &str, b: &str) -> usize {
        (**self).distance(a, b)
    }

    fn unit(&self) -> TextUnit {
        (**self).unit()
    }
}

/// Wraps a metric and counts how many distances were actually computed.
///
/// Used to observe pruning: candidates skipped on length never reach the metric.
#[derive(Debug, Default)]
pub struct CountingDistance<D> {
    inner: D,
    calls: AtomicUsize,
}

impl<D: EditDistance> CountingDistance<D> {
    pub fn new(inner: D) -> Self {
        CountingDistance {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `distance` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Reset the call counter to zero.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }
}

impl<D: EditDistance> EditDistance for CountingDistance<D> {
    fn distance(&self, a: &str, b: &str) -> usize {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.distance(a, b)
    }

    fn unit(&self) -> TextUnit {
        self.inner.unit()
    }
}
