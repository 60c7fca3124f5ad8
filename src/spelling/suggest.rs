//! Nearest-neighbour spelling suggestion.
//!
//! Given a word that missed an exact dictionary lookup, the engine scans the
//! known words once and returns the single closest one by edit distance, or
//! nothing when no word is close enough to be a plausible typo.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::dictionary::Corpus;
use crate::error::{LexisError, Result};
use crate::spelling::levenshtein::{EditDistance, Levenshtein, TextUnit};

/// How to choose between candidates at the same minimum distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The lexicographically smallest word wins. Reproducible for any corpus order.
    #[default]
    Lexicographic,
    /// The first candidate in scan order wins.
    FirstSeen,
}

/// Configuration for spelling suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Candidates whose length differs from the query by more than this are skipped
    /// without computing a distance.
    pub max_length_diff: usize,
    /// Upper bound on the accepted distance, whatever the query length.
    pub max_distance_cap: usize,
    /// Stop scanning as soon as the best candidate is at most this far away.
    /// `None` always scans the whole corpus.
    pub early_exit_distance: Option<usize>,
    /// Tie-break between candidates at the same minimum distance.
    pub tie_break: TieBreak,
    /// Unit used by the default Levenshtein metric.
    pub unit: TextUnit,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_length_diff: 3,
            max_distance_cap: 3,
            early_exit_distance: Some(1),
            tie_break: TieBreak::Lexicographic,
            unit: TextUnit::Char,
        }
    }
}

impl SuggestionConfig {
    /// Check that the parameters can work together.
    pub fn validate(&self) -> Result<()> {
        if let Some(early_exit) = self.early_exit_distance
            && early_exit > self.max_distance_cap
        {
            return Err(LexisError::invalid_config(format!(
                "early_exit_distance ({early_exit}) exceeds max_distance_cap ({})",
                self.max_distance_cap
            )));
        }
        Ok(())
    }

    /// Accepted distance for a query of `query_len` units: `min(cap, len / 2 + 1)`.
    ///
    /// Short words get a tighter bound, since three edits on a four letter word
    /// usually make a different word rather than a typo.
    pub fn max_distance_for(&self, query_len: usize) -> usize {
        self.max_distance_cap.min(query_len / 2 + 1)
    }
}

/// A scored candidate. Kept internal; callers only ever see the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) word: String,
    pub(crate) distance: usize,
}

/// Main spelling suggestion engine.
///
/// The engine owns no words. Each call receives a read-only view of the corpus,
/// so one engine can serve many callers and many corpora.
#[derive(Debug, Clone)]
pub struct SuggestionEngine<D = Levenshtein> {
    metric: D,
    config: SuggestionConfig,
}

impl SuggestionEngine<Levenshtein> {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SuggestionConfig::default())
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: SuggestionConfig) -> Self {
        SuggestionEngine {
            metric: Levenshtein::with_unit(config.unit),
            config,
        }
    }
}

impl Default for SuggestionEngine<Levenshtein> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: EditDistance> SuggestionEngine<D> {
    /// Create an engine around a custom metric.
    ///
    /// Word lengths are measured in the metric's own unit; `config.unit` is ignored.
    pub fn with_metric(metric: D, config: SuggestionConfig) -> Self {
        SuggestionEngine { metric, config }
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    pub fn metric(&self) -> &D {
        &self.metric
    }

    /// Accepted distance for a query of `query_len` units.
    pub fn max_distance_for(&self, query_len: usize) -> usize {
        self.config.max_distance_for(query_len)
    }

    /// Suggest the closest word in `corpus_words` to `query`.
    ///
    /// `query` is expected to be trimmed and lowercased already. Words equal to
    /// the query are not excluded: they match at distance 0 and are returned.
    pub fn suggest<I, S>(&self, query: &str, corpus_words: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.best_candidate(query, corpus_words)
            .map(|candidate| candidate.word)
    }

    /// Suggest the closest word of a loaded corpus.
    ///
    /// Corpus words are scanned in lexicographic order, so the result is
    /// reproducible even when the scan stops early.
    pub fn suggest_in(&self, query: &str, corpus: &Corpus) -> Option<String> {
        self.suggest(query, corpus.words())
    }

    pub(crate) fn best_candidate<I, S>(&self, query: &str, corpus_words: I) -> Option<Candidate>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unit = self.metric.unit();
        let query_len = unit.len(query);
        let max_distance = self.max_distance_for(query_len);

        let mut best: Option<Candidate> = None;
        let mut seen = 0usize;
        let mut compared = 0usize;

        for word in corpus_words {
            let word = word.as_ref();
            seen += 1;

            if unit.len(word).abs_diff(query_len) > self.config.max_length_diff {
                continue;
            }

            compared += 1;
            let distance = self.metric.distance(query, word);
            if distance > max_distance {
                continue;
            }

            let improves = match &best {
                None => true,
                Some(current) => {
                    distance < current.distance
                        || (distance == current.distance
                            && self.config.tie_break == TieBreak::Lexicographic
                            && word < current.word.as_str())
                }
            };
            if !improves {
                continue;
            }

            trace!("new best for {query:?}: {word:?} at distance {distance}");
            best = Some(Candidate {
                word: word.to_string(),
                distance,
            });

            if self
                .config
                .early_exit_distance
                .is_some_and(|early_exit| distance <= early_exit)
            {
                debug!(
                    "suggest {query:?}: early exit on {word:?} after {seen} candidates ({compared} compared)"
                );
                return best;
            }
        }

        debug!(
            "suggest {query:?}: scanned {seen} candidates ({compared} compared), max distance {max_distance}, best {:?}",
            best.as_ref().map(|c| c.word.as_str())
        );
        best
    }
}
