//! Exact lookup with a suggestion fallback.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dictionary::corpus::{Corpus, normalize_word};
use crate::dictionary::entry::DictionaryEntry;
use crate::error::{LexisError, Result};
use crate::spelling::levenshtein::{EditDistance, Levenshtein};
use crate::spelling::suggest::SuggestionEngine;

/// Outcome of [`DictionaryService::lookup_or_suggest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// The word is in the dictionary.
    Found { entry: DictionaryEntry },
    /// The word is unknown, but a close known word exists.
    Suggestion { query: String, suggestion: String },
    /// The word is unknown and nothing is close enough.
    NotFound { query: String },
}

impl LookupOutcome {
    pub fn entry(&self) -> Option<&DictionaryEntry> {
        match self {
            LookupOutcome::Found { entry } => Some(entry),
            _ => None,
        }
    }

    pub fn suggestion(&self) -> Option<&str> {
        match self {
            LookupOutcome::Suggestion { suggestion, .. } => Some(suggestion),
            _ => None,
        }
    }
}

/// Dictionary lookups over a shared, read-only corpus.
///
/// Cloning is cheap; clones share the same corpus.
#[derive(Debug, Clone)]
pub struct DictionaryService<D = Levenshtein> {
    corpus: Arc<Corpus>,
    engine: SuggestionEngine<D>,
}

impl DictionaryService<Levenshtein> {
    /// Create a service with the default suggestion engine.
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self::with_engine(corpus, SuggestionEngine::new())
    }
}

impl<D: EditDistance> DictionaryService<D> {
    pub fn with_engine(corpus: Arc<Corpus>, engine: SuggestionEngine<D>) -> Self {
        DictionaryService { corpus, engine }
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    pub fn engine(&self) -> &SuggestionEngine<D> {
        &self.engine
    }

    /// Look up a word exactly (case-insensitive, surrounding whitespace ignored).
    pub fn lookup(&self, word: &str) -> Result<DictionaryEntry> {
        let key = normalize_word(word).ok_or_else(|| LexisError::word_not_found(word))?;
        let records = self
            .corpus
            .get(&key)
            .ok_or_else(|| LexisError::word_not_found(key.as_str()))?;
        Ok(DictionaryEntry::from_records(&key, records))
    }

    /// Closest known word for a word that is not in the dictionary.
    ///
    /// Returns `None` for blank input and for words the dictionary already knows.
    pub fn suggest(&self, word: &str) -> Option<String> {
        let key = normalize_word(word)?;
        if self.corpus.contains(&key) {
            return None;
        }
        self.engine.suggest_in(&key, &self.corpus)
    }

    /// Look up a word, falling back to a suggestion on a miss.
    ///
    /// Only blank input is an error; a miss is a normal outcome.
    pub fn lookup_or_suggest(&self, word: &str) -> Result<LookupOutcome> {
        let query = normalize_word(word)
            .ok_or_else(|| LexisError::invalid_argument("query is empty"))?;

        if let Some(records) = self.corpus.get(&query) {
            return Ok(LookupOutcome::Found {
                entry: DictionaryEntry::from_records(&query, records),
            });
        }

        debug!("lookup miss for {query:?}, searching for a suggestion");
        Ok(match self.engine.suggest_in(&query, &self.corpus) {
            Some(suggestion) => LookupOutcome::Suggestion { query, suggestion },
            None => LookupOutcome::NotFound { query },
        })
    }
}
