//! Conversion of Wordset dictionary data into a [`Corpus`].
//!
//! Wordset ships one JSON file per letter, each mapping a key to
//! `{"word": ..., "meanings": [{"def", "speech_part", "example"}]}`.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dictionary::corpus::{Corpus, DefinitionRecord, UNKNOWN_PART_OF_SPEECH};
use crate::error::{LexisError, Result};

#[derive(Debug, Deserialize)]
struct WordsetWord {
    word: Option<String>,
    #[serde(default)]
    meanings: Vec<WordsetMeaning>,
}

#[derive(Debug, Deserialize)]
struct WordsetMeaning {
    #[serde(default)]
    def: String,
    speech_part: Option<String>,
    example: Option<String>,
}

impl WordsetMeaning {
    fn into_record(self) -> DefinitionRecord {
        let pos = self
            .speech_part
            .unwrap_or_else(|| UNKNOWN_PART_OF_SPEECH.to_string());
        DefinitionRecord {
            pos,
            def: self.def,
            ex: self.example,
        }
    }
}

/// Counters reported after a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub entries_skipped: usize,
    pub unique_words: usize,
    pub definitions: usize,
}

/// Accumulates Wordset files into a corpus.
#[derive(Debug, Default)]
pub struct WordsetConverter {
    corpus: Corpus,
    stats: ConversionStats,
}

impl WordsetConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert every `*.json` file of a Wordset `data` directory, in file name order.
    ///
    /// Files that fail to parse are skipped with a warning. A missing directory,
    /// or one without JSON files, is an error.
    pub fn convert_dir<P: AsRef<Path>>(dir: P) -> Result<(Corpus, ConversionStats)> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(LexisError::invalid_argument(format!(
                "directory not found: {}",
                dir.display()
            )));
        }

        let mut files: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(LexisError::invalid_argument(format!(
                "no JSON files found in {}",
                dir.display()
            )));
        }
        info!("found {} JSON files to process", files.len());

        let mut converter = WordsetConverter::new();
        for file in &files {
            debug!("processing {}", file.display());
            let text = fs::read_to_string(file)?;
            if let Err(e) = converter.add_json(&text) {
                warn!("could not parse {}: {e}", file.display());
                converter.stats.files_skipped += 1;
            }
        }

        Ok(converter.finish())
    }

    /// Merge the entries of one Wordset JSON document.
    ///
    /// Entries are merged in document order.
    /// The document as a whole must be a JSON object; individual entries that
    /// do not look like Wordset words are counted and skipped.
    pub fn add_json(&mut self, json: &str) -> Result<()> {
        let document: Map<String, Value> = serde_json::from_str(json)?;
        self.stats.files_processed += 1;

        for (key, value) in document {
            let word: WordsetWord = match serde_json::from_value(value) {
                Ok(word) => word,
                Err(e) => {
                    debug!("skipping malformed entry {key:?}: {e}");
                    self.stats.entries_skipped += 1;
                    continue;
                }
            };
            if word.meanings.is_empty() {
                continue;
            }

            let name = word.word.unwrap_or(key);
            let records = word
                .meanings
                .into_iter()
                .map(WordsetMeaning::into_record)
                .collect();
            self.corpus.insert(&name, records);
        }

        Ok(())
    }

    /// Finish and return the corpus with final counters.
    pub fn finish(mut self) -> (Corpus, ConversionStats) {
        self.stats.unique_words = self.corpus.len();
        self.stats.definitions = self.corpus.definition_count();
        info!(
            "converted {} unique words ({} definitions)",
            self.stats.unique_words, self.stats.definitions
        );
        (self.corpus, self.stats)
    }
}
