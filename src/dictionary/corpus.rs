//! The in-memory word store.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Part of speech used when the source data gives none.
pub const UNKNOWN_PART_OF_SPEECH: &str = "unknown";

/// Part of speech attached to plain `"word": "definition"` entries.
pub const PLAIN_PART_OF_SPEECH: &str = "definition";

/// Trim surrounding whitespace and lowercase. `None` if nothing is left.
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// One definition as stored in `dictionary.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionRecord {
    /// Part of speech.
    #[serde(default = "unknown_part_of_speech")]
    pub pos: String,
    /// Definition text.
    pub def: String,
    /// Optional usage example.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ex: Option<String>,
}

fn unknown_part_of_speech() -> String {
    UNKNOWN_PART_OF_SPEECH.to_string()
}

impl DefinitionRecord {
    pub fn new<P: Into<String>, D: Into<String>>(pos: P, def: D) -> Self {
        DefinitionRecord {
            pos: pos.into(),
            def: def.into(),
            ex: None,
        }
    }

    /// Attach a usage example.
    pub fn with_example<S: Into<String>>(mut self, example: S) -> Self {
        self.ex = Some(example.into());
        self
    }
}

/// Both shapes `dictionary.json` has been shipped in.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDefinitions {
    Plain(String),
    Records(Vec<DefinitionRecord>),
}

impl RawDefinitions {
    fn into_records(self) -> Vec<DefinitionRecord> {
        match self {
            RawDefinitions::Plain(def) => vec![DefinitionRecord::new(PLAIN_PART_OF_SPEECH, def)],
            RawDefinitions::Records(records) => records,
        }
    }
}

/// A set of known words, each with one or more definitions.
///
/// Keys are always lowercase, trimmed and non-empty. Words iterate in
/// lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: BTreeMap<String, Vec<DefinitionRecord>>,
}

impl Corpus {
    /// Create a new empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a corpus from `dictionary.json` text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Map<String, Value> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Load a corpus from a `dictionary.json` file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let raw: Map<String, Value> = serde_json::from_reader(reader)?;
        let corpus = Self::from_raw(raw)?;
        info!(
            "loaded {} words ({} definitions) from {}",
            corpus.len(),
            corpus.definition_count(),
            path.display()
        );
        Ok(corpus)
    }

    /// Keys are visited in file order, so keys that normalize to the same
    /// word merge their definitions in the order they appear in the file.
    fn from_raw(raw: Map<String, Value>) -> Result<Self> {
        let mut corpus = Corpus::new();
        for (word, value) in raw {
            let definitions: RawDefinitions = serde_json::from_value(value)?;
            corpus.insert(&word, definitions.into_records());
        }
        Ok(corpus)
    }

    /// Build a corpus from `(word, records)` pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<DefinitionRecord>)>,
        S: AsRef<str>,
    {
        let mut corpus = Corpus::new();
        for (word, records) in entries {
            corpus.insert(word.as_ref(), records);
        }
        corpus
    }

    /// Write the corpus as compact `dictionary.json`.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &self.entries)?;
        writer.flush()?;
        Ok(())
    }

    /// Add definitions for a word.
    ///
    /// The word is normalized first. Records with blank definitions are dropped,
    /// and a word with no remaining definitions is not added. Definitions for a
    /// word that already exists are appended. Returns `true` if the word is new.
    pub fn insert(&mut self, word: &str, records: Vec<DefinitionRecord>) -> bool {
        let Some(key) = normalize_word(word) else {
            debug!("skipping blank dictionary key");
            return false;
        };

        let records: Vec<DefinitionRecord> = records
            .into_iter()
            .filter_map(|mut record| {
                record.def = record.def.trim().to_string();
                if record.def.is_empty() {
                    return None;
                }
                record.pos = record.pos.trim().to_string();
                record.ex = record
                    .ex
                    .map(|ex| ex.trim().to_string())
                    .filter(|ex| !ex.is_empty());
                Some(record)
            })
            .collect();

        if records.is_empty() {
            debug!("skipping {key:?}: no usable definitions");
            return false;
        }

        match self.entries.entry(key) {
            Entry::Occupied(mut existing) => {
                existing.get_mut().extend(records);
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(records);
                true
            }
        }
    }

    /// Definitions of a word, if present. The lookup key is normalized.
    pub fn get(&self, word: &str) -> Option<&[DefinitionRecord]> {
        let key = normalize_word(word)?;
        self.entries.get(&key).map(Vec::as_slice)
    }

    /// Check if a word exists in the corpus.
    pub fn contains(&self, word: &str) -> bool {
        normalize_word(word).is_some_and(|key| self.entries.contains_key(&key))
    }

    /// All known words in lexicographic order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// All words with their definitions in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DefinitionRecord])> + '_ {
        self.entries
            .iter()
            .map(|(word, records)| (word.as_str(), records.as_slice()))
    }

    /// Number of unique words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of definitions across all words.
    pub fn definition_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
