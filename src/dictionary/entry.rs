//! Lookup results shaped for display.

use serde::{Deserialize, Serialize};

use crate::dictionary::corpus::DefinitionRecord;

/// A dictionary entry returned by a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub phonetic: Option<String>,
    pub meanings: Vec<Meaning>,
}

/// All definitions of a word sharing one part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    pub example: Option<String>,
}

impl DictionaryEntry {
    /// Group stored records into meanings, one per part of speech, in the
    /// order each part of speech first appears.
    pub fn from_records(word: &str, records: &[DefinitionRecord]) -> Self {
        let mut meanings: Vec<Meaning> = Vec::new();

        for record in records {
            let definition = Definition {
                definition: record.def.clone(),
                example: record.ex.clone(),
            };

            match meanings
                .iter_mut()
                .find(|meaning| meaning.part_of_speech == record.pos)
            {
                Some(meaning) => meaning.definitions.push(definition),
                None => meanings.push(Meaning {
                    part_of_speech: record.pos.clone(),
                    definitions: vec![definition],
                }),
            }
        }

        DictionaryEntry {
            word: word.to_string(),
            phonetic: None,
            meanings,
        }
    }

    /// Total number of definitions across all meanings.
    pub fn definition_count(&self) -> usize {
        self.meanings.iter().map(|m| m.definitions.len()).sum()
    }
}

impl Meaning {
    /// The first `limit` definitions.
    pub fn top_definitions(&self, limit: usize) -> &[Definition] {
        &self.definitions[..self.definitions.len().min(limit)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_preserves_first_seen_order() {
        let records = vec![
            DefinitionRecord::new("verb", "move quickly"),
            DefinitionRecord::new("noun", "an act of running"),
            DefinitionRecord::new("verb", "operate").with_example("run the machine"),
        ];

        let entry = DictionaryEntry::from_records("run", &records);
        assert_eq!(entry.word, "run");
        assert_eq!(entry.phonetic, None);
        assert_eq!(entry.meanings.len(), 2);
        assert_eq!(entry.meanings[0].part_of_speech, "verb");
        assert_eq!(entry.meanings[0].definitions.len(), 2);
        assert_eq!(
            entry.meanings[0].definitions[1].example.as_deref(),
            Some("run the machine")
        );
        assert_eq!(entry.meanings[1].part_of_speech, "noun");
        assert_eq!(entry.definition_count(), 3);
    }

    #[test]
    fn test_top_definitions() {
        let records: Vec<DefinitionRecord> = (0..5)
            .map(|i| DefinitionRecord::new("noun", format!("sense {i}")))
            .collect();
        let entry = DictionaryEntry::from_records("set", &records);

        let meaning = &entry.meanings[0];
        assert_eq!(meaning.top_definitions(3).len(), 3);
        assert_eq!(meaning.top_definitions(3)[2].definition, "sense 2");
        assert_eq!(meaning.top_definitions(10).len(), 5);
    }

    #[test]
    fn test_serialized_field_names() {
        let entry =
            DictionaryEntry::from_records("lucid", &[DefinitionRecord::new("adjective", "clear")]);
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["word"], "lucid");
        assert!(value["phonetic"].is_null());
        assert_eq!(value["meanings"][0]["partOfSpeech"], "adjective");
        assert_eq!(value["meanings"][0]["definitions"][0]["definition"], "clear");
    }
}
