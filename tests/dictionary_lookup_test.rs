//! Integration tests for loading a dictionary file and looking words up.

use std::fs;
use std::sync::Arc;

use lexis::dictionary::{Corpus, DictionaryService, LookupOutcome, WordsetConverter};
use lexis::error::LexisError;
use lexis::spelling::{SuggestionConfig, SuggestionEngine};
use tempfile::TempDir;

const DICTIONARY_JSON: &str = r#"{
    "languid": [{"pos": "adjective", "def": "displaying a disinclination for exertion", "ex": "her languid movements suggested boredom"}],
    "lucid": [{"pos": "adjective", "def": "expressed clearly"}, {"pos": "adjective", "def": "showing ability to think clearly"}],
    "ephemeral": [{"pos": "adjective", "def": "lasting for a very short time"}],
    "run": [{"pos": "verb", "def": "move swiftly"}, {"pos": "noun", "def": "an act of running"}],
    "  Gumption ": [{"pos": "noun", "def": "shrewd practical sense"}]
}"#;

fn write_dictionary(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("dictionary.json");
    fs::write(&path, DICTIONARY_JSON).unwrap();
    path
}

#[test]
fn test_load_and_lookup() -> lexis::error::Result<()> {
    let dir = TempDir::new().unwrap();
    let corpus = Corpus::load_from_file(write_dictionary(&dir))?;
    assert_eq!(corpus.len(), 5);
    assert!(corpus.contains("gumption"));

    let service = DictionaryService::new(Arc::new(corpus));

    let entry = service.lookup("Languid")?;
    assert_eq!(entry.meanings.len(), 1);
    assert_eq!(
        entry.meanings[0].definitions[0].example.as_deref(),
        Some("her languid movements suggested boredom")
    );

    let entry = service.lookup("run")?;
    let parts: Vec<&str> = entry
        .meanings
        .iter()
        .map(|m| m.part_of_speech.as_str())
        .collect();
    assert_eq!(parts, vec!["verb", "noun"]);

    Ok(())
}

#[test]
fn test_miss_falls_back_to_suggestion() -> lexis::error::Result<()> {
    let dir = TempDir::new().unwrap();
    let corpus = Corpus::load_from_file(write_dictionary(&dir))?;
    let service = DictionaryService::new(Arc::new(corpus));

    match service.lookup_or_suggest("  EPHEMERL ")? {
        LookupOutcome::Suggestion { query, suggestion } => {
            assert_eq!(query, "ephemerl");
            assert_eq!(suggestion, "ephemeral");
        }
        other => panic!("expected a suggestion, got {other:?}"),
    }

    assert!(matches!(
        service.lookup_or_suggest("zzzzzzzzzzzz")?,
        LookupOutcome::NotFound { .. }
    ));

    let err = service.lookup("ephemerl").unwrap_err();
    assert!(matches!(err, LexisError::WordNotFound(_)));

    Ok(())
}

#[test]
fn test_custom_engine_configuration() -> lexis::error::Result<()> {
    let corpus = Arc::new(Corpus::from_json_str(DICTIONARY_JSON)?);

    // "lucd" is one edit from "lucid"; a zero cap turns suggestions off.
    let strict = DictionaryService::with_engine(
        Arc::clone(&corpus),
        SuggestionEngine::with_config(SuggestionConfig {
            max_distance_cap: 0,
            early_exit_distance: None,
            ..Default::default()
        }),
    );
    assert_eq!(strict.suggest("lucd"), None);

    let lenient = DictionaryService::new(corpus);
    assert_eq!(lenient.suggest("lucd").as_deref(), Some("lucid"));

    Ok(())
}

#[test]
fn test_convert_then_lookup() -> lexis::error::Result<()> {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data)?;
    fs::write(
        data.join("g.json"),
        r#"{"gatsby": {"word": "Gatsby", "meanings": [{"def": "a wealthy mysterious man", "speech_part": "noun"}]}}"#,
    )?;
    fs::write(
        data.join("o.json"),
        r#"{"orgastic": {"meanings": [{"def": "ecstatic", "speech_part": "adjective", "example": "the orgastic future"}]}}"#,
    )?;

    let (corpus, stats) = WordsetConverter::convert_dir(&data)?;
    assert_eq!(stats.unique_words, 2);

    let output = dir.path().join("dictionary.json");
    corpus.save_to_file(&output)?;

    let service = DictionaryService::new(Arc::new(Corpus::load_from_file(&output)?));
    assert_eq!(service.lookup("gatsby")?.meanings[0].part_of_speech, "noun");
    assert_eq!(service.suggest("orgasitc").as_deref(), Some("orgastic"));

    Ok(())
}
