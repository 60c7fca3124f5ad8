//! Integration tests for edit distance and suggestion search.

use lexis::dictionary::{Corpus, DefinitionRecord};
use lexis::spelling::{
    CountingDistance, Levenshtein, SuggestionConfig, SuggestionEngine, TieBreak,
    levenshtein_distance,
};

fn corpus_of(words: &[&str]) -> Corpus {
    Corpus::from_entries(
        words
            .iter()
            .map(|word| (*word, vec![DefinitionRecord::new("noun", "test")])),
    )
}

#[test]
fn test_known_distances() {
    assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
    assert_eq!(levenshtein_distance("", "abc"), 3);
    assert_eq!(levenshtein_distance("abc", ""), 3);
    assert_eq!(levenshtein_distance("gatsby", "gatsby"), 0);
}

#[test]
fn test_distance_properties_over_word_list() {
    let words = [
        "", "a", "ab", "hello", "help", "hell", "languid", "lucid", "orgastic", "über", "naïve",
    ];

    for a in words {
        assert_eq!(levenshtein_distance(a, a), 0);
        assert_eq!(levenshtein_distance(a, ""), a.chars().count());

        for b in words {
            let ab = levenshtein_distance(a, b);
            assert_eq!(ab, levenshtein_distance(b, a), "{a:?} / {b:?}");
            assert!(ab >= a.chars().count().abs_diff(b.chars().count()));
            assert!(ab <= a.chars().count().max(b.chars().count()));

            // Triangle inequality through every intermediate word.
            for c in words {
                assert!(ab <= levenshtein_distance(a, c) + levenshtein_distance(c, b));
            }
        }
    }
}

#[test]
fn test_helo_suggests_hello_via_early_exit() {
    let engine = SuggestionEngine::with_metric(
        CountingDistance::new(Levenshtein::new()),
        SuggestionConfig::default(),
    );

    let suggestion = engine.suggest("helo", ["hello", "help", "hell"]);
    assert_eq!(suggestion.as_deref(), Some("hello"));
    assert_eq!(engine.metric().calls(), 1, "scan must stop at the first single edit");
}

#[test]
fn test_no_suggestion_outside_tolerance() {
    let engine = SuggestionEngine::new();
    let corpus = corpus_of(&["apple", "orange"]);
    assert_eq!(engine.suggest_in("xyzxyz", &corpus), None);
}

#[test]
fn test_empty_corpus_yields_none() {
    let engine = SuggestionEngine::new();
    assert_eq!(engine.suggest_in("hello", &Corpus::new()), None);
}

#[test]
fn test_length_pruning_counts_distance_calls() {
    let engine = SuggestionEngine::with_metric(
        CountingDistance::new(Levenshtein::new()),
        SuggestionConfig::default(),
    );
    let corpus = corpus_of(&[
        "abcdefghijklmn",  // length 14, pruned
        "abcdefghijklmno", // length 15, pruned
        "abcdef",          // length 6, pruned
        "abcdefg",         // length 7, compared
        "zzzzzzzzzz",      // length 10, compared
    ]);

    let suggestion = engine.suggest_in("abcdefghij", &corpus);
    assert_eq!(suggestion.as_deref(), Some("abcdefg"));
    assert_eq!(engine.metric().calls(), 2);
}

#[test]
fn test_max_distance_scaling() {
    let engine = SuggestionEngine::new();
    assert_eq!(engine.max_distance_for(4), 3);
    assert_eq!(engine.max_distance_for(20), 3);
    assert_eq!(engine.max_distance_for(2), 2);
}

#[test]
fn test_self_membership_returns_itself() {
    let engine = SuggestionEngine::new();
    let corpus = corpus_of(&["apple", "gatsby", "zebra"]);
    assert_eq!(engine.suggest_in("gatsby", &corpus).as_deref(), Some("gatsby"));
}

#[test]
fn test_corpus_scan_is_reproducible() {
    let engine = SuggestionEngine::new();
    let forward = corpus_of(&["mbyy", "abyy", "zbyy"]);
    let backward = corpus_of(&["zbyy", "abyy", "mbyy"]);

    let expected = engine.suggest_in("abxx", &forward);
    assert_eq!(expected.as_deref(), Some("abyy"));
    for _ in 0..10 {
        assert_eq!(engine.suggest_in("abxx", &backward), expected);
    }
}

#[test]
fn test_first_seen_tie_break_depends_on_order() {
    let engine = SuggestionEngine::with_config(SuggestionConfig {
        tie_break: TieBreak::FirstSeen,
        ..Default::default()
    });

    assert_eq!(
        engine.suggest("bbxx", ["ccxx", "aaxx"]).as_deref(),
        Some("ccxx")
    );
    assert_eq!(
        engine.suggest("bbxx", ["aaxx", "ccxx"]).as_deref(),
        Some("aaxx")
    );
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = SuggestionEngine::new();
    let corpus = corpus_of(&["hello", "world", "languid", "lucid", "ephemeral"]);

    let (engine, corpus) = (&engine, &corpus);
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["helo", "wrld", "lucud", "ephemerol"]
            .into_iter()
            .map(|query| scope.spawn(move || engine.suggest_in(query, corpus)))
            .collect();

        let results: Vec<Option<String>> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(
            results,
            vec![
                Some("hello".to_string()),
                Some("world".to_string()),
                Some("lucid".to_string()),
                Some("ephemeral".to_string()),
            ]
        );
    });
}
