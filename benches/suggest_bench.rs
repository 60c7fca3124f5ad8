use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lexis::dictionary::{Corpus, DefinitionRecord};
use lexis::spelling::{SuggestionConfig, SuggestionEngine, levenshtein_distance};

fn generate_corpus(count: usize) -> Corpus {
    let alphabet: Vec<char> = ('a'..='z').collect();
    let mut corpus = Corpus::new();
    for i in 0..count {
        let len = 3 + i % 10;
        let word: String = (0..len)
            .map(|j| alphabet[(i * 7 + j * 13 + i / 26) % alphabet.len()])
            .collect();
        corpus.insert(&word, vec![DefinitionRecord::new("noun", "generated")]);
    }
    corpus
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");
    for (a, b) in [
        ("kitten", "sitting"),
        ("dictionary", "dictionery"),
        ("incomprehensibilities", "incomprehensibility"),
    ] {
        group.bench_function(format!("{a}/{b}"), |bench| {
            bench.iter(|| black_box(levenshtein_distance(black_box(a), black_box(b))))
        });
    }
    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");

    for size in [1_000, 10_000, 50_000] {
        let corpus = generate_corpus(size);

        let full_scan = SuggestionEngine::with_config(SuggestionConfig {
            early_exit_distance: None,
            ..Default::default()
        });
        group.bench_with_input(BenchmarkId::new("full_scan", size), &corpus, |b, corpus| {
            b.iter(|| black_box(full_scan.suggest_in(black_box("qwertyuio"), corpus)))
        });

        let default_engine = SuggestionEngine::new();
        group.bench_with_input(BenchmarkId::new("default", size), &corpus, |b, corpus| {
            b.iter(|| black_box(default_engine.suggest_in(black_box("qwertyuio"), corpus)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distance, bench_suggest);
criterion_main!(benches);
