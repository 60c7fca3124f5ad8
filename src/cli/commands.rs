//! Command implementations for Lexis CLI.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::{Corpus, DictionaryService, WordsetConverter, normalize_word};
use crate::error::{LexisError, Result};
use crate::spelling::{SuggestionConfig, SuggestionEngine, TextUnit};

/// Execute a CLI command.
pub fn execute_command(args: LexisArgs) -> Result<()> {
    match &args.command {
        Command::Lookup(lookup_args) => lookup_word(lookup_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest_word(suggest_args.clone(), &args),
        Command::Distance(distance_args) => compute_distance(distance_args.clone(), &args),
        Command::Convert(convert_args) => convert_wordset(convert_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Load the suggestion configuration, falling back to defaults.
pub fn load_config(cli_args: &LexisArgs) -> Result<SuggestionConfig> {
    let Some(path) = &cli_args.config else {
        return Ok(SuggestionConfig::default());
    };

    debug!("loading suggestion config from {}", path.display());
    let content = fs::read_to_string(path)?;
    let config: SuggestionConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

fn load_service(dictionary: &Path, cli_args: &LexisArgs) -> Result<DictionaryService> {
    let config = load_config(cli_args)?;
    let start = Instant::now();
    let corpus = Corpus::load_from_file(dictionary)?;
    info!("dictionary ready in {}ms", start.elapsed().as_millis());
    Ok(DictionaryService::with_engine(
        Arc::new(corpus),
        SuggestionEngine::with_config(config),
    ))
}

/// Look up a word.
fn lookup_word(args: LookupArgs, cli_args: &LexisArgs) -> Result<()> {
    let service = load_service(&args.dictionary, cli_args)?;
    let outcome = service.lookup_or_suggest(&args.word)?;

    output_result(
        "Lookup complete",
        &LookupResult {
            outcome,
            limit: args.limit,
        },
        cli_args,
    )
}

/// Suggest a correction for a word.
fn suggest_word(args: SuggestArgs, cli_args: &LexisArgs) -> Result<()> {
    let service = load_service(&args.dictionary, cli_args)?;
    let query = normalize_word(&args.word)
        .ok_or_else(|| LexisError::invalid_argument("word is empty"))?;

    let known = service.corpus().contains(&query);
    let start = Instant::now();
    let suggestion = service.suggest(&query);
    debug!("suggestion search took {}µs", start.elapsed().as_micros());

    output_result(
        "Suggestion complete",
        &SuggestResult {
            query,
            known,
            suggestion,
        },
        cli_args,
    )
}

/// Compute the edit distance between two strings.
fn compute_distance(args: DistanceArgs, cli_args: &LexisArgs) -> Result<()> {
    let unit = if args.graphemes {
        TextUnit::Grapheme
    } else {
        TextUnit::Char
    };
    let distance = unit.distance(&args.a, &args.b);

    output_result(
        "Distance computed",
        &DistanceResult {
            a: args.a,
            b: args.b,
            unit,
            distance,
        },
        cli_args,
    )
}

/// Convert a Wordset data directory into dictionary.json.
fn convert_wordset(args: ConvertArgs, cli_args: &LexisArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(LexisError::invalid_argument(format!(
            "{} already exists. Use --force to overwrite.",
            args.output.display()
        )));
    }

    if cli_args.verbosity() > 1 {
        println!("Converting Wordset data from: {}", args.input_dir.display());
    }

    let (corpus, stats) = WordsetConverter::convert_dir(&args.input_dir)?;
    corpus.save_to_file(&args.output)?;
    let output_size_bytes = fs::metadata(&args.output)?.len();

    output_result(
        "Conversion complete",
        &ConversionResult {
            output: args.output.to_string_lossy().to_string(),
            output_size_bytes,
            stats,
        },
        cli_args,
    )
}

/// Show dictionary statistics.
fn show_stats(args: StatsArgs, cli_args: &LexisArgs) -> Result<()> {
    let corpus = Corpus::load_from_file(&args.dictionary)?;
    let stats = collect_stats(&corpus, &args.dictionary);
    output_result("Dictionary statistics", &stats, cli_args)
}

fn collect_stats(corpus: &Corpus, path: &Path) -> DictionaryStats {
    let mut parts_of_speech: BTreeMap<String, usize> = BTreeMap::new();
    let mut total_length = 0usize;
    let mut max_word_length = 0usize;

    for (word, records) in corpus.iter() {
        let length = TextUnit::Char.len(word);
        total_length += length;
        max_word_length = max_word_length.max(length);
        for record in records {
            *parts_of_speech.entry(record.pos.clone()).or_default() += 1;
        }
    }

    let average_word_length = if corpus.is_empty() {
        0.0
    } else {
        total_length as f64 / corpus.len() as f64
    };

    DictionaryStats {
        path: path.to_string_lossy().to_string(),
        total_words: corpus.len(),
        total_definitions: corpus.definition_count(),
        average_word_length,
        max_word_length,
        parts_of_speech,
    }
}
