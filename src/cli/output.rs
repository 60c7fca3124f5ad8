//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexisArgs, OutputFormat};
use crate::dictionary::{ConversionStats, DictionaryEntry, LookupOutcome};
use crate::error::Result;
use crate::spelling::TextUnit;

/// Result structure for lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    #[serde(flatten)]
    pub outcome: LookupOutcome,
    /// Definitions shown per part of speech in human output.
    #[serde(skip)]
    pub limit: usize,
}

/// Result structure for suggestions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub query: String,
    pub known: bool,
    pub suggestion: Option<String>,
}

/// Result structure for distance computation.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub a: String,
    pub b: String,
    pub unit: TextUnit,
    pub distance: usize,
}

/// Result structure for Wordset conversion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversionResult {
    pub output: String,
    pub output_size_bytes: u64,
    #[serde(flatten)]
    pub stats: ConversionStats,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub total_words: usize,
    pub total_definitions: usize,
    pub average_word_length: f64,
    pub max_word_length: usize,
    pub parts_of_speech: BTreeMap<String, usize>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn print_human(&self);
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &LexisArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 && !message.is_empty() {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_json<T: Serialize>(result: &T, args: &LexisArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

fn print_entry(entry: &DictionaryEntry, limit: usize) {
    println!("{}", entry.word);
    if let Some(phonetic) = entry.phonetic.as_deref().filter(|p| !p.is_empty()) {
        println!("{phonetic}");
    }

    for meaning in &entry.meanings {
        println!();
        println!("[{}]", meaning.part_of_speech);
        for (i, definition) in meaning.top_definitions(limit).iter().enumerate() {
            println!("  {}. {}", i + 1, definition.definition);
            if let Some(example) = definition.example.as_deref().filter(|e| !e.is_empty()) {
                println!("     \"{example}\"");
            }
        }
        let hidden = meaning.definitions.len().saturating_sub(limit);
        if hidden > 0 {
            println!("  ({hidden} more)");
        }
    }
}

impl HumanOutput for LookupResult {
    fn print_human(&self) {
        match &self.outcome {
            LookupOutcome::Found { entry } => print_entry(entry, self.limit),
            LookupOutcome::Suggestion { query, suggestion } => {
                println!("Word not found: {query}");
                println!("Did you mean: {suggestion}?");
            }
            LookupOutcome::NotFound { query } => println!("Word not found: {query}"),
        }
    }
}

impl HumanOutput for SuggestResult {
    fn print_human(&self) {
        if self.known {
            println!("{} is already in the dictionary", self.query);
            return;
        }
        match &self.suggestion {
            Some(suggestion) => println!("{suggestion}"),
            None => println!("No suggestion for {}", self.query),
        }
    }
}

impl HumanOutput for DistanceResult {
    fn print_human(&self) {
        println!("{}", self.distance);
    }
}

impl HumanOutput for ConversionResult {
    fn print_human(&self) {
        println!("Conversion Results:");
        println!("═══════════════════");
        println!("Files processed: {}", self.stats.files_processed);
        if self.stats.files_skipped > 0 {
            println!("Files skipped: {}", self.stats.files_skipped);
        }
        if self.stats.entries_skipped > 0 {
            println!("Malformed entries skipped: {}", self.stats.entries_skipped);
        }
        println!("Unique words: {}", self.stats.unique_words);
        println!("Definitions: {}", self.stats.definitions);
        println!(
            "Wrote {} ({})",
            self.output,
            format_bytes(self.output_size_bytes)
        );
    }
}

impl HumanOutput for DictionaryStats {
    fn print_human(&self) {
        println!("Dictionary Statistics:");
        println!("══════════════════════");
        println!("Path: {}", self.path);
        println!("Total words: {}", self.total_words);
        println!("Total definitions: {}", self.total_definitions);
        println!("Average word length: {:.1}", self.average_word_length);
        println!("Max word length: {}", self.max_word_length);

        if !self.parts_of_speech.is_empty() {
            println!();
            println!("Parts of speech:");
            println!("────────────────");
            for (pos, count) in &self.parts_of_speech {
                println!("  {pos}: {count}");
            }
        }
    }
}

/// Format bytes in human-readable format.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
