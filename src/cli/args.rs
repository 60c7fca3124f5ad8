//! Command line argument parsing for Lexis CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Lexis - dictionary lookup with "did you mean?" suggestions
#[derive(Parser, Debug, Clone)]
#[command(name = "lexis")]
#[command(about = "Dictionary lookup with spelling suggestions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexisArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Suggestion engine configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "LEXIS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexisArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Look up a word, suggesting a correction on a miss
    Lookup(LookupArgs),

    /// Suggest the closest known word
    Suggest(SuggestArgs),

    /// Compute the edit distance between two strings
    Distance(DistanceArgs),

    /// Convert Wordset dictionary data into dictionary.json
    Convert(ConvertArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for looking up a word
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Path to dictionary.json
    #[arg(short, long, value_name = "DICTIONARY", env = "LEXIS_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum definitions shown per part of speech
    #[arg(short, long, default_value = "3")]
    pub limit: usize,
}

/// Arguments for suggesting a word
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Path to dictionary.json
    #[arg(short, long, value_name = "DICTIONARY", env = "LEXIS_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Possibly misspelled word
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for computing a distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    #[arg(value_name = "A")]
    pub a: String,

    #[arg(value_name = "B")]
    pub b: String,

    /// Count grapheme clusters instead of characters
    #[arg(long)]
    pub graphemes: bool,
}

/// Arguments for converting Wordset data
#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// Wordset `data` directory
    #[arg(value_name = "WORDSET_DIR")]
    pub input_dir: PathBuf,

    /// Output file
    #[arg(value_name = "OUTPUT", default_value = "dictionary.json")]
    pub output: PathBuf,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for showing statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to dictionary.json
    #[arg(short, long, value_name = "DICTIONARY", env = "LEXIS_DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
