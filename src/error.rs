//! Error types for the Lexis library.
//!
//! Only the dictionary layer and the CLI can fail. Edit distance and
//! suggestion search are total functions and never return these errors.
//!
//! # Examples
//!
//! ```
//! use lexis::error::{LexisError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexisError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexis operations.
#[derive(Error, Debug)]
pub enum LexisError {
    /// I/O errors (reading or writing dictionary files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested word is not in the dictionary (or was empty after normalization)
    #[error("Word not found: {0}")]
    WordNotFound(String),

    /// Configuration values that cannot work together
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Bad arguments passed by a caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with LexisError.
pub type Result<T> = std::result::Result<T, LexisError>;

impl LexisError {
    /// Create a new word-not-found error.
    pub fn word_not_found<S: Into<String>>(word: S) -> Self {
        LexisError::WordNotFound(word.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LexisError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexisError::InvalidArgument(msg.into())
    }

    /// Whether this error means "no such word" rather than a real failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LexisError::WordNotFound(_))
    }
}
