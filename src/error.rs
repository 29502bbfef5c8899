//! Error types for the newsbayes library.
//!
//! All errors are represented by the [`NewsBayesError`] enum. Configuration and
//! degenerate-data errors abort the training or evaluation run that raised them;
//! label filtering and probability-table gaps are recovered locally and never
//! surface here.
//!
//! # Examples
//!
//! ```
//! use newsbayes::error::{NewsBayesError, Result};
//!
//! fn check_fold(fold: usize) -> Result<()> {
//!     if fold == 0 {
//!         return Err(NewsBayesError::invalid_config("heldout_fold must be in 1..=10"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_fold(0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for newsbayes operations.
#[derive(Error, Debug)]
pub enum NewsBayesError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV decoding errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid regular expression in a char filter
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Configuration rejected before training began
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Data that cannot support the requested computation (e.g. an empty held-out fold)
    #[error("Degenerate data: {0}")]
    DegenerateData(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Malformed corpus rows
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with NewsBayesError.
pub type Result<T> = std::result::Result<T, NewsBayesError>;

impl NewsBayesError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        NewsBayesError::InvalidConfig(msg.into())
    }

    /// Create a new degenerate data error.
    pub fn degenerate_data<S: Into<String>>(msg: S) -> Self {
        NewsBayesError::DegenerateData(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        NewsBayesError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        NewsBayesError::Corpus(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        NewsBayesError::Other(msg.into())
    }

    /// Whether this error was raised by configuration validation.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, NewsBayesError::InvalidConfig(_))
    }

    /// Whether this error reports degenerate input data.
    pub fn is_degenerate_data(&self) -> bool {
        matches!(self, NewsBayesError::DegenerateData(_))
    }
}
