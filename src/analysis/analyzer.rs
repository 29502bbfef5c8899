//! Analyzer implementations.
//!
//! An analyzer is the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Model
//!             ↓
//!       Char Filters
//!             ↓
//!         Tokenizer
//!             ↓
//!      Token Filters
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`NewsAnalyzer`](news::NewsAnalyzer) - The fixed normalizer used by the classifier

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a stream of tokens.
    ///
    /// Stopped tokens are removed before the stream is returned.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer.
    fn name(&self) -> &str;

    /// Analyze the given text and collect the token texts.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

pub mod news;
pub mod pipeline;

pub use news::NewsAnalyzer;
pub use pipeline::PipelineAnalyzer;
