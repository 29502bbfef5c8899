//! Token filter implementations for token transformation.
//!
//! # Available Filters
//!
//! - [`strip::StripFilter`] - Trims surrounding whitespace
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stop::StopFilter`] - Removes stop words
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Strip → Lowercase → Stop Words → Model
//! ```
//!
//! Filters mark tokens as stopped instead of dropping them; the analyzer
//! removes stopped tokens at the end of the chain.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stop;
pub mod strip;

pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
pub use strip::StripFilter;
