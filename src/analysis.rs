//! Text analysis module for newsbayes.
//!
//! Raw document text becomes model tokens through a pipeline of char filters,
//! a tokenizer and token filters. The same pipeline runs at training time and
//! at classification time, so the vocabulary built during training always
//! matches the tokens seen during inference.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Tokens
//! ```

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
