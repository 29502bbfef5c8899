//! The fixed normalizer for news article text.
//!
//! 1. Quotes, sentence punctuation and a few symbols are deleted.
//! 2. Hyphens, slashes, en/em dashes and square brackets become a space.
//! 3. The text is split on whitespace.
//! 4. Each token is trimmed and lowercased.
//! 5. Optionally, stop words are removed.
//!
//! Training and classification both go through this analyzer, so the model
//! vocabulary and the inference tokens always agree byte-for-byte.
//!
//! # Examples
//!
//! ```
//! use newsbayes::analysis::analyzer::{Analyzer, NewsAnalyzer};
//!
//! let analyzer = NewsAnalyzer::new().unwrap();
//! let terms = analyzer.terms("“Breaking” news: well-known (and/or) facts!").unwrap();
//! assert_eq!(terms, vec!["breaking", "news", "well", "known", "and", "or", "facts"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::PatternReplaceCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LowercaseFilter, StopFilter, StripFilter};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::Result;

/// Characters deleted from the text before tokenization.
pub const REMOVED_CHARS: &[char] = &[
    '"', '\'', '’', '‘', '”', '“', ',', '.', '?', '!', ';', ':', '*', '(', ')', '>', '<', '&',
    '|', '»', '«',
];

/// Characters replaced by a single space before tokenization.
pub const SEPARATOR_CHARS: &[char] = &['-', '/', '—', '[', ']', '–'];

/// Normalizer pipeline for news text, optionally with stop word removal.
#[derive(Clone, Debug)]
pub struct NewsAnalyzer {
    inner: PipelineAnalyzer,
    stop_filter: Option<StopFilter>,
}

impl NewsAnalyzer {
    /// Create the normalizer without stop word removal.
    pub fn new() -> Result<Self> {
        Ok(NewsAnalyzer {
            inner: Self::base_pipeline()?.with_name("news"),
            stop_filter: None,
        })
    }

    /// Create the normalizer followed by the given stop filter.
    pub fn with_stop_filter(stop_filter: StopFilter) -> Result<Self> {
        let inner = Self::base_pipeline()?
            .add_filter(Arc::new(stop_filter.clone()))
            .with_name("news_stop");
        Ok(NewsAnalyzer {
            inner,
            stop_filter: Some(stop_filter),
        })
    }

    /// Get the stop filter, if this analyzer removes stop words.
    pub fn stop_filter(&self) -> Option<&StopFilter> {
        self.stop_filter.as_ref()
    }

    fn base_pipeline() -> Result<PipelineAnalyzer> {
        Ok(PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::from_chars(
                REMOVED_CHARS,
                "",
            )?))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::from_chars(
                SEPARATOR_CHARS,
                " ",
            )?))
            .add_filter(Arc::new(StripFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new())))
    }
}

impl Analyzer for NewsAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
