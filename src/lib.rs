//! # newsbayes
//!
//! Multinomial Naive Bayes classification of news articles into integer
//! categories, evaluated with ten-bucket hold-out validation.
//!
//! ## Features
//!
//! - Analysis pipeline for punctuation removal, tokenization and stop words
//! - Bucketed partitioning with a held-out test fold
//! - Add-one smoothed likelihoods over a pruned vocabulary
//! - Accuracy, per-category metrics and full fold rotation
//! - CSV corpus ingestion

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod ml;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, NewsAnalyzer, PipelineAnalyzer};
    pub use crate::analysis::token_filter::StopFilter;
    pub use crate::corpus::{BucketPartitioner, Category, CorpusReader, Document, Folds};
    pub use crate::error::{NewsBayesError, Result};
    pub use crate::ml::metrics::ClassificationReport;
    pub use crate::ml::naive_bayes::{
        Evaluation, NaiveBayesConfig, NaiveBayesModel, TextClassifier, cross_validate,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
