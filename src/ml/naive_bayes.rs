//! Multinomial Naive Bayes text classification with bucketed cross-validation.
//!
//! ```text
//! corpus → downsample → BucketPartitioner → FrequencyCounter (9 folds)
//!        → Vocabulary::prune → ProbabilityTable per category
//!        → Evaluator (held-out fold) using NaiveBayesModel::classify
//! ```
//!
//! # Examples
//!
//! ```
//! use newsbayes::analysis::token_filter::StopFilter;
//! use newsbayes::corpus::Document;
//! use newsbayes::ml::naive_bayes::{NaiveBayesConfig, TextClassifier};
//!
//! let documents: Vec<Document> = (0..40)
//!     .map(|i| {
//!         if i % 2 == 0 {
//!             Document::with_category("alpha beta", 0)
//!         } else {
//!             Document::with_category("gamma delta", 1)
//!         }
//!     })
//!     .collect();
//!
//! let config = NaiveBayesConfig::new(10).with_evaluation(true);
//! let classifier = TextClassifier::train(documents, StopFilter::english(), config).unwrap();
//!
//! assert_eq!(classifier.classify("beta beta").unwrap(), 0);
//! assert_eq!(classifier.evaluation().unwrap().accuracy(), 1.0);
//! ```

pub mod classifier;
pub mod config;
pub mod counter;
pub mod cross_validation;
pub mod evaluator;
pub mod model;
pub mod vocabulary;

pub use classifier::{TextClassifier, TrainingStats};
pub use config::{MIN_TOKEN_COUNT, NaiveBayesConfig};
pub use counter::{CategoryCounts, FrequencyCounter, FrequencyCounts};
pub use cross_validation::{CrossValidationSummary, FoldAccuracy, cross_validate};
pub use evaluator::{Evaluation, Evaluator};
pub use model::{FALLBACK_PROBABILITY, NaiveBayesModel, ProbabilityTable};
pub use vocabulary::Vocabulary;
