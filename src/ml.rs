//! Machine learning for newsbayes.
//!
//! The classifier itself lives in [`naive_bayes`]; [`metrics`] turns its
//! evaluation output into per-category precision, recall and F1.

pub mod metrics;
pub mod naive_bayes;

pub use metrics::{AverageMetrics, CategoryMetrics, ClassificationReport};
