//! Configuration for a training run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::corpus::partition::FOLD_COUNT;
use crate::error::{NewsBayesError, Result};

/// Minimum global occurrence count a token needs to stay in the vocabulary.
pub const MIN_TOKEN_COUNT: u64 = 3;

/// Configuration for training and evaluating a classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaiveBayesConfig {
    /// Fold (1..=10) excluded from training and used for testing.
    pub heldout_fold: usize,

    /// Fraction of the corpus to keep, in (0, 1].
    pub datasize: f64,

    /// Whether training also evaluates the held-out fold.
    pub run_evaluation: bool,

    /// Classify the held-out fold on the rayon thread pool.
    pub parallel_evaluation: bool,
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        Self {
            heldout_fold: 5,
            datasize: 1.0,
            run_evaluation: false,
            parallel_evaluation: false,
        }
    }
}

impl NaiveBayesConfig {
    /// Create a configuration holding out the given fold.
    pub fn new(heldout_fold: usize) -> Self {
        Self {
            heldout_fold,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Set the held-out fold.
    pub fn with_heldout_fold(mut self, heldout_fold: usize) -> Self {
        self.heldout_fold = heldout_fold;
        self
    }

    /// Set the fraction of the corpus to keep.
    pub fn with_datasize(mut self, datasize: f64) -> Self {
        self.datasize = datasize;
        self
    }

    /// Set whether training also evaluates the held-out fold.
    pub fn with_evaluation(mut self, run_evaluation: bool) -> Self {
        self.run_evaluation = run_evaluation;
        self
    }

    /// Set whether evaluation classifies documents in parallel.
    pub fn with_parallel_evaluation(mut self, parallel_evaluation: bool) -> Self {
        self.parallel_evaluation = parallel_evaluation;
        self
    }

    /// Reject configurations that cannot describe a training run.
    pub fn validate(&self) -> Result<()> {
        if !(1..=FOLD_COUNT).contains(&self.heldout_fold) {
            return Err(NewsBayesError::invalid_config(format!(
                "heldout_fold must be in 1..={FOLD_COUNT}, got {}",
                self.heldout_fold
            )));
        }
        if !self.datasize.is_finite() || self.datasize <= 0.0 || self.datasize > 1.0 {
            return Err(NewsBayesError::invalid_config(format!(
                "datasize must be in (0, 1], got {}",
                self.datasize
            )));
        }
        Ok(())
    }
}
