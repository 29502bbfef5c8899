//! Held-out fold evaluation.

use rayon::prelude::*;
use serde::Serialize;

use crate::corpus::document::{Category, Document};
use crate::corpus::partition::{FOLD_COUNT, Folds};
use crate::error::{NewsBayesError, Result};
use crate::ml::metrics::ClassificationReport;
use crate::ml::naive_bayes::model::NaiveBayesModel;

/// Outcome of classifying every document of the held-out fold.
///
/// Only [`Evaluator::evaluate`] builds one, and it refuses empty folds, so
/// `total` is never zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Evaluation {
    heldout_fold: usize,
    correct: usize,
    total: usize,
    truth: Vec<Option<Category>>,
    predicted: Vec<Category>,
}

impl Evaluation {
    /// The fold that was classified.
    pub fn heldout_fold(&self) -> usize {
        self.heldout_fold
    }

    /// Documents whose prediction matched their label.
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Documents classified.
    pub fn total(&self) -> usize {
        self.total
    }

    /// True categories, `None` for labels that are not integers.
    pub fn truth(&self) -> &[Option<Category>] {
        &self.truth
    }

    /// Predicted categories, parallel to [`Evaluation::truth`].
    pub fn predicted(&self) -> &[Category] {
        &self.predicted
    }

    /// Fraction of correctly classified documents, in [0, 1].
    pub fn accuracy(&self) -> f64 {
        self.correct as f64 / self.total as f64
    }

    /// Per-category precision, recall and F1 over this evaluation.
    pub fn classification_report(&self) -> ClassificationReport {
        ClassificationReport::compute(&self.truth, &self.predicted)
    }
}

/// Runs a model over the held-out fold and measures accuracy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator {
    parallel: bool,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify on the rayon thread pool instead of the calling thread.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Classify every document of fold `skip` and compare against its label.
    ///
    /// An empty fold is a [`NewsBayesError::DegenerateData`] error.
    pub fn evaluate(&self, model: &NaiveBayesModel, folds: &Folds, skip: usize) -> Result<Evaluation> {
        let fold = folds.get(skip).ok_or_else(|| {
            NewsBayesError::invalid_config(format!(
                "heldout_fold must be in 1..={FOLD_COUNT}, got {skip}"
            ))
        })?;
        if fold.is_empty() {
            return Err(NewsBayesError::degenerate_data(format!(
                "held-out fold {skip} is empty; accuracy would divide by zero"
            )));
        }

        let documents = fold.documents();
        let predicted = if self.parallel {
            let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
            model.classify_batch(&texts)?
        } else {
            documents
                .iter()
                .map(|document| model.classify(&document.text))
                .collect::<Result<Vec<_>>>()?
        };

        let truth: Vec<Option<Category>> = documents.iter().map(Document::category).collect();
        let correct = truth
            .iter()
            .zip(&predicted)
            .filter(|(truth, predicted)| **truth == Some(**predicted))
            .count();

        let evaluation = Evaluation {
            heldout_fold: skip,
            correct,
            total: documents.len(),
            truth,
            predicted,
        };
        log::info!(
            "accuracy is {:.2}% with {} test cases",
            evaluation.accuracy() * 100.0,
            evaluation.total()
        );
        Ok(evaluation)
    }
}
