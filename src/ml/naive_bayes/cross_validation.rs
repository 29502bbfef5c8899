//! Rotating every fold through the held-out position.

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::StopFilter;
use crate::corpus::document::Document;
use crate::corpus::partition::FOLD_COUNT;
use crate::error::{NewsBayesError, Result};
use crate::ml::naive_bayes::classifier::TextClassifier;
use crate::ml::naive_bayes::config::NaiveBayesConfig;

/// Accuracy of one train/test rotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoldAccuracy {
    pub heldout_fold: usize,
    pub accuracy: f64,
    pub total: usize,
}

/// Accuracy of every rotation and their mean.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrossValidationSummary {
    pub folds: Vec<FoldAccuracy>,
    pub mean_accuracy: f64,
}

/// Train and evaluate one model per held-out fold 1..=10, sequentially.
///
/// `config.heldout_fold` and `config.run_evaluation` are overridden for each
/// rotation; `datasize` and `parallel_evaluation` apply to all of them.
pub fn cross_validate(
    documents: &[Document],
    stop_filter: &StopFilter,
    config: &NaiveBayesConfig,
) -> Result<CrossValidationSummary> {
    config.validate()?;
    if documents.len() < FOLD_COUNT {
        return Err(NewsBayesError::degenerate_data(format!(
            "cross-validation needs at least {FOLD_COUNT} documents, got {}",
            documents.len()
        )));
    }

    let mut folds = Vec::with_capacity(FOLD_COUNT);
    for heldout_fold in 1..=FOLD_COUNT {
        let rotation = config
            .clone()
            .with_heldout_fold(heldout_fold)
            .with_evaluation(true);
        let classifier =
            TextClassifier::train(documents.to_vec(), stop_filter.clone(), rotation)?;
        let evaluation = classifier
            .evaluation()
            .ok_or_else(|| NewsBayesError::other("evaluation missing from training run"))?;
        log::info!(
            "fold {heldout_fold}: accuracy {:.4} over {} documents",
            evaluation.accuracy(),
            evaluation.total()
        );
        folds.push(FoldAccuracy {
            heldout_fold,
            accuracy: evaluation.accuracy(),
            total: evaluation.total(),
        });
    }

    let mean_accuracy = folds.iter().map(|f| f.accuracy).sum::<f64>() / folds.len() as f64;
    Ok(CrossValidationSummary {
        folds,
        mean_accuracy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(n: usize) -> Vec<Document> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    Document::with_category("wheat harvest tractor", 0)
                } else {
                    Document::with_category("orbit rocket launch", 1)
                }
            })
            .collect()
    }

    #[test]
    fn test_every_fold_is_held_out_once() {
        let summary =
            cross_validate(&corpus(40), &StopFilter::english(), &NaiveBayesConfig::default())
                .unwrap();

        let held_out: Vec<_> = summary.folds.iter().map(|f| f.heldout_fold).collect();
        assert_eq!(held_out, (1..=10).collect::<Vec<_>>());
        assert!(summary.folds.iter().all(|f| f.total == 4));
        assert_eq!(summary.mean_accuracy, 1.0);
    }

    #[test]
    fn test_too_small_corpus() {
        let err = cross_validate(&corpus(9), &StopFilter::english(), &NaiveBayesConfig::default())
            .unwrap_err();
        assert!(err.is_degenerate_data());
    }

    #[test]
    fn test_downsampled_below_fold_count_is_degenerate() {
        let config = NaiveBayesConfig::default().with_datasize(0.1);
        let err = cross_validate(&corpus(40), &StopFilter::english(), &config).unwrap_err();
        assert!(err.is_degenerate_data());
    }
}
