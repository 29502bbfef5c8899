//! End-to-end training run.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, NewsAnalyzer};
use crate::analysis::token_filter::StopFilter;
use crate::corpus::document::{Category, Document, LabelSummary};
use crate::corpus::partition::{BucketPartitioner, Folds};
use crate::corpus::sampling::downsample;
use crate::error::Result;
use crate::ml::naive_bayes::config::{MIN_TOKEN_COUNT, NaiveBayesConfig};
use crate::ml::naive_bayes::counter::FrequencyCounter;
use crate::ml::naive_bayes::evaluator::{Evaluation, Evaluator};
use crate::ml::naive_bayes::model::NaiveBayesModel;

/// Sizes and timings of a training run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Documents handed to the run.
    pub documents: usize,
    /// Documents left after down-sampling.
    pub sampled: usize,
    /// Documents assigned to a fold.
    pub partitioned: usize,
    /// Vocabulary size after pruning.
    pub vocabulary_size: usize,
    /// Seconds spent sampling, counting and smoothing.
    pub preparation_secs: f64,
    /// Seconds spent evaluating the held-out fold, if it was evaluated.
    pub classification_secs: Option<f64>,
    pub total_secs: f64,
}

/// A model trained on all folds but the held-out one, together with the folds
/// it was trained on.
#[derive(Debug)]
pub struct TextClassifier {
    config: NaiveBayesConfig,
    model: NaiveBayesModel,
    folds: Folds,
    labels: LabelSummary,
    stats: TrainingStats,
    evaluation: Option<Evaluation>,
}

impl TextClassifier {
    /// Train with the news normalizer and the given stop words.
    pub fn train(
        documents: Vec<Document>,
        stop_filter: StopFilter,
        config: NaiveBayesConfig,
    ) -> Result<Self> {
        let analyzer = NewsAnalyzer::with_stop_filter(stop_filter)?;
        Self::train_with_analyzer(documents, Arc::new(analyzer), config)
    }

    /// Train with a custom analyzer. The analyzer is also used to classify.
    ///
    /// Configuration is validated before any work is done. When
    /// `config.run_evaluation` is set, the held-out fold is evaluated too and
    /// an empty held-out fold fails the run.
    pub fn train_with_analyzer(
        documents: Vec<Document>,
        analyzer: Arc<dyn Analyzer>,
        config: NaiveBayesConfig,
    ) -> Result<Self> {
        config.validate()?;
        let start = Instant::now();
        log::info!("training on {} documents", documents.len());

        let mut stats = TrainingStats {
            documents: documents.len(),
            ..Default::default()
        };

        let documents = downsample(documents, config.datasize)?;
        stats.sampled = documents.len();

        let labels = LabelSummary::from_documents(&documents);
        log::info!(
            "discovered {} categories from {} numeric labels",
            labels.categories.len(),
            labels.numeric
        );
        if labels.non_numeric > 0 {
            log::warn!(
                "{} document(s) have non-numeric labels and belong to no category",
                labels.non_numeric
            );
        }

        let folds = BucketPartitioner::new().partition(documents);
        stats.partitioned = folds.assigned();

        let counts = FrequencyCounter::new(Arc::clone(&analyzer)).count(
            &folds,
            config.heldout_fold,
            &labels.categories,
        )?;
        let model = NaiveBayesModel::build(analyzer, counts, MIN_TOKEN_COUNT);
        stats.vocabulary_size = model.vocabulary().len();

        let prepared = Instant::now();
        stats.preparation_secs = (prepared - start).as_secs_f64();
        log::info!("data preparation elapsed {:.2} seconds", stats.preparation_secs);

        let mut classifier = TextClassifier {
            config,
            model,
            folds,
            labels,
            stats,
            evaluation: None,
        };

        if classifier.config.run_evaluation {
            let evaluation = classifier.evaluate()?;
            let classification_secs = prepared.elapsed().as_secs_f64();
            log::info!("classification elapsed {classification_secs:.2} seconds");
            classifier.stats.classification_secs = Some(classification_secs);
            classifier.evaluation = Some(evaluation);
        }

        classifier.stats.total_secs = start.elapsed().as_secs_f64();
        log::info!(
            "total operation elapsed {:.2} seconds",
            classifier.stats.total_secs
        );
        Ok(classifier)
    }

    /// Classify a single text. May fill missing model cells; see
    /// [`NaiveBayesModel::scores`].
    pub fn classify(&self, text: &str) -> Result<Category> {
        self.model.classify(text)
    }

    /// Evaluate the model on the held-out fold.
    pub fn evaluate(&self) -> Result<Evaluation> {
        Evaluator::new()
            .with_parallel(self.config.parallel_evaluation)
            .evaluate(&self.model, &self.folds, self.config.heldout_fold)
    }

    pub fn config(&self) -> &NaiveBayesConfig {
        &self.config
    }

    pub fn model(&self) -> &NaiveBayesModel {
        &self.model
    }

    pub fn folds(&self) -> &Folds {
        &self.folds
    }

    /// Label validation result for the sampled corpus.
    pub fn labels(&self) -> &LabelSummary {
        &self.labels
    }

    pub fn stats(&self) -> &TrainingStats {
        &self.stats
    }

    /// The evaluation run during training, if `run_evaluation` was set.
    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(n: usize) -> Vec<Document> {
        (0..n)
            .map(|i| match i % 3 {
                0 => Document::with_category("goal striker keeper match", 0),
                1 => Document::with_category("vote senate ballot bill", 1),
                _ => Document::with_category("stock market shares rally", 2),
            })
            .collect()
    }

    #[test]
    fn test_train_and_classify() {
        let classifier =
            TextClassifier::train(corpus(60), StopFilter::english(), NaiveBayesConfig::new(2))
                .unwrap();

        assert_eq!(classifier.model().categories(), &[0, 1, 2]);
        assert_eq!(classifier.classify("The striker scored a goal").unwrap(), 0);
        assert_eq!(classifier.classify("Senate vote on the bill").unwrap(), 1);
        assert_eq!(classifier.classify("Shares rally as market opens").unwrap(), 2);
        assert!(classifier.evaluation().is_none());
        assert_eq!(classifier.stats().classification_secs, None);
    }

    #[test]
    fn test_run_evaluation_during_training() {
        let config = NaiveBayesConfig::new(4).with_evaluation(true);
        let classifier = TextClassifier::train(corpus(90), StopFilter::english(), config).unwrap();

        let evaluation = classifier.evaluation().unwrap();
        assert_eq!(evaluation.heldout_fold(), 4);
        assert_eq!(evaluation.total(), 9);
        assert_eq!(evaluation.accuracy(), 1.0);
        assert!(classifier.stats().classification_secs.is_some());
    }

    #[test]
    fn test_stats_reflect_sampling_and_partitioning() {
        let config = NaiveBayesConfig::default().with_datasize(0.5);
        let classifier = TextClassifier::train(corpus(65), StopFilter::english(), config).unwrap();

        let stats = classifier.stats();
        assert_eq!(stats.documents, 65);
        // round_ties_even(32.5) = 32
        assert_eq!(stats.sampled, 32);
        assert_eq!(stats.partitioned, 30);
        assert_eq!(stats.vocabulary_size, 12);
    }

    #[test]
    fn test_invalid_config_fails_before_training() {
        let err = TextClassifier::train(corpus(30), StopFilter::english(), NaiveBayesConfig::new(0))
            .unwrap_err();
        assert!(err.is_invalid_config());

        let config = NaiveBayesConfig::default().with_datasize(0.0);
        let err = TextClassifier::train(corpus(30), StopFilter::english(), config).unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_labels_report_non_numeric() {
        let mut documents = corpus(30);
        documents.push(Document::new("stray text", "unknown"));
        let classifier =
            TextClassifier::train(documents, StopFilter::english(), NaiveBayesConfig::default())
                .unwrap();

        assert_eq!(classifier.labels().non_numeric, 1);
        assert_eq!(classifier.labels().numeric, 30);
    }
}
