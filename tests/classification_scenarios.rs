use std::sync::Arc;

use newsbayes::analysis::analyzer::{Analyzer, NewsAnalyzer};
use newsbayes::analysis::token_filter::StopFilter;
use newsbayes::corpus::{BucketPartitioner, Document};
use newsbayes::error::Result;
use newsbayes::ml::naive_bayes::{
    FALLBACK_PROBABILITY, NaiveBayesConfig, NaiveBayesModel, ProbabilityTable, TextClassifier,
    Vocabulary, cross_validate,
};

fn no_stop_words() -> StopFilter {
    StopFilter::from_words(Vec::<String>::new())
}

fn disjoint_corpus(n: usize) -> Vec<Document> {
    (0..n)
        .map(|i| {
            if i % 2 == 0 {
                Document::with_category("alpha beta", 0)
            } else {
                Document::with_category("gamma delta", 1)
            }
        })
        .collect()
}

#[test]
fn disjoint_vocabularies_are_classified_perfectly() -> Result<()> {
    let config = NaiveBayesConfig::new(10).with_evaluation(true);
    let classifier = TextClassifier::train(disjoint_corpus(100), no_stop_words(), config)?;

    let evaluation = classifier.evaluation().expect("evaluation was requested");
    assert_eq!(evaluation.heldout_fold(), 10);
    assert_eq!(evaluation.total(), 10);
    assert_eq!(evaluation.accuracy(), 1.0);

    let report = evaluation.classification_report();
    assert_eq!(report.rows.len(), 2);
    assert!(report.rows.iter().all(|row| row.f1 == 1.0));
    Ok(())
}

#[test]
fn smoothed_likelihoods_follow_the_counting_rule() -> Result<()> {
    let classifier =
        TextClassifier::train(disjoint_corpus(100), no_stop_words(), NaiveBayesConfig::new(10))?;
    let model = classifier.model();

    // 90 training documents, 45 per category, two tokens each.
    assert_eq!(model.vocabulary().len(), 4);
    let denominator = 90.0 + 4.0;
    assert_eq!(model.table(0).map(ProbabilityTable::denominator), Some(denominator));
    assert_eq!(model.probability("alpha", 0), Some(46.0 / denominator));
    assert_eq!(model.probability("gamma", 0), Some(2.0 / denominator));
    assert_eq!(model.probability("delta", 1), Some(46.0 / denominator));
    Ok(())
}

#[test]
fn normalization_is_applied_before_lookup() -> Result<()> {
    let classifier =
        TextClassifier::train(disjoint_corpus(100), no_stop_words(), NaiveBayesConfig::new(10))?;

    assert_eq!(classifier.classify("\"ALPHA\", (beta)!")?, 0);
    assert_eq!(classifier.classify("gamma-delta/gamma")?, 1);
    Ok(())
}

#[test]
fn rare_tokens_are_pruned_and_ignored() -> Result<()> {
    let mut documents = disjoint_corpus(100);
    // Two occurrences in training, below the pruning threshold.
    documents[1] = Document::with_category("gamma delta zeta", 1);
    documents[3] = Document::with_category("gamma delta zeta", 1);

    let classifier = TextClassifier::train(documents, no_stop_words(), NaiveBayesConfig::new(10))?;
    let model = classifier.model();
    assert!(!model.vocabulary().contains("zeta"));

    // No vocabulary token: every score is zero and the smallest category wins.
    let scores = model.scores("zeta omega")?;
    assert_eq!(scores, vec![(0, 0.0), (1, 0.0)]);
    assert_eq!(model.classify("zeta omega")?, 0);
    Ok(())
}

#[test]
fn classification_is_idempotent() -> Result<()> {
    let classifier =
        TextClassifier::train(disjoint_corpus(100), no_stop_words(), NaiveBayesConfig::new(3))?;

    let first = classifier.classify("alpha gamma beta")?;
    let second = classifier.classify("alpha gamma beta")?;
    assert_eq!(first, second);
    assert_eq!(classifier.model().fallback_fills(), 0);
    Ok(())
}

#[test]
fn missing_cells_are_filled_once() -> Result<()> {
    let analyzer: Arc<dyn Analyzer> = Arc::new(NewsAnalyzer::new()?);
    let vocabulary: Vocabulary = [("alpha", 5u64), ("gamma", 5)].into_iter().collect();
    let tables = vec![
        ProbabilityTable::from_likelihoods(1, 10.0, [("gamma", 0.6)]),
        ProbabilityTable::from_likelihoods(0, 10.0, [("alpha", 0.6), ("gamma", 0.2)]),
    ];
    let model = NaiveBayesModel::from_parts(analyzer, vocabulary, tables);
    assert_eq!(model.categories(), &[0, 1]);
    assert_eq!(model.probability("alpha", 1), None);

    // ln(1.0) = 0 beats ln(0.6) < 0.
    assert_eq!(model.classify("alpha")?, 1);
    assert_eq!(model.probability("alpha", 1), Some(FALLBACK_PROBABILITY));
    assert_eq!(model.fallback_fills(), 1);

    assert_eq!(model.classify("alpha")?, 1);
    assert_eq!(model.fallback_fills(), 1);
    Ok(())
}

#[test]
fn corpus_smaller_than_fold_count_cannot_be_evaluated() {
    let config = NaiveBayesConfig::new(1).with_evaluation(true);
    let err = TextClassifier::train(disjoint_corpus(9), no_stop_words(), config).unwrap_err();
    assert!(err.is_degenerate_data());
}

#[test]
fn remainder_documents_are_dropped() {
    let folds = BucketPartitioner::new().partition(disjoint_corpus(105));
    assert_eq!(folds.fold_size(), 10);
    assert_eq!(folds.assigned(), 100);
    assert_eq!(folds.dropped(), 5);
    assert_eq!(folds.training_documents(4).count(), 90);
}

#[test]
fn stop_words_never_reach_the_vocabulary() -> Result<()> {
    let documents: Vec<Document> = (0..60)
        .map(|i| {
            if i % 2 == 0 {
                Document::with_category("The harvest and the tractor", 0)
            } else {
                Document::with_category("The rocket and the orbit", 1)
            }
        })
        .collect();
    let classifier =
        TextClassifier::train(documents, StopFilter::english(), NaiveBayesConfig::default())?;

    let vocabulary = classifier.model().vocabulary();
    assert!(!vocabulary.contains("the"));
    assert!(!vocabulary.contains("and"));
    assert!(vocabulary.contains("harvest"));
    assert_eq!(vocabulary.len(), 4);
    Ok(())
}

#[test]
fn parallel_evaluation_matches_sequential() -> Result<()> {
    let sequential = TextClassifier::train(
        disjoint_corpus(200),
        no_stop_words(),
        NaiveBayesConfig::new(6).with_evaluation(true),
    )?;
    let parallel = TextClassifier::train(
        disjoint_corpus(200),
        no_stop_words(),
        NaiveBayesConfig::new(6)
            .with_evaluation(true)
            .with_parallel_evaluation(true),
    )?;
    assert_eq!(sequential.evaluation(), parallel.evaluation());
    Ok(())
}

#[test]
fn cross_validation_rotates_every_fold() -> Result<()> {
    let summary = cross_validate(
        &disjoint_corpus(50),
        &no_stop_words(),
        &NaiveBayesConfig::default(),
    )?;
    assert_eq!(summary.folds.len(), 10);
    assert!(summary.folds.iter().all(|fold| fold.total == 5));
    assert_eq!(summary.mean_accuracy, 1.0);
    Ok(())
}
