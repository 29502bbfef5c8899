//! Command implementations for the newsbayes CLI.

use crate::analysis::token_filter::StopFilter;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::{CorpusReader, Document, read_stopwords, shuffle};
use crate::error::{NewsBayesError, Result};
use crate::ml::naive_bayes::{NaiveBayesConfig, TextClassifier, cross_validate};

/// Execute a CLI command.
pub fn execute_command(args: NewsBayesArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::CrossValidate(cv_args) => run_cross_validation(cv_args.clone(), &args),
    }
}

/// Train a model and optionally evaluate it on the held-out fold.
fn train(args: TrainArgs, cli_args: &NewsBayesArgs) -> Result<()> {
    let config = train_config(&args)?;
    let documents = load_corpus(&args.training)?;
    let stop_filter = load_stop_filter(&args.training)?;

    let classifier = TextClassifier::train(documents, stop_filter, config)?;
    let evaluation = classifier.evaluation();

    output_result(
        "Training finished",
        &TrainingResult {
            corpus: args.training.corpus.to_string_lossy().to_string(),
            heldout_fold: classifier.config().heldout_fold,
            categories: classifier.model().categories().to_vec(),
            non_numeric_labels: classifier.labels().non_numeric,
            dropped_documents: classifier.folds().dropped(),
            stats: classifier.stats().clone(),
            accuracy: evaluation.map(|e| e.accuracy()),
            correct: evaluation.map(|e| e.correct()),
            tested: evaluation.map(|e| e.total()),
            report: evaluation
                .filter(|_| args.report)
                .map(|e| e.classification_report()),
        },
        cli_args,
    )
}

/// Train a model, then classify each text given on the command line.
fn classify(args: ClassifyArgs, cli_args: &NewsBayesArgs) -> Result<()> {
    let config = load_config(&args.training)?;
    let documents = load_corpus(&args.training)?;
    let stop_filter = load_stop_filter(&args.training)?;

    let classifier = TextClassifier::train(documents, stop_filter, config)?;
    let model = classifier.model();

    let mut predictions = Vec::with_capacity(args.texts.len());
    for text in &args.texts {
        let scores = if args.scores {
            let scores = model
                .scores(text)?
                .into_iter()
                .map(|(category, log_likelihood)| CategoryScore {
                    category,
                    log_likelihood,
                })
                .collect();
            Some(scores)
        } else {
            None
        };
        predictions.push(Prediction {
            text: text.clone(),
            category: model.classify(text)?,
            scores,
        });
    }

    output_result(
        "Classification finished",
        &ClassificationResults {
            predictions,
            fallback_fills: model.fallback_fills(),
        },
        cli_args,
    )
}

/// Hold out each fold in turn.
fn run_cross_validation(args: CrossValidateArgs, cli_args: &NewsBayesArgs) -> Result<()> {
    let config = load_config(&args.training)?;
    let documents = load_corpus(&args.training)?;
    let stop_filter = load_stop_filter(&args.training)?;

    let summary = cross_validate(&documents, &stop_filter, &config)?;
    output_result("Cross-validation finished", &summary, cli_args)
}

/// Build the configuration from the optional file, then apply flag overrides.
fn load_config(args: &TrainingArgs) -> Result<NaiveBayesConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            NaiveBayesConfig::from_json_file(path)?
        }
        None => NaiveBayesConfig::default(),
    };

    if let Some(heldout_fold) = args.heldout_fold {
        config.heldout_fold = heldout_fold;
    }
    if let Some(datasize) = args.datasize {
        config.datasize = datasize;
    }
    if args.parallel {
        config.parallel_evaluation = true;
    }

    config.validate()?;
    Ok(config)
}

/// Configuration for `train`: `--evaluate` and `--report` switch evaluation
/// on, otherwise the file's `run_evaluation` stands.
fn train_config(args: &TrainArgs) -> Result<NaiveBayesConfig> {
    let mut config = load_config(&args.training)?;
    if args.evaluate || args.report {
        config.run_evaluation = true;
    }
    Ok(config)
}

/// Read the corpus and shuffle it unless asked not to.
fn load_corpus(args: &TrainingArgs) -> Result<Vec<Document>> {
    if !args.delimiter.is_ascii() {
        return Err(NewsBayesError::invalid_config(format!(
            "delimiter must be a single ASCII character, got {:?}",
            args.delimiter
        )));
    }
    let mut documents = CorpusReader::new()
        .with_headers(!args.no_header)
        .with_encoding(args.encoding)
        .with_delimiter(args.delimiter as u8)
        .with_columns(args.text_column, args.label_column)
        .read_path(&args.corpus)?;
    log::info!(
        "read {} documents from {}",
        documents.len(),
        args.corpus.display()
    );

    if !args.no_shuffle {
        shuffle(&mut documents, args.seed);
    }
    Ok(documents)
}

fn load_stop_filter(args: &TrainingArgs) -> Result<StopFilter> {
    if args.no_stopwords {
        return Ok(StopFilter::from_words(Vec::<String>::new()));
    }
    match &args.stopwords {
        Some(path) => {
            let words = read_stopwords(path)?;
            log::info!("loaded {} stop words from {}", words.len(), path.display());
            Ok(StopFilter::from_words(words))
        }
        None => Ok(StopFilter::english()),
    }
}
