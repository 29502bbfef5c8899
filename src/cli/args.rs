//! Command line argument parsing for the newsbayes CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::corpus::TextEncoding;

/// newsbayes - Naive Bayes news classification with bucketed hold-out evaluation
#[derive(Parser, Debug, Clone)]
#[command(name = "newsbayes")]
#[command(about = "Naive Bayes news classification with bucketed hold-out evaluation")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NewsBayesArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl NewsBayesArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a model on all folds but the held-out one
    Train(TrainArgs),

    /// Train a model, then classify the given texts
    Classify(ClassifyArgs),

    /// Hold out every fold in turn and report each accuracy
    #[command(name = "cross-validate")]
    CrossValidate(CrossValidateArgs),
}

/// Corpus loading and training options shared by every command
#[derive(Args, Debug, Clone)]
pub struct TrainingArgs {
    /// CSV corpus; by default the article text is in column 0 and its label in column 1
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Fold (1-10) excluded from training and used for evaluation
    #[arg(long, value_name = "FOLD")]
    pub heldout_fold: Option<usize>,

    /// Fraction of the corpus to keep, in (0, 1]
    #[arg(long, value_name = "FRACTION")]
    pub datasize: Option<f64>,

    /// Configuration file (JSON); flags override its values
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Stop word file, one word per line (default: built-in English list)
    #[arg(long, value_name = "STOPWORDS_FILE")]
    pub stopwords: Option<PathBuf>,

    /// Disable stop word removal
    #[arg(long, conflicts_with = "stopwords")]
    pub no_stopwords: bool,

    /// Character encoding of the corpus file (news corpora are usually ISO-8859-1)
    #[arg(long, default_value = "latin1")]
    pub encoding: TextEncoding,

    /// The corpus has no header row
    #[arg(long)]
    pub no_header: bool,

    /// Field delimiter of the corpus file (a single ASCII character)
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Column holding the article text (0-based)
    #[arg(long, default_value_t = 0)]
    pub text_column: usize,

    /// Column holding the label (0-based)
    #[arg(long, default_value_t = 1)]
    pub label_column: usize,

    /// Seed for shuffling the corpus
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep the corpus in file order
    #[arg(long, conflicts_with = "seed")]
    pub no_shuffle: bool,

    /// Classify the held-out fold on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    #[command(flatten)]
    pub training: TrainingArgs,

    /// Evaluate the model on the held-out fold
    #[arg(short, long)]
    pub evaluate: bool,

    /// Include per-category precision, recall and F1 (implies --evaluate)
    #[arg(long)]
    pub report: bool,
}

/// Arguments for classifying texts
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub training: TrainingArgs,

    /// Texts to classify
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,

    /// Include the per-category log-likelihoods
    #[arg(long)]
    pub scores: bool,
}

/// Arguments for cross-validation
#[derive(Parser, Debug, Clone)]
pub struct CrossValidateArgs {
    #[command(flatten)]
    pub training: TrainingArgs,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_defaults() {
        let args = NewsBayesArgs::parse_from(["newsbayes", "train", "news.csv"]);
        assert_eq!(args.verbosity(), 1);
        assert_eq!(args.output_format, OutputFormat::Human);

        let Command::Train(train) = args.command else {
            panic!("expected train command");
        };
        assert_eq!(train.training.corpus, PathBuf::from("news.csv"));
        assert_eq!(train.training.heldout_fold, None);
        assert_eq!(train.training.encoding, TextEncoding::Latin1);
        assert_eq!(train.training.delimiter, ',');
        assert_eq!(
            (train.training.text_column, train.training.label_column),
            (0, 1)
        );
        assert!(!train.evaluate);
    }

    #[test]
    fn test_verbosity() {
        let args = NewsBayesArgs::parse_from(["newsbayes", "-vvv", "train", "news.csv"]);
        assert_eq!(args.verbosity(), 3);

        let args = NewsBayesArgs::parse_from(["newsbayes", "-v", "-q", "train", "news.csv"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_classify_flags() {
        let args = NewsBayesArgs::parse_from([
            "newsbayes",
            "classify",
            "news.csv",
            "first text",
            "second text",
            "--heldout-fold",
            "3",
            "--datasize",
            "0.5",
            "--encoding",
            "utf8",
            "--delimiter",
            ";",
            "--seed",
            "7",
            "--format",
            "json",
        ]);
        assert_eq!(args.output_format, OutputFormat::Json);

        let Command::Classify(classify) = args.command else {
            panic!("expected classify command");
        };
        assert_eq!(classify.texts, vec!["first text", "second text"]);
        assert_eq!(classify.training.heldout_fold, Some(3));
        assert_eq!(classify.training.datasize, Some(0.5));
        assert_eq!(classify.training.encoding, TextEncoding::Utf8);
        assert_eq!(classify.training.delimiter, ';');
        assert_eq!(classify.training.seed, Some(7));
    }

    #[test]
    fn test_conflicting_stopword_flags() {
        let result = NewsBayesArgs::try_parse_from([
            "newsbayes",
            "cross-validate",
            "news.csv",
            "--stopwords",
            "words.txt",
            "--no-stopwords",
        ]);
        assert!(result.is_err());
    }
}
