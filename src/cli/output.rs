//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{NewsBayesArgs, OutputFormat};
use crate::corpus::Category;
use crate::error::Result;
use crate::ml::metrics::ClassificationReport;
use crate::ml::naive_bayes::{CrossValidationSummary, TrainingStats};

/// Result structure for a training run.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResult {
    pub corpus: String,
    pub heldout_fold: usize,
    pub categories: Vec<Category>,
    pub non_numeric_labels: usize,
    pub dropped_documents: usize,
    pub stats: TrainingStats,
    pub accuracy: Option<f64>,
    pub correct: Option<usize>,
    pub tested: Option<usize>,
    pub report: Option<ClassificationReport>,
}

/// Log-likelihood of one category for a text.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub log_likelihood: f64,
}

/// Predicted category of one text.
#[derive(Debug, Serialize, Deserialize)]
pub struct Prediction {
    pub text: String,
    pub category: Category,
    pub scores: Option<Vec<CategoryScore>>,
}

/// Result structure for classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResults {
    pub predictions: Vec<Prediction>,
    pub fallback_fills: usize,
}

/// Results that know how to print themselves for a terminal.
pub trait HumanOutput {
    fn print_human(&self);
}

impl HumanOutput for TrainingResult {
    fn print_human(&self) {
        println!("Training Summary:");
        println!("═════════════════");
        println!("Corpus: {}", self.corpus);
        println!("Documents: {}", self.stats.documents);
        println!("Sampled: {}", self.stats.sampled);
        println!("Partitioned: {}", self.stats.partitioned);
        if self.dropped_documents > 0 {
            println!("Dropped by fold rounding: {}", self.dropped_documents);
        }
        if self.non_numeric_labels > 0 {
            println!("Non-numeric labels: {}", self.non_numeric_labels);
        }
        println!("Categories: {}", format_categories(&self.categories));
        println!("Vocabulary size: {}", self.stats.vocabulary_size);
        println!("Held-out fold: {}", self.heldout_fold);

        if let (Some(accuracy), Some(correct), Some(tested)) =
            (self.accuracy, self.correct, self.tested)
        {
            println!();
            println!(
                "Accuracy: {:.2}% ({correct}/{tested} test cases)",
                accuracy * 100.0
            );
        }

        if let Some(report) = &self.report {
            println!();
            print!("{report}");
        }

        println!();
        println!("Data preparation: {}", format_duration(self.stats.preparation_secs));
        if let Some(secs) = self.stats.classification_secs {
            println!("Classification: {}", format_duration(secs));
        }
        println!("Total: {}", format_duration(self.stats.total_secs));
    }
}

impl HumanOutput for ClassificationResults {
    fn print_human(&self) {
        for (i, prediction) in self.predictions.iter().enumerate() {
            println!("Text {}: category {}", i + 1, prediction.category);
            println!("─────────────");
            println!("{}", truncate(&prediction.text, 72));
            if let Some(scores) = &prediction.scores {
                for score in scores {
                    println!("  {:>6}: {:.4}", score.category, score.log_likelihood);
                }
            }
            println!();
        }
        if self.fallback_fills > 0 {
            println!("Fallback cells filled: {}", self.fallback_fills);
        }
    }
}

impl HumanOutput for CrossValidationSummary {
    fn print_human(&self) {
        println!("Cross-Validation:");
        println!("═════════════════");
        for fold in &self.folds {
            println!(
                "Fold {:>2}: {:.2}% ({} test cases)",
                fold.heldout_fold,
                fold.accuracy * 100.0,
                fold.total
            );
        }
        println!();
        println!("Mean accuracy: {:.2}%", self.mean_accuracy * 100.0);
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &NewsBayesArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &NewsBayesArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }
    result.print_human();
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &NewsBayesArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn format_categories(categories: &[Category]) -> String {
    let joined = categories
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Format seconds into human-readable format.
fn format_duration(secs: f64) -> String {
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else {
        format!("{secs:.2}s")
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    }
}
