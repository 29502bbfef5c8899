//! Per-category classification metrics.
//!
//! Built from the parallel lists of true and predicted categories produced
//! by an evaluation. Undefined ratios (no predictions or no support for a
//! category) are reported as 0.
//!
//! # Examples
//!
//! ```
//! use newsbayes::ml::metrics::ClassificationReport;
//!
//! let truth = vec![Some(0), Some(0), Some(1), Some(1)];
//! let predicted = vec![0, 1, 1, 1];
//! let report = ClassificationReport::compute(&truth, &predicted);
//!
//! assert_eq!(report.accuracy, 0.75);
//! assert_eq!(report.rows[0].recall, 0.5);
//! assert_eq!(report.rows[1].precision, 2.0 / 3.0);
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::corpus::document::Category;

/// Metrics for a single category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryMetrics {
    pub category: Category,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of documents whose true category is this one.
    pub support: usize,
}

/// Averaged metrics over all categories.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Precision, recall and F1 per category, with macro and weighted averages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// One row per category seen in either list, ascending.
    pub rows: Vec<CategoryMetrics>,
    pub accuracy: f64,
    pub macro_avg: AverageMetrics,
    pub weighted_avg: AverageMetrics,
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn f1_score(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    }
}

impl ClassificationReport {
    /// Compute the report. A `None` truth matches no category: it counts as
    /// a miss and as a false positive for whatever was predicted.
    pub fn compute(truth: &[Option<Category>], predicted: &[Category]) -> Self {
        let pairs: Vec<(Option<Category>, Category)> =
            truth.iter().copied().zip(predicted.iter().copied()).collect();

        let categories: BTreeSet<Category> = pairs
            .iter()
            .flat_map(|(truth, predicted)| truth.iter().copied().chain([*predicted]))
            .collect();

        let rows: Vec<CategoryMetrics> = categories
            .into_iter()
            .map(|category| {
                let mut true_positives = 0;
                let mut predicted_positives = 0;
                let mut support = 0;
                for (truth, predicted) in &pairs {
                    let is_true = *truth == Some(category);
                    let is_predicted = *predicted == category;
                    support += usize::from(is_true);
                    predicted_positives += usize::from(is_predicted);
                    true_positives += usize::from(is_true && is_predicted);
                }
                let precision = ratio(true_positives, predicted_positives);
                let recall = ratio(true_positives, support);
                CategoryMetrics {
                    category,
                    precision,
                    recall,
                    f1: f1_score(precision, recall),
                    support,
                }
            })
            .collect();

        let correct = pairs
            .iter()
            .filter(|(truth, predicted)| *truth == Some(*predicted))
            .count();
        let total_support: usize = rows.iter().map(|row| row.support).sum();

        let macro_avg = if rows.is_empty() {
            AverageMetrics::default()
        } else {
            let n = rows.len() as f64;
            AverageMetrics {
                precision: rows.iter().map(|r| r.precision).sum::<f64>() / n,
                recall: rows.iter().map(|r| r.recall).sum::<f64>() / n,
                f1: rows.iter().map(|r| r.f1).sum::<f64>() / n,
                support: total_support,
            }
        };

        let weighted_avg = if total_support == 0 {
            AverageMetrics::default()
        } else {
            let weight = |value: fn(&CategoryMetrics) -> f64| {
                rows.iter().map(|r| value(r) * r.support as f64).sum::<f64>()
                    / total_support as f64
            };
            AverageMetrics {
                precision: weight(|r| r.precision),
                recall: weight(|r| r.recall),
                f1: weight(|r| r.f1),
                support: total_support,
            }
        };

        ClassificationReport {
            rows,
            accuracy: ratio(correct, pairs.len()),
            macro_avg,
            weighted_avg,
        }
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>14} {:>10} {:>10} {:>10} {:>10}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>14} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                row.category, row.precision, row.recall, row.f1, row.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>14} {:>10} {:>10} {:>10.2} {:>10}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support
        )?;
        for (name, avg) in [("macro avg", &self.macro_avg), ("weighted avg", &self.weighted_avg)] {
            writeln!(
                f,
                "{:>14} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                name, avg.precision, avg.recall, avg.f1, avg.support
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_predictions() {
        let truth = vec![Some(0), Some(1), Some(1)];
        let report = ClassificationReport::compute(&truth, &[0, 1, 1]);

        assert_eq!(report.accuracy, 1.0);
        assert!(report.rows.iter().all(|r| r.f1 == 1.0));
        assert_eq!(report.rows[1].support, 2);
        assert_eq!(report.weighted_avg.f1, 1.0);
    }

    #[test]
    fn test_unpredicted_category_has_zero_precision() {
        let truth = vec![Some(0), Some(1)];
        let report = ClassificationReport::compute(&truth, &[0, 0]);

        let one = &report.rows[1];
        assert_eq!(one.category, 1);
        assert_eq!(one.precision, 0.0);
        assert_eq!(one.recall, 0.0);
        assert_eq!(one.f1, 0.0);

        let zero = &report.rows[0];
        assert_eq!(zero.precision, 0.5);
        assert_eq!(zero.recall, 1.0);
        assert_eq!(report.macro_avg.recall, 0.5);
    }

    #[test]
    fn test_non_numeric_truth_counts_against_prediction() {
        let truth = vec![None, Some(1)];
        let report = ClassificationReport::compute(&truth, &[1, 1]);

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].precision, 0.5);
        assert_eq!(report.rows[0].support, 1);
        assert_eq!(report.accuracy, 0.5);
    }

    #[test]
    fn test_empty_input() {
        let report = ClassificationReport::compute(&[], &[]);
        assert!(report.rows.is_empty());
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.macro_avg, AverageMetrics::default());
    }

    #[test]
    fn test_display_lists_every_category() {
        let truth = vec![Some(3), Some(7)];
        let text = ClassificationReport::compute(&truth, &[3, 3]).to_string();
        assert!(text.contains("precision"));
        assert!(text.contains("weighted avg"));
        assert!(text.lines().any(|line| line.trim_start().starts_with('7')));
    }
}
