//! Smoothed probability tables and log-likelihood classification.
//!
//! For every category `c` and every token `t` of the pruned vocabulary:
//!
//! ```text
//! denominator(c) = total_tokens(c) + |vocabulary|
//! raw(t, c)      = count(t, c) if t was counted for c, else 1
//! p(t, c)        = (raw(t, c) + 1) / denominator(c)
//! ```
//!
//! A token never counted for `c` therefore gets `2 / denominator(c)`, not the
//! textbook `1 / denominator(c)`.
//!
//! Classification sums `ln p(t, c)` over the vocabulary tokens of a text. A
//! vocabulary token missing from a category's table is written into that
//! table with probability [`FALLBACK_PROBABILITY`] before scoring continues,
//! so classifying is not a read-only operation on the model.

use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ahash::AHashMap;
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::corpus::document::Category;
use crate::error::{NewsBayesError, Result};
use crate::ml::naive_bayes::counter::{CategoryCounts, FrequencyCounts};
use crate::ml::naive_bayes::vocabulary::Vocabulary;

/// Probability written for a vocabulary token missing from a category's table.
pub const FALLBACK_PROBABILITY: f64 = 1.0;

/// Token likelihoods for one category.
pub struct ProbabilityTable {
    category: Category,
    denominator: f64,
    likelihoods: RwLock<AHashMap<String, f64>>,
}

impl ProbabilityTable {
    /// Smooth `counts` over every token of the (pruned) `vocabulary`.
    pub fn build(counts: &CategoryCounts, vocabulary: &Vocabulary) -> Self {
        let denominator = (counts.total() + vocabulary.len() as u64) as f64;
        let likelihoods = vocabulary
            .tokens()
            .map(|token| {
                let raw = counts.get(token).unwrap_or(1);
                (token.to_string(), (raw + 1) as f64 / denominator)
            })
            .collect();

        ProbabilityTable {
            category: counts.category(),
            denominator,
            likelihoods: RwLock::new(likelihoods),
        }
    }

    /// Rebuild a table from previously computed likelihoods.
    pub fn from_likelihoods<I, S>(category: Category, denominator: f64, likelihoods: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        ProbabilityTable {
            category,
            denominator,
            likelihoods: RwLock::new(
                likelihoods
                    .into_iter()
                    .map(|(token, p)| (token.into(), p))
                    .collect(),
            ),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// `total_tokens(c) + |vocabulary|` at build time.
    pub fn denominator(&self) -> f64 {
        self.denominator
    }

    /// Likelihood of `token`, if the table has an entry for it.
    pub fn get(&self, token: &str) -> Option<f64> {
        self.likelihoods.read().get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.likelihoods.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.likelihoods.read().is_empty()
    }

    /// Copy of the current entries.
    pub fn snapshot(&self) -> AHashMap<String, f64> {
        self.likelihoods.read().clone()
    }

    /// Insert the fallback probability for `token` unless an entry exists.
    ///
    /// Returns the entry's value and whether this call wrote it.
    fn fill(&self, token: &str) -> (f64, bool) {
        let mut likelihoods = self.likelihoods.write();
        match likelihoods.entry(token.to_string()) {
            Entry::Occupied(entry) => (*entry.get(), false),
            Entry::Vacant(entry) => (*entry.insert(FALLBACK_PROBABILITY), true),
        }
    }
}

impl fmt::Debug for ProbabilityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbabilityTable")
            .field("category", &self.category)
            .field("denominator", &self.denominator)
            .field("entries", &self.len())
            .finish()
    }
}

/// A trained multinomial Naive Bayes model.
///
/// The model can be shared across threads: each table sits behind its own
/// lock and the fallback fill is an idempotent insert.
pub struct NaiveBayesModel {
    analyzer: Arc<dyn Analyzer>,
    vocabulary: Vocabulary,
    categories: Vec<Category>,
    tables: Vec<ProbabilityTable>,
    fallback_fills: AtomicUsize,
}

impl NaiveBayesModel {
    /// Prune the counted vocabulary to `min_count` and smooth every category.
    pub fn build(analyzer: Arc<dyn Analyzer>, counts: FrequencyCounts, min_count: u64) -> Self {
        let FrequencyCounts {
            categories,
            mut vocabulary,
        } = counts;

        let before = vocabulary.len();
        let removed = vocabulary.prune(min_count);
        log::debug!(
            "pruned vocabulary from {before} to {} tokens ({removed} below {min_count} occurrences)",
            vocabulary.len()
        );

        let tables = categories
            .iter()
            .map(|counts| ProbabilityTable::build(counts, &vocabulary))
            .collect();

        Self::from_parts(analyzer, vocabulary, tables)
    }

    /// Assemble a model from a vocabulary and per-category tables.
    ///
    /// Tables are ordered by ascending category, which fixes the tie-break.
    pub fn from_parts(
        analyzer: Arc<dyn Analyzer>,
        vocabulary: Vocabulary,
        mut tables: Vec<ProbabilityTable>,
    ) -> Self {
        tables.sort_by_key(ProbabilityTable::category);
        let categories = tables.iter().map(ProbabilityTable::category).collect();
        NaiveBayesModel {
            analyzer,
            vocabulary,
            categories,
            tables,
            fallback_fills: AtomicUsize::new(0),
        }
    }

    /// Categories in scoring order (ascending).
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The pruned vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// The probability table of `category`.
    pub fn table(&self, category: Category) -> Option<&ProbabilityTable> {
        self.categories
            .binary_search(&category)
            .ok()
            .map(|position| &self.tables[position])
    }

    /// Current likelihood of `token` under `category`.
    pub fn probability(&self, token: &str, category: Category) -> Option<f64> {
        self.table(category).and_then(|table| table.get(token))
    }

    /// Number of table cells written by the fallback so far.
    pub fn fallback_fills(&self) -> usize {
        self.fallback_fills.load(Ordering::Relaxed)
    }

    /// Write [`FALLBACK_PROBABILITY`] for `token` into `category`'s table if
    /// the table has no entry, and return the entry's value.
    ///
    /// Returns `None` if the model has no such category.
    pub fn fill_missing(&self, token: &str, category: Category) -> Option<f64> {
        let table = self.table(category)?;
        Some(self.fill(table, token))
    }

    fn fill(&self, table: &ProbabilityTable, token: &str) -> f64 {
        let (probability, written) = table.fill(token);
        if written {
            self.fallback_fills.fetch_add(1, Ordering::Relaxed);
            log::warn!(
                "token {token:?} missing from category {} table, filled with {FALLBACK_PROBABILITY}",
                table.category
            );
        }
        probability
    }

    /// Log-likelihood score of `text` for every category, in category order.
    ///
    /// Tokens outside the vocabulary contribute nothing to any score.
    pub fn scores(&self, text: &str) -> Result<Vec<(Category, f64)>> {
        let mut scores = vec![0.0_f64; self.tables.len()];

        for token in self.analyzer.analyze(text)? {
            if !self.vocabulary.contains(&token.text) {
                continue;
            }
            for (score, table) in scores.iter_mut().zip(&self.tables) {
                let probability = match table.get(&token.text) {
                    Some(probability) => probability,
                    None => self.fill(table, &token.text),
                };
                *score += probability.ln();
            }
        }

        Ok(self.categories.iter().copied().zip(scores).collect())
    }

    /// The category with the highest score; the smallest category wins ties.
    pub fn classify(&self, text: &str) -> Result<Category> {
        let scores = self.scores(text)?;
        let mut scores = scores.into_iter();
        let Some((mut best, mut best_score)) = scores.next() else {
            return Err(NewsBayesError::degenerate_data(
                "cannot classify: the model has no categories",
            ));
        };
        for (category, score) in scores {
            if score > best_score {
                best = category;
                best_score = score;
            }
        }
        Ok(best)
    }

    /// Classify many texts on the rayon thread pool, preserving input order.
    pub fn classify_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Result<Vec<Category>> {
        texts
            .par_iter()
            .map(|text| self.classify(text.as_ref()))
            .collect()
    }
}

impl fmt::Debug for NaiveBayesModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaiveBayesModel")
            .field("analyzer", &self.analyzer.name())
            .field("vocabulary_size", &self.vocabulary.len())
            .field("categories", &self.categories)
            .field("fallback_fills", &self.fallback_fills())
            .finish()
    }
}
