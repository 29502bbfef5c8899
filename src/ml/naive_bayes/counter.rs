//! Per-category token frequency counting over the training folds.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::corpus::document::Category;
use crate::corpus::partition::Folds;
use crate::error::Result;
use crate::ml::naive_bayes::vocabulary::Vocabulary;

/// Raw token counts observed for one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCounts {
    category: Category,
    counts: AHashMap<String, u64>,
    total: u64,
}

impl CategoryCounts {
    pub fn new(category: Category) -> Self {
        CategoryCounts {
            category,
            counts: AHashMap::new(),
            total: 0,
        }
    }

    fn record(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
            }
        }
        self.total += 1;
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Raw count of `token` for this category, if it was ever observed.
    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Total number of tokens counted for this category.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct tokens counted for this category.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}

/// Output of a counting pass: per-category counts plus the unpruned vocabulary.
#[derive(Clone, Debug)]
pub struct FrequencyCounts {
    /// One entry per category, in the order the categories were given.
    pub categories: Vec<CategoryCounts>,
    /// Global counts over all categories.
    pub vocabulary: Vocabulary,
}

/// Counts token occurrences per category over every fold but the held-out one.
#[derive(Clone)]
pub struct FrequencyCounter {
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for FrequencyCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrequencyCounter")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl FrequencyCounter {
    /// Create a counter tokenizing with `analyzer`, which must drop stop words.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        FrequencyCounter { analyzer }
    }

    /// Count tokens of documents in `categories` across all folds except `skip`.
    ///
    /// Documents whose label names no category in `categories` are ignored.
    /// Every counted occurrence also increments the global vocabulary once.
    pub fn count(
        &self,
        folds: &Folds,
        skip: usize,
        categories: &[Category],
    ) -> Result<FrequencyCounts> {
        let index: AHashMap<Category, usize> = categories
            .iter()
            .enumerate()
            .map(|(position, category)| (*category, position))
            .collect();
        let mut per_category: Vec<CategoryCounts> =
            categories.iter().map(|c| CategoryCounts::new(*c)).collect();
        let mut vocabulary = Vocabulary::new();

        for document in folds.training_documents(skip) {
            let Some(position) = document.category().and_then(|c| index.get(&c).copied()) else {
                continue;
            };
            let counts = &mut per_category[position];
            for token in self.analyzer.analyze(&document.text)? {
                vocabulary.record(&token.text);
                counts.record(&token.text);
            }
        }

        for counts in &per_category {
            log::debug!(
                "category {}: {} tokens, {} distinct",
                counts.category,
                counts.total,
                counts.distinct()
            );
        }

        Ok(FrequencyCounts {
            categories: per_category,
            vocabulary,
        })
    }
}
