//! Contiguous fold partitioning.
//!
//! The corpus is cut into exactly [`FOLD_COUNT`] folds of `floor(N / 10)`
//! documents each, in input order. The last `N mod 10` documents belong to no
//! fold and take part in neither training nor testing.

use serde::{Deserialize, Serialize};

use crate::corpus::document::Document;

/// Number of folds a corpus is partitioned into.
pub const FOLD_COUNT: usize = 10;

/// One contiguous slice of the corpus.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fold {
    number: usize,
    documents: Vec<Document>,
}

impl Fold {
    /// The 1-based fold number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// The documents in this fold, in corpus order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// The fixed-length array of folds produced by [`BucketPartitioner`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Folds {
    folds: [Fold; FOLD_COUNT],
    dropped: usize,
}

impl Folds {
    /// Get a fold by its 1-based number.
    pub fn get(&self, number: usize) -> Option<&Fold> {
        number.checked_sub(1).and_then(|index| self.folds.get(index))
    }

    /// Iterate over all folds in order.
    pub fn iter(&self) -> impl Iterator<Item = &Fold> {
        self.folds.iter()
    }

    /// Documents of every fold except `skip` (1-based), in corpus order.
    pub fn training_documents(&self, skip: usize) -> impl Iterator<Item = &Document> {
        self.folds
            .iter()
            .filter(move |fold| fold.number != skip)
            .flat_map(|fold| fold.documents.iter())
    }

    /// Number of documents in each fold.
    pub fn fold_size(&self) -> usize {
        self.folds[0].len()
    }

    /// Number of documents assigned to some fold.
    pub fn assigned(&self) -> usize {
        self.fold_size() * FOLD_COUNT
    }

    /// Number of trailing documents that were not assigned to any fold.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Splits a document sequence into [`FOLD_COUNT`] contiguous folds.
#[derive(Clone, Copy, Debug, Default)]
pub struct BucketPartitioner;

impl BucketPartitioner {
    pub fn new() -> Self {
        BucketPartitioner
    }

    /// Partition `documents` into folds, dropping the `N mod 10` remainder.
    pub fn partition(&self, documents: Vec<Document>) -> Folds {
        let total = documents.len();
        let fold_size = total / FOLD_COUNT;
        let dropped = total - fold_size * FOLD_COUNT;

        let mut remaining = documents.into_iter();
        let folds = std::array::from_fn(|index| Fold {
            number: index + 1,
            documents: remaining.by_ref().take(fold_size).collect(),
        });

        if dropped > 0 {
            log::warn!(
                "{dropped} trailing document(s) do not fill a fold and are excluded from training and testing"
            );
        }

        Folds { folds, dropped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(n: usize) -> Vec<Document> {
        (0..n)
            .map(|i| Document::new(format!("doc{i}"), (i % 2).to_string()))
            .collect()
    }

    #[test]
    fn test_partition_drops_remainder() {
        let folds = BucketPartitioner::new().partition(corpus(105));

        assert_eq!(folds.iter().count(), FOLD_COUNT);
        assert!(folds.iter().all(|fold| fold.len() == 10));
        assert_eq!(folds.assigned(), 100);
        assert_eq!(folds.dropped(), 5);

        let last = folds.get(10).unwrap();
        assert_eq!(last.documents().last().unwrap().text, "doc99");
    }

    #[test]
    fn test_partition_is_contiguous_and_ordered() {
        let folds = BucketPartitioner::new().partition(corpus(30));

        for (index, fold) in folds.iter().enumerate() {
            assert_eq!(fold.number(), index + 1);
            let texts: Vec<_> = fold.documents().iter().map(|d| d.text.clone()).collect();
            let expected: Vec<_> = (index * 3..index * 3 + 3).map(|i| format!("doc{i}")).collect();
            assert_eq!(texts, expected);
        }
    }

    #[test]
    fn test_small_corpus_has_empty_folds() {
        let folds = BucketPartitioner::new().partition(corpus(7));
        assert_eq!(folds.fold_size(), 0);
        assert!(folds.iter().all(Fold::is_empty));
        assert_eq!(folds.dropped(), 7);
    }

    #[test]
    fn test_fold_lookup_is_one_based() {
        let folds = BucketPartitioner::new().partition(corpus(20));
        assert!(folds.get(0).is_none());
        assert!(folds.get(11).is_none());
        assert_eq!(folds.get(1).unwrap().documents()[0].text, "doc0");
    }

    #[test]
    fn test_training_documents_skip_one_fold() {
        let folds = BucketPartitioner::new().partition(corpus(20));
        let training: Vec<_> = folds.training_documents(2).map(|d| d.text.as_str()).collect();

        assert_eq!(training.len(), 18);
        assert!(!training.contains(&"doc2"));
        assert!(!training.contains(&"doc3"));
        assert_eq!(training[0], "doc0");
        assert_eq!(training[2], "doc4");
    }
}
