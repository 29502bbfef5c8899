//! Corpus shuffling and down-sampling, applied before partitioning.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::corpus::document::Document;
use crate::error::{NewsBayesError, Result};

/// Shuffle documents in place. A seed makes the order reproducible.
pub fn shuffle(documents: &mut [Document], seed: Option<u64>) {
    match seed {
        Some(seed) => documents.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => documents.shuffle(&mut rand::rng()),
    }
}

/// Keep the first `round(N × fraction)` documents.
///
/// Rounding is half-to-even, so 25 documents at 0.1 keep 2, not 3.
pub fn downsample(mut documents: Vec<Document>, fraction: f64) -> Result<Vec<Document>> {
    if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
        return Err(NewsBayesError::invalid_config(format!(
            "datasize must be in (0, 1], got {fraction}"
        )));
    }

    let bound = (documents.len() as f64 * fraction).round_ties_even() as usize;
    documents.truncate(bound);
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(n: usize) -> Vec<Document> {
        (0..n).map(|i| Document::new(format!("doc{i}"), "0")).collect()
    }

    #[test]
    fn test_downsample_keeps_prefix() {
        let kept = downsample(corpus(100), 0.2).unwrap();
        assert_eq!(kept.len(), 20);
        assert_eq!(kept[19].text, "doc19");
    }

    #[test]
    fn test_downsample_rounds_half_to_even() {
        assert_eq!(downsample(corpus(25), 0.1).unwrap().len(), 2);
        assert_eq!(downsample(corpus(35), 0.1).unwrap().len(), 4);
        assert_eq!(downsample(corpus(7), 1.0).unwrap().len(), 7);
    }

    #[test]
    fn test_downsample_rejects_out_of_range() {
        for fraction in [0.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            let err = downsample(corpus(10), fraction).unwrap_err();
            assert!(err.is_invalid_config());
        }
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let mut first = corpus(50);
        let mut second = corpus(50);
        shuffle(&mut first, Some(42));
        shuffle(&mut second, Some(42));
        assert_eq!(first, second);

        let mut sorted: Vec<_> = first.iter().map(|d| d.text.clone()).collect();
        sorted.sort();
        let mut expected: Vec<_> = corpus(50).into_iter().map(|d| d.text).collect();
        expected.sort();
        assert_eq!(sorted, expected);
    }
}
