//! Global token vocabulary with occurrence counts.

use ahash::AHashMap;

/// Mapping from token to its occurrence count across all training folds and
/// all categories.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    counts: AHashMap<String, u64>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`.
    pub fn record(&mut self, token: &str) {
        self.add(token, 1);
    }

    /// Count `count` occurrences of `token`.
    pub fn add(&mut self, token: &str, count: u64) {
        match self.counts.get_mut(token) {
            Some(existing) => *existing += count,
            None => {
                self.counts.insert(token.to_string(), count);
            }
        }
    }

    /// Remove every token seen fewer than `min_count` times.
    ///
    /// Returns the number of tokens removed.
    pub fn prune(&mut self, min_count: u64) -> usize {
        let before = self.counts.len();
        self.counts.retain(|_, count| *count >= min_count);
        before - self.counts.len()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Global count of `token`, or 0 if it is not in the vocabulary.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over tokens in unspecified order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Iterate over `(token, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut vocabulary = Vocabulary::new();
        for (token, count) in iter {
            vocabulary.add(token.as_ref(), count);
        }
        vocabulary
    }
}
