//! Regex replace char filter.

use regex::Regex;

use super::CharFilter;
use crate::error::{NewsBayesError, Result};

/// A char filter that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    /// Create a filter that replaces each occurrence of any of `chars`.
    ///
    /// Every matched character is replaced individually, so a run of three
    /// matched characters becomes three copies of `replacement`.
    ///
    /// An empty character set is an analysis error.
    pub fn from_chars(chars: &[char], replacement: &str) -> Result<Self> {
        if chars.is_empty() {
            return Err(NewsBayesError::analysis(
                "pattern_replace needs at least one character to match",
            ));
        }
        let class: String = chars
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        Self::new(&format!("[{class}]"), replacement)
    }

    /// The replacement string inserted for each match.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, regex::NoExpand(&self.replacement))
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"\d+", "NUM").unwrap();
        assert_eq!(filter.filter("Year 2024"), "Year NUM");
    }

    #[test]
    fn test_remove_pattern() {
        let filter = PatternReplaceCharFilter::new(r"-", "").unwrap();
        assert_eq!(filter.filter("123-456-789"), "123456789");
    }

    #[test]
    fn test_from_chars_escapes_class_metacharacters() {
        let filter = PatternReplaceCharFilter::from_chars(&['[', ']', '-', '^', '\\'], " ").unwrap();
        assert_eq!(filter.filter("a[b]c-d^e\\f"), "a b c d e f");
        assert_eq!(filter.filter("--"), "  ");
    }

    #[test]
    fn test_from_chars_rejects_empty_set() {
        let err = PatternReplaceCharFilter::from_chars(&[], " ").unwrap_err();
        assert!(matches!(err, NewsBayesError::Analysis(_)));
    }

    #[test]
    fn test_replacement_is_literal() {
        let filter = PatternReplaceCharFilter::from_chars(&['x'], "$0").unwrap();
        assert_eq!(filter.filter("axb"), "a$0b");
        assert_eq!(filter.replacement(), "$0");
    }
}
