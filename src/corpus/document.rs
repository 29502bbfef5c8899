//! Documents, categories and label validation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A category identifier, discovered from the integer-valued labels of a corpus.
pub type Category = i64;

/// A labelled text document.
///
/// The label is kept as it appeared in the source. Only labels that parse as
/// an integer name a category; other documents never match a category during
/// training.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The document text.
    pub text: String,
    /// The raw label value.
    pub label: String,
}

impl Document {
    /// Create a new document.
    pub fn new<T: Into<String>, L: Into<String>>(text: T, label: L) -> Self {
        Document {
            text: text.into(),
            label: label.into(),
        }
    }

    /// Create a document labelled with a category identifier.
    pub fn with_category<T: Into<String>>(text: T, category: Category) -> Self {
        Document::new(text, category.to_string())
    }

    /// The category this document belongs to, if its label is integer-coercible.
    pub fn category(&self) -> Option<Category> {
        self.label.trim().parse().ok()
    }
}

/// Result of validating the labels of a corpus.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSummary {
    /// Distinct categories in ascending order.
    pub categories: Vec<Category>,
    /// Documents whose label is integer-coercible.
    pub numeric: usize,
    /// Documents whose label is not.
    pub non_numeric: usize,
}

impl LabelSummary {
    /// Classify every label as numeric or non-numeric and collect the categories.
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut categories = BTreeSet::new();
        let mut numeric = 0;
        let mut non_numeric = 0;

        for document in documents {
            match document.category() {
                Some(category) => {
                    categories.insert(category);
                    numeric += 1;
                }
                None => non_numeric += 1,
            }
        }

        LabelSummary {
            categories: categories.into_iter().collect(),
            numeric,
            non_numeric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!(Document::new("text", "1").category(), Some(1));
        assert_eq!(Document::new("text", " 0 ").category(), Some(0));
        assert_eq!(Document::new("text", "-3").category(), Some(-3));
        assert_eq!(Document::new("text", "fake").category(), None);
        assert_eq!(Document::new("text", "1.5").category(), None);
        assert_eq!(Document::new("text", "").category(), None);
        assert_eq!(Document::with_category("text", 7).label, "7");
    }

    #[test]
    fn test_label_summary() {
        let documents = vec![
            Document::new("a", "1"),
            Document::new("b", "0"),
            Document::new("c", "label"),
            Document::new("d", "1"),
            Document::new("e", "2"),
        ];

        let summary = LabelSummary::from_documents(&documents);
        assert_eq!(summary.categories, vec![0, 1, 2]);
        assert_eq!(summary.numeric, 4);
        assert_eq!(summary.non_numeric, 1);
    }

    #[test]
    fn test_label_summary_empty() {
        let summary = LabelSummary::from_documents(&[]);
        assert!(summary.categories.is_empty());
        assert_eq!(summary, LabelSummary::default());
    }
}
