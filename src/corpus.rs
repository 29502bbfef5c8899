//! Corpus handling: documents, label validation, sampling and fold partitioning.
//!
//! ```text
//! CSV → CorpusReader → Vec<Document> → shuffle → downsample → BucketPartitioner → Folds
//! ```

pub mod document;
pub mod partition;
pub mod reader;
pub mod sampling;

pub use document::{Category, Document, LabelSummary};
pub use partition::{BucketPartitioner, FOLD_COUNT, Fold, Folds};
pub use reader::{CorpusReader, TextEncoding, read_stopwords};
pub use sampling::{downsample, shuffle};
