//! Flat-file corpus and stop word loading.
//!
//! A corpus is a CSV file whose first column holds the document text and
//! whose second column holds the label:
//! ```csv
//! text,label
//! "Senate passes the budget bill",1
//! "Aliens endorse presidential candidate",0
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use clap::ValueEnum;
use csv::{ByteRecord, ReaderBuilder};
use serde::{Deserialize, Serialize};

use crate::corpus::document::Document;
use crate::error::{NewsBayesError, Result};

/// Character encoding of a corpus file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum TextEncoding {
    /// UTF-8; invalid sequences are replaced with U+FFFD
    #[default]
    Utf8,
    /// ISO-8859-1, where every byte is one code point
    Latin1,
}

impl TextEncoding {
    fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            TextEncoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}

/// Reads `(text, label)` documents from CSV input.
#[derive(Clone, Debug)]
pub struct CorpusReader {
    has_headers: bool,
    encoding: TextEncoding,
    delimiter: u8,
    text_column: usize,
    label_column: usize,
}

impl Default for CorpusReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusReader {
    /// Create a reader for comma-separated UTF-8 input with a header row.
    pub fn new() -> Self {
        CorpusReader {
            has_headers: true,
            encoding: TextEncoding::Utf8,
            delimiter: b',',
            text_column: 0,
            label_column: 1,
        }
    }

    /// Set whether the first row is a header to skip.
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Set the input encoding.
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set a custom delimiter character.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the columns holding the text and the label.
    pub fn with_columns(mut self, text_column: usize, label_column: usize) -> Self {
        self.text_column = text_column;
        self.label_column = label_column;
        self
    }

    /// Read all documents from a file.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Document>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            NewsBayesError::corpus(format!("cannot open {}: {e}", path.display()))
        })?;
        self.read(file)
    }

    /// Read all documents from any reader.
    pub fn read<R: Read>(&self, input: R) -> Result<Vec<Document>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(input);

        let first_row = if self.has_headers { 2 } else { 1 };
        let mut documents = Vec::new();
        let mut record = ByteRecord::new();
        let mut row = first_row;

        while reader.read_byte_record(&mut record)? {
            let text = record.get(self.text_column);
            let label = record.get(self.label_column);
            match (text, label) {
                (Some(text), Some(label)) => documents.push(Document::new(
                    self.encoding.decode(text),
                    self.encoding.decode(label),
                )),
                _ => {
                    return Err(NewsBayesError::corpus(format!(
                        "row {row} has {} column(s), expected columns {} and {}",
                        record.len(),
                        self.text_column,
                        self.label_column
                    )));
                }
            }
            row += 1;
        }

        log::debug!("read {} documents", documents.len());
        Ok(documents)
    }
}

/// Load a stop word list with one word per line.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
pub fn read_stopwords<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() && !word.starts_with('#') {
            words.push(word.to_string());
        }
    }
    Ok(words)
}
