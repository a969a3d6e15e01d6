//! Line tokenization
//!
//! Turns raw text into an ordered sequence of normalized [`LineRecord`]s:
//! each line is trimmed, lowercased, and stripped of punctuation. Blank
//! results are retained; they produce zero emissions downstream, which
//! keeps line indices meaningful.

use crate::errors::{MapReduceError, Result};
use crate::types::LineRecord;
use std::fs;
use std::path::Path;

/// The fixed ASCII punctuation set removed during normalization.
///
/// Matches `string.punctuation`: every ASCII mark that is neither
/// whitespace nor alphanumeric.
pub const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A line tokenizer with an injectable punctuation set
#[derive(Debug, Clone)]
pub struct LineTokenizer {
    /// Characters removed from every line
    punctuation: String,
}

impl Default for LineTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineTokenizer {
    /// Create a tokenizer using [`ASCII_PUNCTUATION`]
    pub fn new() -> Self {
        Self {
            punctuation: ASCII_PUNCTUATION.to_string(),
        }
    }

    /// Replace the punctuation set
    pub fn with_punctuation(mut self, punctuation: impl Into<String>) -> Self {
        self.punctuation = punctuation.into();
        self
    }

    /// Tokenize raw text into line records in original line order.
    ///
    /// Indices are assigned before normalization, so they always equal the
    /// original line position even when normalization empties a line.
    pub fn tokenize(&self, text: &str) -> Vec<LineRecord> {
        text.lines()
            .enumerate()
            .map(|(index, line)| LineRecord::new(index, self.normalize_line(line)))
            .collect()
    }

    /// Read a file and tokenize its contents.
    ///
    /// Fails with [`MapReduceError::Io`] when the file cannot be opened or
    /// read; this is fatal and not retried.
    pub fn tokenize_path(&self, path: impl AsRef<Path>) -> Result<Vec<LineRecord>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|err| MapReduceError::io(path.display().to_string(), &err))?;
        Ok(self.tokenize(&text))
    }

    /// Normalize one line: trim, then lowercase, then strip punctuation.
    ///
    /// The order matters: stripping a punctuation character may leave
    /// interior or trailing whitespace, which the whitespace-splitting
    /// mapper absorbs.
    fn normalize_line(&self, line: &str) -> String {
        line.trim()
            .to_lowercase()
            .chars()
            .filter(|c| !self.punctuation.contains(*c))
            .collect()
    }
}
