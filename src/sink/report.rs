//! Console report sink

use crate::errors::{MapReduceError, Result};
use crate::types::ReducedPair;
use std::io::Write;

/// Write the ranked result as a plain-text report, one line per pair:
/// the word left-aligned in a 15-column field, then the count.
pub fn write_report<W: Write>(writer: &mut W, pairs: &[ReducedPair]) -> Result<()> {
    for pair in pairs {
        writeln!(writer, "{:<15} {}", pair.word, pair.count)
            .map_err(|err| MapReduceError::sink(err.to_string()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format() {
        let pairs = vec![ReducedPair::new("the", 3), ReducedPair::new("cat", 2)];
        let mut out = Vec::new();
        write_report(&mut out, &pairs).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "the             3\ncat             2\n");
    }

    #[test]
    fn test_long_words_not_truncated() {
        let pairs = vec![ReducedPair::new("antidisestablishmentarianism", 1)];
        let mut out = Vec::new();
        write_report(&mut out, &pairs).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "antidisestablishmentarianism 1\n");
    }

    #[test]
    fn test_empty_result_writes_nothing() {
        let mut out = Vec::new();
        write_report(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
