//! Bar chart sink
//!
//! Renders the top-K pairs as a horizontal bar chart in plain text, bars
//! scaled to the largest count. Terminal-friendly, no image backend.

use crate::errors::{MapReduceError, Result};
use crate::types::ReducedPair;
use std::io::Write;

/// Default number of words charted
pub const DEFAULT_TOP_N: usize = 12;

/// Maximum bar width in characters
const BAR_WIDTH: usize = 40;

/// Write a bar chart of the `top_n` most frequent words.
///
/// Pairs are charted in their ranked order; passing more than `pairs.len()`
/// simply charts everything.
pub fn write_chart<W: Write>(writer: &mut W, pairs: &[ReducedPair], top_n: usize) -> Result<()> {
    let shown = &pairs[..top_n.min(pairs.len())];
    let max_count = shown.iter().map(|p| p.count).max().unwrap_or(0);
    if max_count == 0 {
        return Ok(());
    }

    writeln!(writer, "Occurrences of the {} most frequent words", shown.len())
        .map_err(|err| MapReduceError::sink(err.to_string()))?;
    for pair in shown {
        // At least one cell for any non-zero count
        let cells = ((pair.count * BAR_WIDTH as u64) / max_count).max(1) as usize;
        writeln!(writer, "{:<15} {:>6} {}", pair.word, pair.count, "█".repeat(cells))
            .map_err(|err| MapReduceError::sink(err.to_string()))?;
    }
    Ok(())
}
