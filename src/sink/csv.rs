//! CSV sink
//!
//! One row per reduced pair under a `word,counts` header.

use crate::errors::{MapReduceError, Result};
use crate::types::ReducedPair;
use std::fs::File;
use std::io;
use std::path::Path;

/// Header fields of the emitted table
const HEADER: [&str; 2] = ["word", "counts"];

/// Write the ranked result as CSV to an arbitrary writer
pub fn write_csv<W: io::Write>(writer: W, pairs: &[ReducedPair]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for pair in pairs {
        csv_writer.write_record([pair.word.as_str(), &pair.count.to_string()])?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write the ranked result as CSV to a file path
pub fn write_csv_path(path: impl AsRef<Path>, pairs: &[ReducedPair]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|err| MapReduceError::sink(format!("{}: {err}", path.display())))?;
    write_csv(file, pairs)
}
