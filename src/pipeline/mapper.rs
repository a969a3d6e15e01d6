//! Map step: line records to unit-count emissions
//!
//! Pure functions with no shared state. Each record maps independently;
//! emissions from a single record preserve left-to-right token order.

use crate::types::{Emission, LineRecord};

/// Map one line record to its emissions.
///
/// Splits the normalized text on runs of whitespace; every non-empty token
/// becomes one unit-count emission. Empty text yields no emissions.
pub fn map_record(record: &LineRecord) -> Vec<Emission> {
    record.text.split_whitespace().map(Emission::unit).collect()
}

/// Map a batch of records, flattening emissions in record order.
///
/// This is the "collected across all nodes" view the shuffle step consumes:
/// one logical mapper per record, results concatenated.
pub fn map_records(records: &[LineRecord]) -> Vec<Emission> {
    let emissions: Vec<Emission> = records.iter().flat_map(map_record).collect();
    tracing::debug!(
        records = records.len(),
        emissions = emissions.len(),
        "map step complete"
    );
    emissions
}
