//! Pipeline orchestration
//!
//! Composes the map, shuffle, reduce, and rank steps behind a single entry
//! point. The configuration is validated before any computation, so an
//! illegal partition count surfaces with no partial output.

use crate::errors::Result;
use crate::pipeline::mapper::map_records;
use crate::pipeline::rank::rank;
use crate::pipeline::reduce::reduce_partitions;
use crate::pipeline::shuffle::{partition, GroupSet};
use crate::types::{LineRecord, PipelineConfig, ReducedPair};

/// The word-count pipeline
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the default config (one partition,
    /// sequential reduce)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with a custom config
    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full pipeline over a batch of line records.
    ///
    /// Returns the ranked (word, count) sequence: count descending, ties in
    /// partition-concatenation order.
    pub fn run(&self, records: &[LineRecord]) -> Result<Vec<ReducedPair>> {
        self.config.validate()?;

        let emissions = map_records(records);
        let groups = GroupSet::collect(emissions);
        let partitions = partition(groups, self.config.partitions)?;
        let reduced = self
            .config
            .scoped(|| reduce_partitions(&partitions, self.config.parallel_reduce));
        Ok(rank(reduced))
    }
}

/// Convenience function: run the pipeline with a given partition count and
/// otherwise-default configuration
pub fn run_pipeline(records: &[LineRecord], partition_count: usize) -> Result<Vec<ReducedPair>> {
    Pipeline::with_config(PipelineConfig::default().with_partitions(partition_count)).run(records)
}
