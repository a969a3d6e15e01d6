//! Core types for mapcount
//!
//! This module defines the fundamental data structures flowing through the
//! pipeline (line records, emissions, groups, partitions, reduced pairs)
//! and the pipeline configuration.

use crate::errors::{MapReduceError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Line records
// ============================================================================

/// A normalized input line, the unit of work for one mapper invocation.
///
/// The index is the original line position. It is unique and monotonic in
/// input order but not required to be contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    /// Original line position in the input
    pub index: usize,
    /// Normalized text: trimmed, lowercased, punctuation stripped.
    /// May be empty; empty records simply produce no emissions.
    pub text: String,
}

impl LineRecord {
    /// Create a new line record
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

// ============================================================================
// Emissions and groups
// ============================================================================

/// One (word, count) pair produced by the map step.
///
/// The value is always 1 in the current word-count use, but the reduce
/// contract sums rather than counting, so the type carries it explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emission {
    /// The word (non-empty, contiguous non-whitespace characters)
    pub key: String,
    /// Unit count contributed by this occurrence
    pub value: u64,
}

impl Emission {
    /// Create an emission with an explicit value
    pub fn new(key: impl Into<String>, value: u64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Create a unit-count emission, the shape the mapper produces
    pub fn unit(key: impl Into<String>) -> Self {
        Self::new(key, 1)
    }
}

/// All emissions sharing a key, collected before reduction.
///
/// Values are kept in emission arrival order. The order does not affect the
/// reduced sum, but it makes intermediate state reproducible and testable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// The shared key
    pub key: String,
    /// One entry per emission with this key, in arrival order
    pub values: Vec<u64>,
}

impl Group {
    /// Create a group seeded with a single value
    pub fn new(key: impl Into<String>, value: u64) -> Self {
        Self {
            key: key.into(),
            values: vec![value],
        }
    }
}

// ============================================================================
// Partitions
// ============================================================================

/// A disjoint subset of groups assigned to one logical reduce unit.
///
/// Groups are stored in first-seen key order; that iteration order is part
/// of the observable contract (it feeds the final tie-break), so the
/// representation is an ordered vector rather than a hash map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Partition id in `[0, partition_count)`
    pub id: usize,
    /// Groups owned exclusively by this partition
    pub groups: Vec<Group>,
}

impl Partition {
    /// Create an empty partition
    pub fn new(id: usize) -> Self {
        Self {
            id,
            groups: Vec::new(),
        }
    }

    /// Iterate the keys owned by this partition
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.as_str())
    }

    /// Number of groups in this partition
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if this partition holds no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

// ============================================================================
// Reduced output
// ============================================================================

/// One reduced (word, total count) pair, globally unique after the merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducedPair {
    /// The word
    pub word: String,
    /// Sum of the group's values
    pub count: u64,
}

impl ReducedPair {
    /// Create a reduced pair
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

fn default_partitions() -> usize {
    1
}

/// Configuration for the word-count pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Number of simulated reduce partitions (must be at least 1)
    #[serde(default = "default_partitions")]
    pub partitions: usize,
    /// Run the reduce step on parallel tasks, one per partition
    #[serde(default)]
    pub parallel_reduce: bool,
    /// Thread cap for parallel reduce (None = Rayon default pool)
    #[serde(default)]
    pub max_threads: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            partitions: default_partitions(),
            parallel_reduce: false,
            max_threads: None,
        }
    }
}

impl PipelineConfig {
    /// Set the number of reduce partitions
    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions;
        self
    }

    /// Enable or disable parallel reduce
    pub fn with_parallel_reduce(mut self, parallel: bool) -> Self {
        self.parallel_reduce = parallel;
        self
    }

    /// Cap the number of threads used by parallel reduce
    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = Some(max_threads);
        self
    }

    /// Validate the configuration.
    ///
    /// Runs before any computation: an illegal partition count must surface
    /// immediately, with no partial output produced.
    pub fn validate(&self) -> Result<()> {
        if self.partitions == 0 {
            return Err(MapReduceError::invalid_partition_count(self.partitions));
        }
        Ok(())
    }

    /// Build a scoped Rayon thread pool matching this config.
    ///
    /// Returns `None` when no thread limit is set (use global pool).
    pub fn build_thread_pool(&self) -> Option<rayon::ThreadPool> {
        self.max_threads.map(|n| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .expect("failed to build Rayon thread pool")
        })
    }

    /// Execute `f` within a scoped Rayon thread pool matching this config.
    ///
    /// If no thread limit is set, `f` runs directly (using the global pool).
    /// Otherwise any `par_iter()` within `f` uses the scoped pool via
    /// [`rayon::ThreadPool::install`].
    pub fn scoped<R: Send>(&self, f: impl FnOnce() -> R + Send) -> R {
        match self.build_thread_pool() {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_unit() {
        let e = Emission::unit("word");
        assert_eq!(e.key, "word");
        assert_eq!(e.value, 1);
    }

    #[test]
    fn test_partition_keys() {
        let partition = Partition {
            id: 0,
            groups: vec![Group::new("the", 1), Group::new("dog", 1)],
        };
        let keys: Vec<&str> = partition.keys().collect();
        assert_eq!(keys, ["the", "dog"]);
        assert_eq!(partition.len(), 2);
        assert!(!partition.is_empty());
    }

    #[test]
    fn test_config_default_is_valid() {
        let config = PipelineConfig::default();
        assert_eq!(config.partitions, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_partitions() {
        let config = PipelineConfig::default().with_partitions(0);
        let err = config.validate().unwrap_err();
        assert!(err.is_invalid_partition_count());
    }

    #[test]
    fn test_config_builder() {
        let config = PipelineConfig::default()
            .with_partitions(10)
            .with_parallel_reduce(true)
            .with_max_threads(2);
        assert_eq!(config.partitions, 10);
        assert!(config.parallel_reduce);
        assert_eq!(config.max_threads, Some(2));
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: PipelineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PipelineConfig::default());

        let config: PipelineConfig =
            serde_json::from_str(r#"{"partitions": 4, "parallel_reduce": true}"#).unwrap();
        assert_eq!(config.partitions, 4);
        assert!(config.parallel_reduce);
        assert_eq!(config.max_threads, None);
    }

    #[test]
    fn test_scoped_thread_cap() {
        let config = PipelineConfig::default().with_max_threads(2);
        let threads = config.scoped(rayon::current_num_threads);
        assert_eq!(threads, 2);
    }
}
