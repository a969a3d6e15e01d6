//! # mapcount
//!
//! A single-machine simulation of the classic MapReduce word-count
//! pipeline: partition input lines, map each to (word, 1) pairs, shuffle
//! and group by key across a configurable number of simulated reduce
//! partitions, reduce each group to a total count, and emit a ranked
//! word-frequency report.
//!
//! The "nodes" are a logical partitioning abstraction, not physical
//! workers: partitions share no mutable state after the shuffle, so the
//! reduce step may optionally run on parallel tasks, with results joined
//! in partition-id order to keep the output deterministic.
//!
//! ## Example
//!
//! ```
//! use mapcount::{run_pipeline, LineTokenizer};
//!
//! let tokenizer = LineTokenizer::new();
//! let records = tokenizer.tokenize("the cat\nthe dog\nthe cat");
//! let ranked = run_pipeline(&records, 2).unwrap();
//!
//! assert_eq!(ranked[0].word, "the");
//! assert_eq!(ranked[0].count, 3);
//! ```

pub mod errors;
pub mod input;
pub mod pipeline;
pub mod sink;
pub mod types;

// Re-export commonly used types
pub use errors::{MapReduceError, Result};
pub use types::{Emission, Group, LineRecord, Partition, PipelineConfig, ReducedPair};

// Re-export main functionality
pub use input::tokenizer::{LineTokenizer, ASCII_PUNCTUATION};
pub use pipeline::{
    map_record, map_records, partition, rank, reduce_group, reduce_partition, reduce_partitions,
    run_pipeline, GroupSet, Pipeline,
};
pub use sink::{write_chart, write_csv, write_csv_path, write_report};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
