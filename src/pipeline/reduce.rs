//! Reduce step: sum each group's values into a final count
//!
//! Reduction is a pure function of a group's value list, applied
//! independently per partition. Partitions share no mutable state after the
//! shuffle completes, so they may reduce on parallel tasks; results are
//! always reassembled in ascending partition-id order before ranking.

use crate::types::{Group, Partition, ReducedPair};
use rayon::prelude::*;

/// Reduce one group to its (word, total) pair.
///
/// Sums the value list rather than taking its length: values are unit
/// counts in the current word-count use, but the contract is general.
pub fn reduce_group(group: &Group) -> ReducedPair {
    ReducedPair {
        word: group.key.clone(),
        count: group.values.iter().sum(),
    }
}

/// Reduce every group of one partition, in group iteration order
pub fn reduce_partition(partition: &Partition) -> Vec<ReducedPair> {
    partition.groups.iter().map(reduce_group).collect()
}

/// Reduce all partitions and concatenate their outputs in ascending
/// partition-id order.
///
/// With `parallel` set, each partition reduces on its own Rayon task; the
/// order-preserving collect performs the join, so the concatenation is
/// identical to the sequential path.
pub fn reduce_partitions(partitions: &[Partition], parallel: bool) -> Vec<ReducedPair> {
    let reduced: Vec<ReducedPair> = if parallel {
        partitions
            .par_iter()
            .map(reduce_partition)
            .flatten_iter()
            .collect()
    } else {
        partitions.iter().flat_map(reduce_partition).collect()
    };

    tracing::debug!(
        partitions = partitions.len(),
        pairs = reduced.len(),
        parallel,
        "reduce step complete"
    );
    reduced
}
