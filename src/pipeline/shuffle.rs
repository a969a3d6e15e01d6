//! Shuffle step: group emissions by key and assign keys to partitions
//!
//! This is the heart of the pipeline. Two properties are contractual:
//!
//! 1. **First-seen key order.** Groups are kept in the order each key's
//!    first emission arrived. The order feeds both partition assignment and
//!    the final ranking tie-break, so it must survive the shuffle intact.
//! 2. **Round-robin assignment.** The key with first-seen rank `r` goes to
//!    partition `r % n`. Partition membership is a function of insertion
//!    order and `n`, not of key content. A hash partitioner would change
//!    observable partition contents and is not a valid substitute here
//!    (production systems hash; this simulation trades that for
//!    reproducible partition contents).

use crate::errors::{MapReduceError, Result};
use crate::types::{Emission, Group, Partition};
use rustc_hash::FxHashMap;

/// An accumulator of groups in first-seen key order.
///
/// Keys are registered once, into a slot that never moves; later emissions
/// with the same key append to the existing group. Lookup goes through an
/// `FxHashMap` while order lives in the group vector, so iteration is
/// always first-seen order regardless of hash layout.
#[derive(Debug, Default)]
pub struct GroupSet {
    /// Maps keys to their slot in `groups`
    slot_by_key: FxHashMap<String, usize>,
    /// Groups in first-seen key order
    groups: Vec<Group>,
}

impl GroupSet {
    /// Create an empty group set
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a full emission sequence into grouped form
    pub fn collect(emissions: impl IntoIterator<Item = Emission>) -> Self {
        let mut set = Self::new();
        for emission in emissions {
            set.push(emission);
        }
        set
    }

    /// Fold one emission into its group, registering the key on first sight
    pub fn push(&mut self, emission: Emission) {
        match self.slot_by_key.get(&emission.key) {
            Some(&slot) => self.groups[slot].values.push(emission.value),
            None => {
                let slot = self.groups.len();
                self.slot_by_key.insert(emission.key.clone(), slot);
                self.groups.push(Group::new(emission.key, emission.value));
            }
        }
    }

    /// First-seen rank of a key, if it has been registered
    pub fn rank_of(&self, key: &str) -> Option<usize> {
        self.slot_by_key.get(key).copied()
    }

    /// Groups in first-seen key order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Consume the set, yielding groups in first-seen key order
    pub fn into_groups(self) -> Vec<Group> {
        self.groups
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no keys have been registered
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Assign grouped keys to `partition_count` partitions round-robin.
///
/// The key with first-seen rank `r` lands in partition `r % partition_count`.
/// A count larger than the number of distinct keys leaves the excess
/// partitions valid and empty; an empty group set yields all-empty
/// partitions. A count of zero fails with
/// [`MapReduceError::InvalidPartitionCount`], since no legal partitioning
/// exists.
pub fn partition(groups: GroupSet, partition_count: usize) -> Result<Vec<Partition>> {
    if partition_count == 0 {
        return Err(MapReduceError::invalid_partition_count(partition_count));
    }

    let key_count = groups.len();
    let mut partitions: Vec<Partition> = (0..partition_count).map(Partition::new).collect();
    for (rank, group) in groups.into_groups().into_iter().enumerate() {
        partitions[rank % partition_count].groups.push(group);
    }

    tracing::debug!(
        keys = key_count,
        partitions = partition_count,
        "shuffle step complete"
    );
    Ok(partitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emissions(keys: &[&str]) -> Vec<Emission> {
        keys.iter().copied().map(Emission::unit).collect()
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let set = GroupSet::collect(emissions(&["the", "cat", "the", "dog", "the", "cat"]));

        let keys: Vec<&str> = set.groups().iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["the", "cat", "dog"]);
        assert_eq!(set.groups()[0].values, [1, 1, 1]);
        assert_eq!(set.groups()[1].values, [1, 1]);
        assert_eq!(set.groups()[2].values, [1]);
    }

    #[test]
    fn test_rank_of() {
        let set = GroupSet::collect(emissions(&["the", "cat", "the", "dog"]));

        assert_eq!(set.rank_of("the"), Some(0));
        assert_eq!(set.rank_of("cat"), Some(1));
        assert_eq!(set.rank_of("dog"), Some(2));
        assert_eq!(set.rank_of("fox"), None);
    }

    #[test]
    fn test_values_kept_in_arrival_order() {
        let mut set = GroupSet::new();
        set.push(Emission::new("w", 1));
        set.push(Emission::new("w", 2));
        set.push(Emission::new("w", 3));

        assert_eq!(set.groups()[0].values, [1, 2, 3]);
    }

    #[test]
    fn test_round_robin_assignment() {
        let set = GroupSet::collect(emissions(&["a", "b", "c", "d", "e"]));
        let partitions = partition(set, 2).unwrap();

        assert_eq!(partitions.len(), 2);
        let keys0: Vec<&str> = partitions[0].keys().collect();
        let keys1: Vec<&str> = partitions[1].keys().collect();
        assert_eq!(keys0, ["a", "c", "e"]);
        assert_eq!(keys1, ["b", "d"]);
    }

    #[test]
    fn test_assignment_ignores_key_content() {
        // Same keys, different arrival order: membership follows rank only
        let set = GroupSet::collect(emissions(&["e", "d", "c", "b", "a"]));
        let partitions = partition(set, 2).unwrap();

        let keys0: Vec<&str> = partitions[0].keys().collect();
        assert_eq!(keys0, ["e", "c", "a"]);
    }

    #[test]
    fn test_excess_partitions_are_empty() {
        let set = GroupSet::collect(emissions(&["one", "two"]));
        let partitions = partition(set, 5).unwrap();

        assert_eq!(partitions.len(), 5);
        assert_eq!(partitions[0].len(), 1);
        assert_eq!(partitions[1].len(), 1);
        assert!(partitions[2..].iter().all(Partition::is_empty));
    }

    #[test]
    fn test_empty_emissions_yield_empty_partitions() {
        let partitions = partition(GroupSet::new(), 3).unwrap();

        assert_eq!(partitions.len(), 3);
        assert!(partitions.iter().all(Partition::is_empty));
    }

    #[test]
    fn test_zero_partitions_rejected() {
        let set = GroupSet::collect(emissions(&["word"]));
        let err = partition(set, 0).unwrap_err();

        assert!(err.is_invalid_partition_count());
    }

    #[test]
    fn test_partition_ids_ascending() {
        let partitions = partition(GroupSet::new(), 4).unwrap();
        let ids: Vec<usize> = partitions.iter().map(|p| p.id).collect();

        assert_eq!(ids, [0, 1, 2, 3]);
    }

    #[test]
    fn test_keys_disjoint_and_complete() {
        let set = GroupSet::collect(emissions(&["a", "b", "c", "d", "e", "a", "c"]));
        let partitions = partition(set, 3).unwrap();

        let mut seen: Vec<&str> = partitions.iter().flat_map(Partition::keys).collect();
        seen.sort_unstable();
        assert_eq!(seen, ["a", "b", "c", "d", "e"]);
    }
}
