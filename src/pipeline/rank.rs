//! Rank step: merge per-partition outputs into the final ordering
//!
//! The input is the concatenation of all partitions' reduced pairs in
//! ascending partition-id order. A stable sort by count descending keeps
//! equal-count entries in their concatenated order, which makes the final
//! ranking a deterministic function of partition assignment. There is
//! deliberately no alphabetic tie-break.

use crate::types::ReducedPair;

/// Sort reduced pairs by count descending, ties kept in input order
pub fn rank(mut pairs: Vec<ReducedPair>) -> Vec<ReducedPair> {
    // Vec::sort_by is stable; do not replace with sort_unstable_by
    pairs.sort_by(|a, b| b.count.cmp(&a.count));
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_descending() {
        let ranked = rank(vec![
            ReducedPair::new("dog", 1),
            ReducedPair::new("the", 3),
            ReducedPair::new("cat", 2),
        ]);
        let words: Vec<&str> = ranked.iter().map(|p| p.word.as_str()).collect();

        assert_eq!(words, ["the", "cat", "dog"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank(vec![
            ReducedPair::new("zebra", 2),
            ReducedPair::new("apple", 2),
            ReducedPair::new("mango", 2),
        ]);
        let words: Vec<&str> = ranked.iter().map(|p| p.word.as_str()).collect();

        // Input order, not alphabetic order
        assert_eq!(words, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank(Vec::new()).is_empty());
    }
}
