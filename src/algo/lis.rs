//! Longest increasing subsequence over matched old indices
//!
//! The minimal-move strategy maps each remaining new position to the old
//! index it matched (or `None`). The LIS of those old indices is the anchor
//! set: nodes already in relative order, which stay put while everything
//! else moves around them.
//!
//! Patience-style: `tails[len-1]` holds the position whose value is the
//! smallest possible tail of an increasing run of that length. Binary search
//! uses strict less-than, so equal values replace a tail instead of
//! extending the run. Predecessor links make the actual subsequence
//! recoverable; the length alone is useless for emission.

// =============================================================================
// longest_increasing
// =============================================================================

/// Positions of one maximal strictly-increasing subsequence of `slots`
///
/// `None` entries are skipped. The result lists positions into `slots` in
/// ascending order; the values at those positions are strictly increasing.
/// Runs in O(k log k) for k `Some` entries.
pub fn longest_increasing(slots: &[Option<usize>]) -> Vec<usize> {
    let mut tails: Vec<usize> = Vec::new();
    let mut prev: Vec<Option<usize>> = vec![None; slots.len()];

    for (pos, slot) in slots.iter().enumerate() {
        let Some(value) = *slot else { continue };

        // First run length whose tail value reaches `value`. Entries in
        // `tails` always point at Some slots, so the Option ordering here
        // is plain value ordering.
        let insert_at = tails.partition_point(|&p| slots[p] < Some(value));
        prev[pos] = insert_at.checked_sub(1).map(|i| tails[i]);
        if insert_at == tails.len() {
            tails.push(pos);
        } else {
            tails[insert_at] = pos;
        }
    }

    // Walk predecessor links back from the longest run's tail
    let mut chain = vec![0; tails.len()];
    let mut cursor = tails.last().copied();
    let mut at = tails.len();
    while let Some(pos) = cursor {
        at -= 1;
        chain[at] = pos;
        cursor = prev[pos];
    }
    chain
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[usize]) -> Vec<Option<usize>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_empty() {
        assert!(longest_increasing(&[]).is_empty());
        assert!(longest_increasing(&[None, None]).is_empty());
    }

    #[test]
    fn test_single() {
        assert_eq!(longest_increasing(&some(&[42])), vec![0]);
    }

    #[test]
    fn test_already_increasing() {
        assert_eq!(longest_increasing(&some(&[1, 2, 3])), vec![0, 1, 2]);
    }

    #[test]
    fn test_decreasing_keeps_one() {
        // Each value replaces the tail; the chain ends at the last survivor
        assert_eq!(longest_increasing(&some(&[2, 1, 0])), vec![2]);
    }

    #[test]
    fn test_rotation_mapping() {
        // [D,A,B,C] against [A,B,C,D] maps to old indices [3,0,1,2]
        assert_eq!(longest_increasing(&some(&[3, 0, 1, 2])), vec![1, 2, 3]);
    }

    #[test]
    fn test_skips_unmatched_slots() {
        // [B,X,C,A] against [A,B,C]: X has no match
        let slots = vec![Some(1), None, Some(2), Some(0)];
        assert_eq!(longest_increasing(&slots), vec![0, 2]);
    }

    #[test]
    fn test_replaced_tail_keeps_valid_chain() {
        // A smaller late value overwrites a tail without corrupting the
        // chain reconstructed through predecessor links
        let slots = some(&[1, 5, 2, 0, 3]);
        let chain = longest_increasing(&slots);
        assert_eq!(chain, vec![0, 2, 4]); // values 1, 2, 3

        let values: Vec<usize> = chain.iter().map(|&p| slots[p].unwrap()).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_duplicates_do_not_extend() {
        assert_eq!(longest_increasing(&some(&[5, 5, 5])).len(), 1);
    }
}
