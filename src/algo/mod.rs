//! Diff strategy implementations.
//!
//! - `naive`: forward-scan reuse diff, no move detection
//! - `double_ended`: four-way pointer diff with keyed fallback
//! - `minimal`: LIS-anchored minimal-move diff
//! - `lis`: longest increasing subsequence helper
//!
//! All strategies accept the same inputs and satisfy the same structural
//! contract (checkable with [`crate::apply::verify`]); they differ in cost
//! and in which reuses surface as `Move`.

mod double_ended;
mod key_index;
mod lis;
mod minimal;
mod naive;

pub use double_ended::diff_double_ended;
pub use lis::longest_increasing;
pub use minimal::diff_minimal;
pub use naive::diff_naive;

use crate::key::Keyed;
use crate::patch::DiffResult;

// =============================================================================
// Strategy selection
// =============================================================================

/// Which diff strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Forward scan, first unconsumed match. O(n·m), never emits `Move`.
    Naive,
    /// Head/tail pointer cases with keyed fallback. O(n+m) amortized.
    DoubleEnded,
    /// Prefix/suffix pre-pass plus LIS anchors. O(n+m+k log k), minimal
    /// move count.
    #[default]
    Minimal,
}

/// Diff two keyed sequences with the default strategy
///
/// The default is [`Strategy::Minimal`]; use [`diff_with`] to pick another.
pub fn diff<T: Keyed>(old: &[T], new: &[T]) -> DiffResult {
    diff_minimal(old, new)
}

/// Diff two keyed sequences with an explicit strategy
pub fn diff_with<T: Keyed>(strategy: Strategy, old: &[T], new: &[T]) -> DiffResult {
    match strategy {
        Strategy::Naive => diff_naive(old, new),
        Strategy::DoubleEnded => diff_double_ended(old, new),
        Strategy::Minimal => diff_minimal(old, new),
    }
}

/// Diff many independent sequence pairs in parallel
///
/// Results come back in input order. Parallelism is across pairs; each
/// individual diff stays sequential.
#[cfg(feature = "parallel")]
pub fn diff_batch<T>(strategy: Strategy, pairs: &[(&[T], &[T])]) -> Vec<DiffResult>
where
    T: Keyed + Sync,
{
    use rayon::prelude::*;

    pairs
        .par_iter()
        .map(|(old, new)| diff_with(strategy, old, new))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::verify;
    use crate::key::Key;
    use crate::patch::PatchOp;

    const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::DoubleEnded, Strategy::Minimal];

    fn keys(nums: &[u64]) -> Vec<Key> {
        nums.iter().map(|&n| Key::from_raw(n)).collect()
    }

    /// Structural contract plus stats/ops agreement, for every strategy
    fn check_contract(old: &[Key], new: &[Key]) {
        for strategy in ALL {
            let result = diff_with(strategy, old, new);
            verify(old.len(), new.len(), &result.ops)
                .unwrap_or_else(|e| panic!("{strategy:?} broke the contract: {e}"));

            let count = |pred: fn(&PatchOp) -> bool| result.ops.iter().filter(|o| pred(o)).count();
            assert_eq!(count(PatchOp::is_reuse), result.stats.reused, "{strategy:?}");
            assert_eq!(count(PatchOp::is_move), result.stats.moved, "{strategy:?}");
            assert_eq!(count(PatchOp::is_insert), result.stats.inserted, "{strategy:?}");
            assert_eq!(count(PatchOp::is_delete), result.stats.deleted, "{strategy:?}");
        }
    }

    /// With unique keys the strategies must agree on the match partition
    fn check_agreement(old: &[Key], new: &[Key]) {
        let mut partitions = ALL.iter().map(|&s| {
            let result = diff_with(s, old, new);
            let mut matches: Vec<(usize, usize)> = Vec::new();
            let mut inserts: Vec<usize> = Vec::new();
            let mut deletes: Vec<usize> = Vec::new();
            for op in &result.ops {
                match *op {
                    PatchOp::Reuse {
                        old_index,
                        new_index,
                    }
                    | PatchOp::Move {
                        old_index,
                        new_index,
                    } => matches.push((old_index, new_index)),
                    PatchOp::Insert { new_index } => inserts.push(new_index),
                    PatchOp::Delete { old_index } => deletes.push(old_index),
                }
            }
            matches.sort_unstable();
            inserts.sort_unstable();
            deletes.sort_unstable();
            (matches, inserts, deletes)
        });

        let first = partitions.next().unwrap();
        for other in partitions {
            assert_eq!(first, other);
        }
    }

    #[test]
    fn test_default_strategy_is_minimal() {
        assert_eq!(Strategy::default(), Strategy::Minimal);

        let old = keys(&[1, 2, 3]);
        let new = keys(&[3, 2, 1]);
        assert_eq!(diff(&old, &new), diff_with(Strategy::Minimal, &old, &new));
    }

    #[test]
    fn test_dispatch_reaches_each_strategy() {
        let old = keys(&[1, 2, 3]);
        let new = keys(&[3, 1, 2]);

        // Naive is blind to the rotation, the others see one move
        assert_eq!(diff_with(Strategy::Naive, &old, &new).stats.moved, 0);
        assert_eq!(diff_with(Strategy::DoubleEnded, &old, &new).stats.moved, 1);
        assert_eq!(diff_with(Strategy::Minimal, &old, &new).stats.moved, 1);
    }

    #[test]
    fn test_contract_holds_across_inputs() {
        let cases: &[(&[u64], &[u64])] = &[
            (&[], &[]),
            (&[], &[1, 2, 3]),
            (&[1, 2, 3], &[]),
            (&[1, 2, 3], &[1, 2, 3]),
            (&[1, 2, 3, 4], &[4, 1, 2, 3]),
            (&[1, 2, 3], &[3, 2, 1]),
            (&[1, 2, 3], &[2, 9, 3, 1]),
            (&[1, 2, 3, 4, 5], &[5, 4, 8, 1, 7]),
            (&[7, 7, 8], &[8, 7, 7]),
            (&[7, 7], &[7, 7, 7]),
            (&[5, 5, 5], &[5]),
        ];
        for (old, new) in cases {
            check_contract(&keys(old), &keys(new));
        }
    }

    #[test]
    fn test_strategies_agree_on_unique_keys() {
        let cases: &[(&[u64], &[u64])] = &[
            (&[1, 2, 3, 4], &[4, 1, 2, 3]),
            (&[1, 2, 3], &[3, 2, 1]),
            (&[1, 2, 3], &[2, 9, 3, 1]),
            (&[1, 2, 3, 4, 5, 6], &[6, 2, 4, 1, 3, 9]),
            (&[10, 20, 30], &[40, 50]),
        ];
        for (old, new) in cases {
            check_agreement(&keys(old), &keys(new));
        }
    }

    #[test]
    fn test_contract_holds_with_keyless_nodes() {
        let old = vec![Some(Key::from_raw(1)), None, Some(Key::from_raw(2)), None];
        let new = vec![None, Some(Key::from_raw(2)), Some(Key::from_raw(1))];

        for strategy in ALL {
            let result = diff_with(strategy, &old, &new);
            verify(old.len(), new.len(), &result.ops).unwrap();

            // Keyless slots only ever insert or delete
            for op in &result.ops {
                if let Some(o) = op.old_index() {
                    if old[o].is_none() {
                        assert!(op.is_delete(), "{strategy:?} matched a keyless old node");
                    }
                }
                if let Some(n) = op.new_index() {
                    if new[n].is_none() {
                        assert!(op.is_insert(), "{strategy:?} matched a keyless new node");
                    }
                }
            }
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_batch_matches_sequential() {
        let a_old = keys(&[1, 2, 3]);
        let a_new = keys(&[3, 1, 2]);
        let b_old = keys(&[4, 5]);
        let b_new = keys(&[5, 4, 6]);

        let pairs: Vec<(&[Key], &[Key])> =
            vec![(&a_old, &a_new), (&b_old, &b_new), (&a_old, &a_old)];
        let results = diff_batch(Strategy::Minimal, &pairs);

        assert_eq!(results.len(), 3);
        for ((old, new), result) in pairs.iter().zip(&results) {
            assert_eq!(*result, diff_with(Strategy::Minimal, old, new));
        }
    }
}
