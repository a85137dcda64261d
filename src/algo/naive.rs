//! Naive reuse diff
//!
//! The simplest strategy: for each new node, scan the old sequence left to
//! right and take the first unconsumed key match. O(n·m) worst case and
//! blind to reordering (every match is plain `Reuse`, never `Move`), but
//! trivially correct and the reference point for the other strategies.
//!
//! A pure reorder therefore reports no edits at all. That is fine for
//! materialization (op targets carry `new_index`, so `apply` still places
//! nodes correctly) but callers animating moves need the bidirectional or
//! minimal strategy.

use crate::key::Keyed;
use crate::patch::{DiffResult, DiffStats, PatchOp};

use super::key_index::SlotStates;

/// Diff by forward scan, first unconsumed match wins
///
/// Ops come out in new-sequence order with deletes appended ascending.
pub fn diff_naive<T: Keyed>(old: &[T], new: &[T]) -> DiffResult {
    let mut ops = Vec::with_capacity(old.len().max(new.len()));
    let mut stats = DiffStats::default();
    let mut states = SlotStates::new(old.len());

    for (new_index, item) in new.iter().enumerate() {
        let matched = item
            .key()
            .and_then(|key| (0..old.len()).find(|&i| states.live_key(old, i) == Some(key)));

        match matched {
            Some(old_index) => {
                states.consume(old_index, new_index);
                ops.push(PatchOp::Reuse {
                    old_index,
                    new_index,
                });
                stats.reused += 1;
            }
            None => {
                ops.push(PatchOp::Insert { new_index });
                stats.inserted += 1;
            }
        }
    }

    for old_index in 0..old.len() {
        if !states.is_consumed(old_index) {
            ops.push(PatchOp::Delete { old_index });
            stats.deleted += 1;
        }
    }

    DiffResult { ops, stats }
}

// =============================================================================
// Tests
// =============================================================================
