//! Minimal-move diff
//!
//! Produces the fewest `Move` ops possible for a key matching: the longest
//! increasing subsequence of matched old indices stays put, everything else
//! matched moves around it.
//!
//! # Phases
//!
//! | Phase   | Work                                     | Cost       |
//! |---------|------------------------------------------|------------|
//! | pre-pass| strip common prefix, then common suffix  | O(p+s)     |
//! | map     | key → old index per remaining new node   | O(n+m)     |
//! | anchors | LIS over the matched old indices         | O(k log k) |
//! | emit    | right-to-left walk of the middle range   | O(m)       |
//! | deletes | sweep unconsumed old slots               | O(n)       |
//!
//! The pre-pass takes head/head and tail/tail pairs only. Cross matches
//! (a head key showing up at the other end) are left to the mapping, where
//! the anchor set decides who actually moves; move count stays exactly
//! `matched_in_middle - anchors`.

use crate::key::Keyed;
use crate::patch::{DiffResult, DiffStats, PatchOp};

use super::key_index::{KeyIndex, SlotStates};
use super::lis::longest_increasing;

/// Diff with LIS-anchored move minimization
///
/// Ops come out as: prefix reuses ascending, suffix reuses descending,
/// the middle right to left, then deletes ascending.
pub fn diff_minimal<T: Keyed>(old: &[T], new: &[T]) -> DiffResult {
    let mut ops = Vec::with_capacity(old.len().max(new.len()));
    let mut stats = DiffStats::default();
    let mut states = SlotStates::new(old.len());

    let (mut old_start, mut old_end) = (0, old.len());
    let (mut new_start, mut new_end) = (0, new.len());

    // Common prefix
    while old_start < old_end
        && new_start < new_end
        && old[old_start].key_eq(&new[new_start])
    {
        states.consume(old_start, new_start);
        ops.push(PatchOp::Reuse {
            old_index: old_start,
            new_index: new_start,
        });
        stats.reused += 1;
        old_start += 1;
        new_start += 1;
    }

    // Common suffix
    while old_start < old_end
        && new_start < new_end
        && old[old_end - 1].key_eq(&new[new_end - 1])
    {
        old_end -= 1;
        new_end -= 1;
        states.consume(old_end, new_end);
        ops.push(PatchOp::Reuse {
            old_index: old_end,
            new_index: new_end,
        });
        stats.reused += 1;
    }

    // Map each remaining new position to the old slot it claims
    let mut index = KeyIndex::new(old, old_start..old_end);
    let mut slots: Vec<Option<usize>> = Vec::with_capacity(new_end - new_start);
    for (offset, item) in new[new_start..new_end].iter().enumerate() {
        slots.push(index.take(item.key(), new_start + offset, &mut states));
    }

    // Matched old indices already in relative order need no move
    let anchors = longest_increasing(&slots);
    stats.lis_anchors = anchors.len();

    // Right to left, so each slot is checked against the rightmost
    // still-unretired anchor
    let mut anchor_cursor = anchors.len();
    for offset in (0..slots.len()).rev() {
        let new_index = new_start + offset;
        match slots[offset] {
            None => {
                ops.push(PatchOp::Insert { new_index });
                stats.inserted += 1;
            }
            Some(old_index) => {
                if anchor_cursor > 0 && anchors[anchor_cursor - 1] == offset {
                    anchor_cursor -= 1;
                    ops.push(PatchOp::Reuse {
                        old_index,
                        new_index,
                    });
                    stats.reused += 1;
                } else {
                    ops.push(PatchOp::Move {
                        old_index,
                        new_index,
                    });
                    stats.moved += 1;
                }
            }
        }
    }

    // Unclaimed middle slots
    for old_index in old_start..old_end {
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
