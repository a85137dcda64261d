//! Bidirectional (double-ended) pointer diff
//!
//! Walks both sequences from both ends at once. Common edits (appends,
//! prepends, trims, single rotations) resolve through pointer cases alone
//! in O(n+m); only genuinely shuffled interiors pay for a keyed lookup.
//!
//! # Cases (strict priority order)
//!
//! | # | Compare                 | On match | Pointers                    |
//! |---|-------------------------|----------|-----------------------------|
//! | 1 | old head vs new head    | Reuse    | both heads advance          |
//! | 2 | old tail vs new tail    | Reuse    | both tails retreat          |
//! | 3 | old head vs new tail    | Move     | old head fwd, new tail back |
//! | 4 | old tail vs new head    | Move     | old tail back, new head fwd |
//! | 5 | keyed lookup of new head| Move/Insert | new head advances        |
//!
//! Case 5 events are counted in `DiffStats::fallback_scans`; zero scans on
//! an input means the pointer cases alone explained it.
//!
//! # Consumed slots
//!
//! A slot claimed by case 5 can later surface at a pointer. Its key is
//! masked (`SlotStates::live_key`), so every comparison against it fails
//! and the loop keeps draining the new range; pointers only step past a
//! slot when it matches, which keeps the lookup's status check sufficient.

use crate::key::Keyed;
use crate::patch::{DiffResult, DiffStats, PatchOp};

use super::key_index::{KeyIndex, SlotStates};

/// Diff with four-way pointer comparison plus keyed fallback
///
/// Ops are emitted in resolution order: interleaved reuses and moves as the
/// pointers converge, then trailing inserts, then deletes ascending.
pub fn diff_double_ended<T: Keyed>(old: &[T], new: &[T]) -> DiffResult {
    let mut ops = Vec::with_capacity(old.len().max(new.len()));
    let mut stats = DiffStats::default();
    let mut states = SlotStates::new(old.len());
    let mut index = KeyIndex::new(old, 0..old.len());

    let (mut old_start, mut old_end) = (0, old.len());
    let (mut new_start, mut new_end) = (0, new.len());

    while old_start < old_end && new_start < new_end {
        let new_head = new[new_start].key();
        let new_tail = new[new_end - 1].key();

        if states.live_key(old, old_start).key_eq(&new_head) {
            // 1: in order at the front
            states.consume(old_start, new_start);
            ops.push(PatchOp::Reuse {
                old_index: old_start,
                new_index: new_start,
            });
            stats.reused += 1;
            old_start += 1;
            new_start += 1;
        } else if states.live_key(old, old_end - 1).key_eq(&new_tail) {
            // 2: in order at the back
            states.consume(old_end - 1, new_end - 1);
            ops.push(PatchOp::Reuse {
                old_index: old_end - 1,
                new_index: new_end - 1,
            });
            stats.reused += 1;
            old_end -= 1;
            new_end -= 1;
        } else if states.live_key(old, old_start).key_eq(&new_tail) {
            // 3: front node moved to the back
            states.consume(old_start, new_end - 1);
            ops.push(PatchOp::Move {
                old_index: old_start,
                new_index: new_end - 1,
            });
            stats.moved += 1;
            old_start += 1;
            new_end -= 1;
        } else if states.live_key(old, old_end - 1).key_eq(&new_head) {
            // 4: back node moved to the front
            states.consume(old_end - 1, new_start);
            ops.push(PatchOp::Move {
                old_index: old_end - 1,
                new_index: new_start,
            });
            stats.moved += 1;
            old_end -= 1;
            new_start += 1;
        } else {
            // 5: no pointer case applies, look the new head up by key
            stats.fallback_scans += 1;
            if let Some(old_index) = index.take(new_head, new_start, &mut states) {
                ops.push(PatchOp::Move {
                    old_index,
                    new_index: new_start,
                });
                stats.moved += 1;
            } else {
                ops.push(PatchOp::Insert {
                    new_index: new_start,
                });
                stats.inserted += 1;
            }
            new_start += 1;
        }
    }

    // Surplus new nodes, in order
    while new_start < new_end {
        ops.push(PatchOp::Insert {
            new_index: new_start,
        });
        stats.inserted += 1;
        new_start += 1;
    }

    // Surplus old nodes, ascending, skipping claimed slots
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
