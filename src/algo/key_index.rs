//! Shared bookkeeping for the diff strategies
//!
//! Two pieces every strategy leans on:
//!
//! - [`SlotStates`]: per-old-slot consumption tracking. Consumption is an
//!   explicit tri-state (`Unconsumed` / `ConsumedAt`) kept in a parallel
//!   array, so the node storage itself never holds sentinel values.
//! - [`KeyIndex`]: key → old-index buckets in ascending index order with a
//!   per-bucket cursor. Gives amortized O(1) "first unconsumed slot with
//!   this key" and fixes the duplicate-key policy: old-index order, first
//!   unconsumed wins.

use std::ops::Range;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::key::{Key, Keyed};

// =============================================================================
// SlotStates
// =============================================================================

/// Consumption status of one old slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Not yet claimed by any match
    Unconsumed,
    /// Claimed by the new index it was matched to
    ConsumedAt(usize),
}

/// Parallel consumption array over the old sequence
///
/// A consumed slot must fail every later key comparison; strategies check
/// here before comparing keys.
#[derive(Debug, Clone)]
pub struct SlotStates {
    states: Vec<SlotState>,
}

impl SlotStates {
    pub fn new(len: usize) -> Self {
        Self {
            states: vec![SlotState::Unconsumed; len],
        }
    }

    /// Whether this old slot is already claimed
    #[inline]
    pub fn is_consumed(&self, old_index: usize) -> bool {
        matches!(self.states[old_index], SlotState::ConsumedAt(_))
    }

    /// Claim an old slot for a new position
    #[inline]
    pub fn consume(&mut self, old_index: usize, new_index: usize) {
        debug_assert!(
            !self.is_consumed(old_index),
            "slot {old_index} consumed twice"
        );
        self.states[old_index] = SlotState::ConsumedAt(new_index);
    }

    /// The key of an old item as comparisons see it: `None` once consumed
    #[inline]
    pub fn live_key<T: Keyed>(&self, items: &[T], old_index: usize) -> Option<Key> {
        if self.is_consumed(old_index) {
            None
        } else {
            items[old_index].key()
        }
    }
}

// =============================================================================
// KeyIndex
// =============================================================================

/// One key's old-index occurrences, ascending, with a skip cursor
#[derive(Debug, Default)]
struct Bucket {
    at: usize,
    slots: SmallVec<[usize; 1]>,
}

/// Key → old-index lookup honoring consumption order
///
/// Built once over a range of the old sequence. Duplicate keys keep all
/// their occurrences; [`KeyIndex::take`] hands them out in old-index order.
/// Each bucket entry is visited at most once across a whole diff, so total
/// lookup cost is O(range length).
#[derive(Debug)]
pub struct KeyIndex {
    buckets: FxHashMap<Key, Bucket>,
}

impl KeyIndex {
    /// Index the keyed slots of `items` within `range`
    pub fn new<T: Keyed>(items: &[T], range: Range<usize>) -> Self {
        let mut buckets: FxHashMap<Key, Bucket> = FxHashMap::default();
        for old_index in range {
            if let Some(key) = items[old_index].key() {
                buckets.entry(key).or_default().slots.push(old_index);
            }
        }
        Self { buckets }
    }

    /// Claim the first unconsumed old slot carrying `key`
    ///
    /// On a hit the slot is consumed for `new_index` before returning.
    /// Keyless lookups (`key == None`) always miss. Slots consumed through
    /// other paths (pointer matches, the pre-pass) are skipped here via the
    /// status check.
    pub fn take(
        &mut self,
        key: Option<Key>,
        new_index: usize,
        states: &mut SlotStates,
    ) -> Option<usize> {
        let bucket = self.buckets.get_mut(&key?)?;
        while bucket.at < bucket.slots.len() {
            let old_index = bucket.slots[bucket.at];
            bucket.at += 1;
            if !states.is_consumed(old_index) {
                states.consume(old_index, new_index);
                return Some(old_index);
            }
        }
        None
    }
}

// =============================================================================
// Tests
// =============================================================================
