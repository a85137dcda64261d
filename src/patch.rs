//! Patch operations: pure diff output
//!
//! # Architecture: Diff/Apply Separation
//!
//! ```text
//! diff(old, new) -> DiffResult              // Pure data, index-based
//!       |
//!       v
//! apply(old, new, &result.ops) -> Sequence  // Materialized output
//! ```
//!
//! `PatchOp` stores indices into the input slices, never node data. This
//! separation enables:
//! - Testing diff logic without materialization
//! - Shipping ops across a process boundary (indices are cheap)
//! - Applying the same ops to structures that parallel the inputs
//!
//! The op list is a complete script: every new index is targeted by exactly
//! one op, every old index by at most one, and old indices left unmatched
//! are deleted. [`crate::apply::verify`] checks exactly this contract.

// =============================================================================
// PatchOp
// =============================================================================

/// A single reconciliation step
///
/// All indices are absolute positions in the original input slices. A
/// `Move` is a reuse whose relative order changed; strategies that cannot
/// see reordering (naive) report every match as `Reuse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchOp {
    /// Node kept, relative order preserved
    Reuse { old_index: usize, new_index: usize },
    /// Node has no usable match in the old sequence
    Insert { new_index: usize },
    /// Node kept but repositioned
    Move { old_index: usize, new_index: usize },
    /// Old node with no match in the new sequence
    Delete { old_index: usize },
}

impl PatchOp {
    impl_op_predicates!(Reuse, Insert, Move, Delete);

    /// The old-sequence index this op consumes, if any
    #[inline]
    pub fn old_index(&self) -> Option<usize> {
        match self {
            Self::Reuse { old_index, .. }
            | Self::Move { old_index, .. }
            | Self::Delete { old_index } => Some(*old_index),
            Self::Insert { .. } => None,
        }
    }

    /// The new-sequence index this op fills, if any
    #[inline]
    pub fn new_index(&self) -> Option<usize> {
        match self {
            Self::Reuse { new_index, .. }
            | Self::Move { new_index, .. }
            | Self::Insert { new_index } => Some(*new_index),
            Self::Delete { .. } => None,
        }
    }
}

// =============================================================================
// DiffStats
// =============================================================================

/// Statistics from one diff run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct DiffStats {
    /// Matches kept in place (`Reuse` ops)
    pub reused: usize,
    /// Matches repositioned (`Move` ops)
    pub moved: usize,
    /// New nodes with no match (`Insert` ops)
    pub inserted: usize,
    /// Old nodes with no match (`Delete` ops)
    pub deleted: usize,
    /// Bidirectional strategy only: keyed lookups taken when no pointer
    /// case applied (case 5 events)
    pub fallback_scans: usize,
    /// Minimal strategy only: size of the stay-put anchor set in the
    /// middle range
    pub lis_anchors: usize,
}

impl DiffStats {
    /// Total matched nodes (reused + moved)
    #[inline]
    pub fn matched(&self) -> usize {
        self.reused + self.moved
    }

    /// Number of ops that change the rendered sequence
    #[inline]
    pub fn edit_count(&self) -> usize {
        self.moved + self.inserted + self.deleted
    }

    /// Whether the sequences were identical (every node reused in place)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edit_count() == 0
    }
}

// =============================================================================
// DiffResult
// =============================================================================

/// Result of one diff run: the op script plus counters
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct DiffResult {
    /// Generated patch operations (pure data, index-based)
    pub ops: Vec<PatchOp>,
    /// Statistics about the diff
    pub stats: DiffStats,
}

impl DiffResult {
    /// Whether applying would change anything
    ///
    /// Identity diffs still carry one `Reuse` per node, so emptiness of
    /// `ops` is the wrong test; this checks for edits.
    #[inline]
    pub fn has_changes(&self) -> bool {
        self.stats.edit_count() > 0
    }
}

// =============================================================================
// Tests
// =============================================================================
