//! Patch verification and application
//!
//! Strategies only produce ops; this module checks and spends them.
//! [`verify`] enforces the structural contract every strategy promises:
//! indices in bounds, each old index consumed exactly once, each new index
//! produced exactly once. [`apply`] replays a verified patch against the two
//! input sequences and materializes the output in new-sequence order,
//! merging payloads where a node is reused.

use crate::error::{PatchError, PatchResult};
use crate::node::{Merge, Node, Sequence};
use crate::patch::PatchOp;

// =============================================================================
// Verification
// =============================================================================

/// Check a patch against the sequence lengths it claims to connect
///
/// A valid patch mentions every old index exactly once (as a `Reuse`/`Move`
/// source or a `Delete`) and every new index exactly once (as a
/// `Reuse`/`Move` target or an `Insert`), with all indices in bounds. Op
/// order does not matter.
pub fn verify(old_len: usize, new_len: usize, ops: &[PatchOp]) -> PatchResult<()> {
    let mut old_seen = vec![false; old_len];
    let mut new_seen = vec![false; new_len];

    for op in ops {
        if let Some(index) = op.old_index() {
            if index >= old_len {
                return Err(PatchError::OldIndexOutOfBounds {
                    index,
                    len: old_len,
                });
            }
            if old_seen[index] {
                return Err(PatchError::DuplicateOldIndex { index });
            }
            old_seen[index] = true;
        }
        if let Some(index) = op.new_index() {
            if index >= new_len {
                return Err(PatchError::NewIndexOutOfBounds {
                    index,
                    len: new_len,
                });
            }
            if new_seen[index] {
                return Err(PatchError::DuplicateNewIndex { index });
            }
            new_seen[index] = true;
        }
    }

    if let Some(index) = old_seen.iter().position(|&seen| !seen) {
        return Err(PatchError::UncoveredOldIndex { index });
    }
    if let Some(index) = new_seen.iter().position(|&seen| !seen) {
        return Err(PatchError::UncoveredNewIndex { index });
    }

    Ok(())
}

// =============================================================================
// Application
// =============================================================================

/// Apply a patch, producing the output sequence in new order
///
/// Reused and moved nodes carry the old node's payload merged right-biased
/// with the new one (see [`Merge`]); inserted nodes are cloned from `new`.
/// The patch is [`verify`]d first, so a patch produced for different inputs
/// is rejected instead of applied wrongly.
pub fn apply<V>(old: &[Node<V>], new: &[Node<V>], ops: &[PatchOp]) -> PatchResult<Sequence<V>>
where
    V: Merge + Clone,
{
    verify(old.len(), new.len(), ops)?;

    let mut out: Vec<Option<Node<V>>> = Vec::new();
    out.resize_with(new.len(), || None);

    for op in ops {
        match *op {
            PatchOp::Reuse {
                old_index,
                new_index,
            }
            | PatchOp::Move {
                old_index,
                new_index,
            } => {
                out[new_index] = Some(old[old_index].merged(&new[new_index]));
            }
            PatchOp::Insert { new_index } => {
                out[new_index] = Some(new[new_index].clone());
            }
            PatchOp::Delete { .. } => {}
        }
    }

    // verify guaranteed every new slot was filled exactly once
    Ok(out.into_iter().flatten().collect())
}

// =============================================================================
// Tests
// =============================================================================
