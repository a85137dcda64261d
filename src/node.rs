//! Keyed list nodes
//!
//! The unit the diff strategies operate on: an optional stable key plus an
//! arbitrary payload. The payload is opaque to diffing; it only matters when
//! a patch is applied and a reused node's payload is merged with the newer
//! one.

use crate::attr::Attrs;
use crate::key::{Key, Keyed};

// =============================================================================
// Merge - payload contract for reuse
// =============================================================================

/// How a reused node's payload absorbs the newer payload
///
/// Applying a `Reuse` or `Move` keeps the old node's identity but takes the
/// new payload where both sides define a field. `Attrs` implements this as a
/// right-biased shallow merge; `()` for key-only diffing.
pub trait Merge {
    /// Combine with a newer payload, the newer side winning on conflict
    fn merge(&self, newer: &Self) -> Self;
}

impl Merge for () {
    #[inline]
    fn merge(&self, _newer: &Self) -> Self {}
}

// =============================================================================
// Node<V>
// =============================================================================

/// A list element: optional stable key plus payload
///
/// A node with `key: None` is keyless: the strategies never match it, so it
/// is always inserted fresh and deleted rather than reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<V = Attrs> {
    /// Stable identity, or None for keyless nodes
    pub key: Option<Key>,
    /// Payload carried through reuse via [`Merge`]
    pub payload: V,
}

impl<V> Node<V> {
    /// Create a keyed node
    #[inline]
    pub fn new(key: Key, payload: V) -> Self {
        Self {
            key: Some(key),
            payload,
        }
    }

    /// Create a keyless node (never matched, always insert/delete)
    #[inline]
    pub fn unkeyed(payload: V) -> Self {
        Self { key: None, payload }
    }
}

impl<V: Merge> Node<V> {
    /// The node produced by reusing `self` under `newer`
    ///
    /// Identity comes from the newer side (same key when the match was
    /// legitimate), the payload is merged right-biased.
    pub fn merged(&self, newer: &Self) -> Self {
        Self {
            key: newer.key,
            payload: self.payload.merge(&newer.payload),
        }
    }
}

impl<V> Keyed for Node<V> {
    #[inline]
    fn key(&self) -> Option<Key> {
        self.key
    }
}

/// A list of nodes, in render order
pub type Sequence<V = Attrs> = Vec<Node<V>>;

// =============================================================================
// Tests
// =============================================================================
