//! Stable key identity for list reconciliation
//!
//! A [`Key`] is an opaque 64-bit identity: two nodes are "the same node"
//! exactly when their keys are present and equal. Keys are either assigned
//! directly by the caller (`from_raw`) or derived from content via blake3
//! (`for_str`, `for_int`, `for_content`).
//!
//! # Occurrence Index (not Position!)
//!
//! Derived keys disambiguate identical siblings (e.g. three items with the
//! same label) with an **occurrence index**: how many times this same
//! content appeared before it in the list. Unlike an absolute position, the
//! occurrence count survives reordering:
//!
//! Example: `[A, B, C]` → `[C, A, B]`
//! - Position-based: all keys change, every node is Delete + Insert
//! - Occurrence-based: keys unchanged, the diff reports Moves

use std::fmt;

use crate::hash::KeyHasher;

// =============================================================================
// ListSeed - Per-list namespace for derived keys
// =============================================================================

/// Per-list seed namespacing derived keys
///
/// When several lists are reconciled in the same system, each list gets a
/// seed based on its name. Identical content in different lists then derives
/// distinct keys, so patches for one list can never match nodes of another.
///
/// # Creation
///
/// ```
/// use keyed_diff::key::ListSeed;
///
/// let seed = ListSeed::from_name("sidebar");
/// assert_ne!(seed, ListSeed::zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ListSeed(pub u64);

impl ListSeed {
    /// Create a ListSeed from a list name
    pub fn from_name(name: &str) -> Self {
        Self(
            KeyHasher::new()
                .update_str("__list__")
                .update_str(name)
                .finish(),
        )
    }

    /// Create a zero seed (for single-list or test scenarios)
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

// =============================================================================
// Key
// =============================================================================

/// Stable node identity
///
/// Computed from node content (or assigned raw), enabling:
/// - O(1) identity checks during diffing
/// - Cross-process stability (same content = same key)
/// - Move detection: a reordered node keeps its key
///
/// # Memory Layout
///
/// - 8 bytes (u64)
/// - Copy, no heap allocation
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Key(pub(crate) u64);

impl Key {
    /// Create a Key from a raw u64 value.
    ///
    /// # Usage
    ///
    /// This is the entry point for callers that manage their own identity
    /// space (database ids, interned symbols). Prefer the `for_*`
    /// constructors when deriving keys from content.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw u64 representation
    #[inline]
    pub const fn as_raw(&self) -> u64 {
        self.0
    }

    /// Derive a Key from a string
    ///
    /// Domain-tagged so `for_str("1")` and `for_int(1)` never collide.
    pub fn for_str(s: &str) -> Self {
        Self(
            KeyHasher::new()
                .update_str("__str__")
                .update_str(s)
                .finish(),
        )
    }

    /// Derive a Key from an integer
    pub fn for_int(v: i64) -> Self {
        Self(
            KeyHasher::new()
                .update_str("__int__")
                .update_i64(v)
                .finish(),
        )
    }

    /// Derive a Key from list content
    ///
    /// Hash is computed from:
    /// - The list seed (namespace)
    /// - The content string
    /// - Occurrence index (how many same-content siblings appeared before)
    ///
    /// The occurrence index, not the absolute position, is what keeps keys
    /// stable under reordering while still telling identical siblings apart.
    pub fn for_content(seed: ListSeed, content: &str, occurrence: usize) -> Self {
        Self(
            KeyHasher::new()
                .update_u64(seed.as_u64())
                .update_str("__item__")
                .update_str(content)
                .update_usize(occurrence)
                .finish(),
        )
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({:016x})", self.0)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:x}", self.0)
    }
}

// =============================================================================
// Keyed - the matching seam
// =============================================================================

/// Anything the diff strategies can match by key
///
/// `key() == None` marks a keyless item: it fails every comparison and is
/// always inserted fresh / deleted, never reused.
pub trait Keyed {
    /// The stable key of this item, if it has one
    fn key(&self) -> Option<Key>;

    /// Whether both items carry keys and the keys are equal
    ///
    /// Two keyless items never match, by design of the contract above.
    #[inline]
    fn key_eq(&self, other: &impl Keyed) -> bool {
        matches!((self.key(), other.key()), (Some(a), Some(b)) if a == b)
    }
}

impl Keyed for Key {
    #[inline]
    fn key(&self) -> Option<Key> {
        Some(*self)
    }
}

impl Keyed for Option<Key> {
    #[inline]
    fn key(&self) -> Option<Key> {
        *self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Key, u64);
    assert_eq_size!(ListSeed, u64);

    #[test]
    fn test_for_str_deterministic() {
        assert_eq!(Key::for_str("alpha"), Key::for_str("alpha"));
        assert_ne!(Key::for_str("alpha"), Key::for_str("beta"));
    }

    #[test]
    fn test_domains_dont_collide() {
        assert_ne!(Key::for_str("1"), Key::for_int(1));
    }

    #[test]
    fn test_occurrence_disambiguates() {
        let seed = ListSeed::zero();
        let first = Key::for_content(seed, "same text", 0);
        let second = Key::for_content(seed, "same text", 1);
        assert_ne!(first, second);
    }

    #[test]
    fn test_seed_namespaces_content() {
        let sidebar = ListSeed::from_name("sidebar");
        let footer = ListSeed::from_name("footer");
        assert_ne!(
            Key::for_content(sidebar, "item", 0),
            Key::for_content(footer, "item", 0)
        );
    }

    #[test]
    fn test_key_eq_requires_both_present() {
        let a = Some(Key::from_raw(7));
        let b = Some(Key::from_raw(7));
        let none: Option<Key> = None;

        assert!(a.key_eq(&b));
        assert!(!a.key_eq(&none));
        assert!(!none.key_eq(&none), "keyless items never match");
    }

    #[test]
    fn test_display_format() {
        let key = Key::from_raw(0x123456789abcdef0);
        assert_eq!(format!("{}", key), "#123456789abcdef0");
        assert_eq!(format!("{:?}", key), "Key(123456789abcdef0)");
    }
}
