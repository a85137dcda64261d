//! keyed-diff - Keyed List Reconciliation
//!
//! ## Core Concepts
//!
//! **Index-based patches**: diff strategies never materialize output. They
//! emit [`PatchOp`]s holding absolute indices into the two input slices;
//! [`apply`] spends them in a separate step, merging payloads on reuse.
//!
//! **Strategy ladder**: three interchangeable strategies trade cost for move
//! quality. [`Strategy::Naive`] scans forward and never detects moves,
//! [`Strategy::DoubleEnded`] handles edge churn with head/tail pointers, and
//! [`Strategy::Minimal`] (the default) anchors a longest increasing
//! subsequence to emit the fewest moves possible.
//!
//! ## Modules
//! - `key`: stable identity (`Key`, `ListSeed`, the `Keyed` trait)
//! - `node`: `Node<V>` payload carrier and the `Merge` contract
//! - `attr`: default attribute payload
//! - `algo`: diff strategies and the LIS helper
//! - `patch`: `PatchOp`, `DiffResult`, `DiffStats`
//! - `apply`: patch verification and application
//! - `error`: error types
//!
//! ## Usage
//!
//! ```
//! use keyed_diff::{apply, diff, Attrs, Key, Node};
//!
//! let old: Vec<Node> = ["a", "b", "c"]
//!     .into_iter()
//!     .map(|s| Node::new(Key::for_str(s), Attrs::new()))
//!     .collect();
//! let new: Vec<Node> = ["c", "a", "b"]
//!     .into_iter()
//!     .map(|s| Node::new(Key::for_str(s), Attrs::new()))
//!     .collect();
//!
//! let result = diff(&old, &new);
//! assert_eq!(result.stats.moved, 1); // "c" jumps to the front
//! assert_eq!(result.stats.inserted, 0);
//!
//! let merged = apply(&old, &new, &result.ops)?;
//! assert_eq!(merged.len(), 3);
//! # Ok::<(), keyed_diff::PatchError>(())
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Core modules
// =============================================================================

/// Stable identity for diffing
pub mod key;

/// Node types: Node, Sequence, Merge
pub mod node;

/// Attribute types
pub mod attr;

/// Patch operations and diff output
pub mod patch;

/// Diff strategies: naive, double_ended, minimal
pub mod algo;

/// Patch verification and application
pub mod apply;

/// Content hashing for key derivation
pub mod hash;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Identity
pub use key::{Key, Keyed, ListSeed};

// Node types
pub use node::{Merge, Node, Sequence};

// Attribute types
pub use attr::{AttrKey, AttrValue, Attrs, AttrsExt};

// Patch data
pub use patch::{DiffResult, DiffStats, PatchOp};

// Algorithms
pub use algo::{
    diff, diff_double_ended, diff_minimal, diff_naive, diff_with, longest_increasing, Strategy,
};

#[cfg(feature = "parallel")]
pub use algo::diff_batch;

// Application
pub use apply::{apply, verify};

// Hashing
pub use hash::KeyHasher;

// Error types
pub use error::{PatchError, PatchResult};

// =============================================================================
// Tests
// =============================================================================
