//! Prelude module for common imports.
//!
//! ```
//! use keyed_diff::prelude::*;
//! ```

// Identity
pub use crate::key::{Key, Keyed, ListSeed};

// Node types
pub use crate::node::{Merge, Node, Sequence};

// Attributes
pub use crate::attr::{AttrKey, AttrValue, Attrs, AttrsExt};

// Patch data
pub use crate::patch::{DiffResult, DiffStats, PatchOp};

// Algorithms
pub use crate::algo::{
    diff, diff_double_ended, diff_minimal, diff_naive, diff_with, longest_increasing, Strategy,
};

#[cfg(feature = "parallel")]
pub use crate::algo::diff_batch;

// Application
pub use crate::apply::{apply, verify};

// Hashing
pub use crate::hash::KeyHasher;

// Error
pub use crate::error::{PatchError, PatchResult};
