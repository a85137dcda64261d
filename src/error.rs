//! Error types for keyed-diff.
//!
//! Diffing itself is total and never fails; errors arise only when a patch
//! script is verified or applied against sequences it does not fit.

use thiserror::Error;

/// Errors that can occur when verifying or applying a patch script.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// An op references an old index past the end of the old sequence
    #[error("old index {index} out of bounds for sequence of length {len}")]
    OldIndexOutOfBounds {
        /// Offending index
        index: usize,
        /// Old sequence length
        len: usize,
    },

    /// An op references a new index past the end of the new sequence
    #[error("new index {index} out of bounds for sequence of length {len}")]
    NewIndexOutOfBounds {
        /// Offending index
        index: usize,
        /// New sequence length
        len: usize,
    },

    /// Two ops consume the same old slot
    #[error("old index {index} consumed by more than one op")]
    DuplicateOldIndex {
        /// Doubly consumed index
        index: usize,
    },

    /// Two ops fill the same new position
    #[error("new index {index} filled by more than one op")]
    DuplicateNewIndex {
        /// Doubly filled index
        index: usize,
    },

    /// An old slot is neither reused, moved, nor deleted
    #[error("old index {index} not covered by any op")]
    UncoveredOldIndex {
        /// Orphaned index
        index: usize,
    },

    /// A new position is never filled
    #[error("new index {index} not covered by any op")]
    UncoveredNewIndex {
        /// Orphaned index
        index: usize,
    },
}

/// Result type alias for patch verification and application.
pub type PatchResult<T> = Result<T, PatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PatchError::OldIndexOutOfBounds { index: 9, len: 3 };
        assert_eq!(
            err.to_string(),
            "old index 9 out of bounds for sequence of length 3"
        );

        let err = PatchError::UncoveredNewIndex { index: 2 };
        assert_eq!(err.to_string(), "new index 2 not covered by any op");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatchError>();
    }
}
