//! Accessor macros for patch op enums
//!
//! Eliminates repetitive match code on op variants. Uses `paste` internally
//! for identifier concatenation.

// =============================================================================
// Op predicate generation
// =============================================================================

/// Generate `is_xxx` predicates for struct-variant op enums
///
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool` - variant check
///
/// # Example
/// ```ignore
/// impl PatchOp {
///     impl_op_predicates!(Reuse, Insert, Move, Delete);
/// }
/// ```
#[macro_export]
macro_rules! impl_op_predicates {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a `" $variant "` operation"]
                #[inline]
                pub fn [<is_ $variant:lower>](&self) -> bool {
                    matches!(self, Self::$variant { .. })
                }
            )*
        }
    };
}
