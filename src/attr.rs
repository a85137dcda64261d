//! Attribute payloads for keyed nodes
//!
//! The default node payload: ordered key-value pairs. Attribute lists are
//! tiny in practice, so an ordered `Vec` with linear lookup beats a map and
//! preserves insertion order for output.

use compact_str::CompactString;

use crate::node::Merge;

/// Attribute name (inline for short strings)
pub type AttrKey = CompactString;

/// Attribute value (inline for short strings)
pub type AttrValue = CompactString;

/// Node attributes as ordered key-value pairs
pub type Attrs = Vec<(AttrKey, AttrValue)>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update)
    fn set_attr(&mut self, name: impl Into<AttrKey>, value: impl Into<AttrValue>);

    /// Remove an attribute by name, returning the old value if present
    fn remove_attr(&mut self, name: &str) -> Option<AttrValue>;
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: impl Into<AttrKey>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.iter_mut().find(|(k, _)| k == &name) {
            attr.1 = value;
        } else {
            self.push((name, value));
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<AttrValue> {
        self.iter()
            .position(|(k, _)| k == name)
            .map(|pos| self.remove(pos).1)
    }
}

/// Right-biased shallow merge: the newer side wins per attribute name,
/// names only the older side has are kept. Older order first, then
/// newer-only names in their own order.
impl Merge for Attrs {
    fn merge(&self, newer: &Self) -> Self {
        let mut out = self.clone();
        for (name, value) in newer {
            out.set_attr(name.clone(), value.clone());
        }
        out
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_operations() {
        let mut attrs: Attrs = Vec::new();

        // Set
        attrs.set_attr("id", "main");
        attrs.set_attr("class", "container");
        assert_eq!(attrs.len(), 2);

        // Get
        assert_eq!(attrs.get_attr("id"), Some("main"));
        assert_eq!(attrs.get_attr("class"), Some("container"));
        assert_eq!(attrs.get_attr("href"), None);

        // Has
        assert!(attrs.has_attr("id"));
        assert!(!attrs.has_attr("href"));

        // Update existing
        attrs.set_attr("class", "wrapper");
        assert_eq!(attrs.get_attr("class"), Some("wrapper"));
        assert_eq!(attrs.len(), 2);

        // Remove
        let removed = attrs.remove_attr("id");
        assert_eq!(removed.as_deref(), Some("main"));
        assert!(!attrs.has_attr("id"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_merge_newer_wins() {
        let mut old: Attrs = Vec::new();
        old.set_attr("class", "stale");
        old.set_attr("title", "kept");

        let mut new: Attrs = Vec::new();
        new.set_attr("class", "fresh");
        new.set_attr("href", "/next");

        let merged = old.merge(&new);
        assert_eq!(merged.get_attr("class"), Some("fresh"));
        assert_eq!(merged.get_attr("title"), Some("kept"));
        assert_eq!(merged.get_attr("href"), Some("/next"));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_merge_preserves_older_order() {
        let mut old: Attrs = Vec::new();
        old.set_attr("a", "1");
        old.set_attr("b", "2");

        let mut new: Attrs = Vec::new();
        new.set_attr("b", "20");
        new.set_attr("c", "3");

        let merged = old.merge(&new);
        let names: Vec<&str> = merged.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
