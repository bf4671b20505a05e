//! Custom assertions for taxonomy data

use larder_core::TagId;
use larder_taxonomy::TaxonomyRegistry;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert every string is a well-formed tag id
pub fn assert_canonical_format<S: AsRef<str>>(ids: &[S]) {
    for id in ids {
        let id = id.as_ref();
        if let Err(e) = TagId::parse(id) {
            panic!("'{}' is not a canonical tag id: {}", id, e);
        }
    }
}

/// Assert every id exists in `registry`
pub fn assert_registered<S: AsRef<str>>(registry: &TaxonomyRegistry, ids: &[S]) {
    for id in ids {
        let id = id.as_ref();
        assert!(
            registry.get_str(id).is_some(),
            "'{}' is not registered",
            id
        );
    }
}

/// Assert no item appears twice
pub fn assert_no_duplicates<T: Hash + Eq + Debug>(items: &[T]) {
    let unique: HashSet<_> = items.iter().collect();
    assert_eq!(
        items.len(),
        unique.len(),
        "Found {} duplicate entries in {:?}",
        items.len() - unique.len(),
        items
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::fixture_registry;

    #[test]
    fn test_canonical_format() {
        assert_canonical_format(&["cuisine.italian", "other.lidia-bastianich"]);
    }

    #[test]
    #[should_panic(expected = "is not a canonical tag id")]
    fn test_canonical_format_rejects_free_text() {
        assert_canonical_format(&["Italian"]);
    }

    #[test]
    #[should_panic(expected = "is not registered")]
    fn test_registered_rejects_unknown() {
        assert_registered(&fixture_registry(), &["cuisine.french"]);
    }

    #[test]
    #[should_panic(expected = "duplicate")]
    fn test_no_duplicates() {
        assert_no_duplicates(&["a", "b", "a"]);
    }
}
