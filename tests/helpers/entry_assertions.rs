//! Assertion helpers for collected documentation entries.

use apidoc::{Collected, SurfaceEntry};

/// `(type id, member id)` pairs in emission order.
pub fn entry_ids(collected: &Collected) -> Vec<(&str, Option<&str>)> {
    collected
        .entries
        .iter()
        .map(|e| (e.type_id.as_str(), e.member_id.as_deref()))
        .collect()
}

/// Assert an entry exists for the given member id and return it.
pub fn get_member<'a>(collected: &'a Collected, member_id: &str) -> &'a SurfaceEntry {
    collected
        .member_entry(member_id)
        .unwrap_or_else(|| panic!("Expected an entry for '{}'", member_id))
}

/// Assert an entry exists for the given type id and return it.
pub fn get_type<'a>(collected: &'a Collected, type_id: &str) -> &'a SurfaceEntry {
    collected
        .type_entry(type_id)
        .unwrap_or_else(|| panic!("Expected an entry for '{}'", type_id))
}

/// Assert no entry mentions the given id.
pub fn assert_absent(collected: &Collected, id: &str) {
    let found = collected
        .entries
        .iter()
        .any(|e| e.type_id == id || e.member_id.as_deref() == Some(id));
    assert!(!found, "Expected no entry for '{}'", id);
}

/// Assert no entry belongs to a constructor.
pub fn assert_no_constructors(collected: &Collected) {
    for entry in &collected.entries {
        if let Some(member) = &entry.member_id {
            assert!(
                !member.contains(".#ctor"),
                "Unexpected constructor entry: {}",
                member
            );
        }
    }
}
