//! Output model of the aggregator.

use std::ops::Deref;

use crate::docs::XmlComment;

/// A parsed comment plus, for properties only, the property's declared type.
///
/// The type can only be supplied at construction through
/// [`DocumentationRecord::for_property`]; records are never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentationRecord {
    comment: XmlComment,
    associated_type: Option<String>,
}

impl DocumentationRecord {
    /// Record for a type or method.
    pub fn new(comment: XmlComment) -> Self {
        Self {
            comment,
            associated_type: None,
        }
    }

    /// Record for a property, carrying the property's declared type.
    pub fn for_property(comment: XmlComment, ty: impl Into<String>) -> Self {
        Self {
            comment,
            associated_type: Some(ty.into()),
        }
    }

    pub fn comment(&self) -> &XmlComment {
        &self.comment
    }

    pub fn associated_type(&self) -> Option<&str> {
        self.associated_type.as_deref()
    }
}

impl Deref for DocumentationRecord {
    type Target = XmlComment;

    fn deref(&self) -> &XmlComment {
        &self.comment
    }
}

/// One documented declaration of the public surface.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceEntry {
    /// Documentation ID of the type (or of the member's containing type).
    pub type_id: String,
    /// Documentation ID of the member; `None` when the entry documents the type.
    pub member_id: Option<String>,
    pub record: DocumentationRecord,
}

impl SurfaceEntry {
    pub fn is_type_entry(&self) -> bool {
        self.member_id.is_none()
    }
}

/// Result of a collection pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collected {
    pub entries: Vec<SurfaceEntry>,
    pub(crate) complete: bool,
}

impl Collected {
    /// False when the pass was cancelled; `entries` is then a prefix of the full output.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry documenting the given type itself.
    pub fn type_entry(&self, type_id: &str) -> Option<&SurfaceEntry> {
        self.entries
            .iter()
            .find(|e| e.member_id.is_none() && e.type_id == type_id)
    }

    /// Entry documenting the given member.
    pub fn member_entry(&self, member_id: &str) -> Option<&SurfaceEntry> {
        self.entries
            .iter()
            .find(|e| e.member_id.as_deref() == Some(member_id))
    }
}
