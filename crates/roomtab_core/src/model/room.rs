//! Room domain model.
//!
//! # Responsibility
//! - Define the canonical room record and its write-input shapes.
//! - Own per-field validation for room create input.
//!
//! # Invariants
//! - `id` is a storage-assigned surrogate key and never changes.
//! - `tag` is the business key other records reference; schedules point at
//!   it, not at `id`.
//! - Patch semantics are partial: blank or absent fields leave the stored
//!   value untouched.

use crate::model::{is_blank, BlankFieldError};
use serde::{Deserialize, Serialize};

/// Storage-assigned surrogate key for rooms.
pub type RoomId = i64;

/// Canonical room record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Surrogate key assigned on insert.
    pub id: RoomId,
    /// Short business key referenced by schedules.
    pub tag: String,
    /// Human-readable label.
    pub name: String,
    /// Containing building or area.
    pub parent: String,
    /// Free-text category, e.g. "Classroom" or "Lab".
    #[serde(rename = "type")]
    pub kind: String,
}

/// Create input for a room. All four fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDraft {
    pub tag: String,
    pub name: String,
    pub parent: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl RoomDraft {
    /// Checks that every required field carries a non-blank value.
    ///
    /// # Errors
    /// - [`BlankFieldError`] naming the first blank field encountered.
    pub fn validate(&self) -> Result<(), BlankFieldError> {
        for (field, value) in [
            ("tag", self.tag.as_str()),
            ("name", self.name.as_str()),
            ("parent", self.parent.as_str()),
            ("type", self.kind.as_str()),
        ] {
            if is_blank(value) {
                return Err(BlankFieldError { field });
            }
        }
        Ok(())
    }
}

/// Partial update input for a room.
///
/// A field is applied only when it is supplied with a non-blank value;
/// everything else keeps its stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPatch {
    pub tag: Option<String>,
    pub name: Option<String>,
    pub parent: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl RoomPatch {
    /// Returns the effective value for one patch field, treating blank
    /// input the same as an absent field.
    pub(crate) fn supplied(field: &Option<String>) -> Option<&str> {
        field.as_deref().filter(|value| !is_blank(value))
    }

    /// Returns whether the patch would change anything at all.
    pub fn is_empty(&self) -> bool {
        Self::supplied(&self.tag).is_none()
            && Self::supplied(&self.name).is_none()
            && Self::supplied(&self.parent).is_none()
            && Self::supplied(&self.kind).is_none()
    }
}

/// Listing filter over the room category attribute.
///
/// Both conditions are independent AND terms over the same `type` column,
/// so their application order does not matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    /// Keep only rooms whose `type` equals this value exactly.
    pub kind: Option<String>,
    /// Drop rooms whose `type` equals this value exactly.
    pub exclude_kind: Option<String>,
}
