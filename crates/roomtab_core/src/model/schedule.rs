//! Schedule domain model.
//!
//! # Responsibility
//! - Define the canonical schedule record, its write-input shape and the
//!   bulk-create batch envelope.
//! - Own per-field validation for schedule create/replace input.
//!
//! # Invariants
//! - `day`, `start` and `end` are free-form tokens persisted verbatim.
//! - `room_tag` references a room's business tag and is never checked for
//!   existence; dangling references are tolerated downstream.
//! - Updates are full replacements of all six data fields, never partial.

use crate::model::{is_blank, BlankFieldError};
use serde::{Deserialize, Serialize};

/// Storage-assigned surrogate key for schedules.
pub type ScheduleId = i64;

/// Canonical schedule record for one recurring time-block in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Surrogate key assigned on insert.
    pub id: ScheduleId,
    /// Free-form day token, e.g. "Monday", "mon", " TUE ".
    pub day: String,
    /// Free-form start-of-block time token, e.g. "7:30 AM" or "14:30".
    pub start: String,
    /// Free-form end-of-block time token.
    pub end: String,
    pub subject: String,
    pub section: String,
    pub teacher: String,
    /// Business tag of the owning room. Matching is exact-string.
    pub room_tag: String,
}

/// The six data fields of a schedule, used both as one bulk-create entry
/// and as the full-replacement payload for updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDraft {
    pub day: String,
    pub start: String,
    pub end: String,
    pub subject: String,
    pub section: String,
    pub teacher: String,
}

impl ScheduleDraft {
    /// Checks that every required field carries a non-blank value.
    ///
    /// # Errors
    /// - [`BlankFieldError`] naming the first blank field encountered.
    pub fn validate(&self) -> Result<(), BlankFieldError> {
        for (field, value) in [
            ("day", self.day.as_str()),
            ("start", self.start.as_str()),
            ("end", self.end.as_str()),
            ("subject", self.subject.as_str()),
            ("section", self.section.as_str()),
            ("teacher", self.teacher.as_str()),
        ] {
            if is_blank(value) {
                return Err(BlankFieldError { field });
            }
        }
        Ok(())
    }
}

/// One bulk-create group: every entry becomes a schedule row tagged with
/// `room_tag`. Batches are processed in slice order, entries in vec order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBatch {
    pub room_tag: String,
    pub entries: Vec<ScheduleDraft>,
}
