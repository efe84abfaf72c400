//! Domain model for the room and schedule catalog.
//!
//! # Responsibility
//! - Define canonical structured records used by core business logic.
//! - Keep write-input shapes (drafts, patches, filters) next to the records
//!   they produce.
//!
//! # Invariants
//! - `day`, `start` and `end` tokens are stored verbatim; normalization
//!   happens only on the timetable read path.
//! - Write inputs are validated field-by-field before any persistence.

pub mod room;
pub mod schedule;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for a required text field on a write input.
///
/// Carries the offending field name so callers can report exactly which
/// field was missing or blank before any mutation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankFieldError {
    pub field: &'static str,
}

impl Display for BlankFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} cannot be blank", self.field)
    }
}

impl Error for BlankFieldError {}

/// Returns whether a required text value counts as blank.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
