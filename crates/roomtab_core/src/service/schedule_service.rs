//! Schedule use-case service and the per-room timetable view.
//!
//! # Responsibility
//! - Provide list/bulk-create/replace/delete entry points for schedules.
//! - Serve the effective timetable for one room tag through the ordering
//!   engine.
//!
//! # Invariants
//! - A room tag with zero matching schedules is a `TimetableNotFound`
//!   error, applied uniformly — never an empty success.
//! - Bulk create either persists every entry or none.
//! - A schedule whose tag matches no room is still served; dangling
//!   references are tolerated here and resolved by consumers.

use crate::auth::RequestContext;
use crate::model::schedule::{Schedule, ScheduleBatch, ScheduleDraft, ScheduleId};
use crate::model::BlankFieldError;
use crate::repo::schedule_repo::ScheduleRepository;
use crate::repo::{RepoError, RepoResult};
use crate::timetable::assemble;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for schedule use-cases.
#[derive(Debug)]
pub enum ScheduleServiceError {
    /// Target schedule does not exist.
    ScheduleNotFound(ScheduleId),
    /// No schedule references this room tag.
    TimetableNotFound(String),
    /// Write input has a blank required field; nothing was mutated.
    Validation(BlankFieldError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ScheduleServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScheduleNotFound(id) => write!(f, "schedule not found: {id}"),
            Self::TimetableNotFound(tag) => {
                write!(f, "no schedules found for room tag `{tag}`")
            }
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ScheduleServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ScheduleServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::ScheduleNotFound(id) => Self::ScheduleNotFound(id),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service wrapper for schedule operations.
pub struct ScheduleService<R: ScheduleRepository> {
    repo: R,
}

impl<R: ScheduleRepository> ScheduleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every schedule row.
    pub fn list_schedules(&self, _ctx: &RequestContext) -> RepoResult<Vec<Schedule>> {
        self.repo.list_schedules()
    }

    /// Creates schedule rows for every entry of every batch.
    ///
    /// Batches are processed in input order and committed as one unit; a
    /// blank field anywhere rejects the whole request before any row is
    /// written. Room tags are taken as given — no existence check.
    pub fn bulk_create(
        &self,
        ctx: &RequestContext,
        batches: &[ScheduleBatch],
    ) -> Result<Vec<Schedule>, ScheduleServiceError> {
        let created = self.repo.insert_schedules(batches)?;
        info!(
            "event=schedule_bulk_create module=service status=ok request_id={} batches={} created={}",
            ctx.request_id(),
            batches.len(),
            created.len()
        );
        Ok(created)
    }

    /// Replaces all six data fields of one schedule.
    pub fn replace_schedule(
        &self,
        ctx: &RequestContext,
        id: ScheduleId,
        draft: &ScheduleDraft,
    ) -> Result<Schedule, ScheduleServiceError> {
        let schedule = self.repo.replace_schedule(id, draft)?;
        info!(
            "event=schedule_replace module=service status=ok request_id={} schedule_id={}",
            ctx.request_id(),
            id
        );
        Ok(schedule)
    }

    /// Deletes one schedule by id.
    pub fn delete_schedule(
        &self,
        ctx: &RequestContext,
        id: ScheduleId,
    ) -> Result<(), ScheduleServiceError> {
        self.repo.delete_schedule(id)?;
        info!(
            "event=schedule_delete module=service status=ok request_id={} schedule_id={}",
            ctx.request_id(),
            id
        );
        Ok(())
    }

    /// Returns the effective weekly timetable for one room tag.
    ///
    /// Fetches by exact-string tag match, then sorts through the ordering
    /// engine. Idempotent: unchanged data yields the identical sequence.
    pub fn room_timetable(
        &self,
        ctx: &RequestContext,
        tag: &str,
    ) -> Result<Vec<Schedule>, ScheduleServiceError> {
        let entries = self.repo.find_by_room_tag(tag)?;
        if entries.is_empty() {
            return Err(ScheduleServiceError::TimetableNotFound(tag.to_string()));
        }

        info!(
            "event=timetable_view module=service status=ok request_id={} room_tag={} entries={}",
            ctx.request_id(),
            tag,
            entries.len()
        );
        Ok(assemble(entries))
    }
}
