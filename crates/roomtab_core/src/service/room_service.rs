//! Room use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for room callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - `get`/`update`/`delete` on an unknown id is a `RoomNotFound` error,
//!   never an empty success.
//! - Create input is rejected field-by-field before any mutation.
//! - Deletion cascades to schedules referencing the room's tag.

use crate::auth::RequestContext;
use crate::model::room::{Room, RoomDraft, RoomFilter, RoomId, RoomPatch};
use crate::model::BlankFieldError;
use crate::repo::room_repo::RoomRepository;
use crate::repo::{RepoError, RepoResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for room use-cases.
#[derive(Debug)]
pub enum RoomServiceError {
    /// Target room does not exist.
    RoomNotFound(RoomId),
    /// Create input has a blank required field; nothing was mutated.
    Validation(BlankFieldError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for RoomServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoomNotFound(id) => write!(f, "room not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RoomServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::RoomNotFound(_) => None,
        }
    }
}

impl From<RepoError> for RoomServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::RoomNotFound(id) => Self::RoomNotFound(id),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service wrapper for room CRUD operations.
pub struct RoomService<R: RoomRepository> {
    repo: R,
}

impl<R: RoomRepository> RoomService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists rooms matching the category filter.
    ///
    /// Both filter terms are independent AND conditions over `type`, so
    /// they commute; an empty filter lists everything.
    pub fn list_rooms(&self, _ctx: &RequestContext, filter: &RoomFilter) -> RepoResult<Vec<Room>> {
        self.repo.list_rooms(filter)
    }

    /// Gets one room by surrogate id.
    pub fn get_room(&self, _ctx: &RequestContext, id: RoomId) -> Result<Room, RoomServiceError> {
        self.repo
            .get_room(id)?
            .ok_or(RoomServiceError::RoomNotFound(id))
    }

    /// Creates a room after validating every required field.
    pub fn create_room(
        &self,
        ctx: &RequestContext,
        draft: &RoomDraft,
    ) -> Result<Room, RoomServiceError> {
        let room = self.repo.insert_room(draft)?;
        info!(
            "event=room_create module=service status=ok request_id={} room_id={} tag={}",
            ctx.request_id(),
            room.id,
            room.tag
        );
        Ok(room)
    }

    /// Applies a partial update; unsupplied or blank fields keep their
    /// stored values.
    pub fn update_room(
        &self,
        ctx: &RequestContext,
        id: RoomId,
        patch: &RoomPatch,
    ) -> Result<Room, RoomServiceError> {
        let room = self.repo.update_room(id, patch)?;
        info!(
            "event=room_update module=service status=ok request_id={} room_id={} noop={}",
            ctx.request_id(),
            id,
            patch.is_empty()
        );
        Ok(room)
    }

    /// Deletes a room and cascades to its schedules.
    ///
    /// Returns the number of schedule rows removed with the room.
    pub fn delete_room(
        &self,
        ctx: &RequestContext,
        id: RoomId,
    ) -> Result<u64, RoomServiceError> {
        let cascaded = self.repo.delete_room(id)?;
        info!(
            "event=room_delete module=service status=ok request_id={} room_id={} cascaded={}",
            ctx.request_id(),
            id,
            cascaded
        );
        Ok(cascaded)
    }
}
