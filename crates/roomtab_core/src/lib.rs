//! Core domain logic for RoomTab, a catalog of rooms and their weekly
//! schedule time-blocks.
//! This crate is the single source of truth for timetable ordering
//! semantics.

pub mod auth;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod timetable;

pub use auth::RequestContext;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::room::{Room, RoomDraft, RoomFilter, RoomId, RoomPatch};
pub use model::schedule::{Schedule, ScheduleBatch, ScheduleDraft, ScheduleId};
pub use model::BlankFieldError;
pub use repo::room_repo::{RoomRepository, SqliteRoomRepository};
pub use repo::schedule_repo::{ScheduleRepository, SqliteScheduleRepository};
pub use repo::{RepoError, RepoResult};
pub use service::room_service::{RoomService, RoomServiceError};
pub use service::schedule_service::{ScheduleService, ScheduleServiceError};
pub use timetable::{
    assemble, build_key, normalize_day, normalize_time, sentinel_time, SortKey,
    UNKNOWN_DAY_ORDINAL, UNSORTABLE_DAY_ORDINAL,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
