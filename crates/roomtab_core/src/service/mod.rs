//! Resource-layer services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs for rooms and
//!   schedules.
//! - Map repository errors onto caller-facing semantics: not-found is a
//!   distinct signal, validation failures surface the offending field.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - Every operation takes an explicit [`RequestContext`](crate::auth::RequestContext);
//!   there is no ambient session state.

pub mod room_service;
pub mod schedule_service;
