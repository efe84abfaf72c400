//! Schedule repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `schedules` table, including bulk create.
//! - Own the exact-string tag lookup feeding the timetable view.
//!
//! # Invariants
//! - Bulk create validates every entry before any insert and commits all
//!   rows in one IMMEDIATE transaction.
//! - `replace_schedule` overwrites all six data fields; `room_tag` is not
//!   part of the replacement payload.
//! - Tag lookup matches the stored `room_tag` verbatim, with no
//!   normalization, ordered by id so downstream sorting sees a stable
//!   input sequence.

use crate::model::schedule::{Schedule, ScheduleBatch, ScheduleDraft, ScheduleId};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

const SCHEDULE_SELECT_SQL: &str = "SELECT
    id,
    day,
    start,
    \"end\",
    subject,
    section,
    teacher,
    room_tag
FROM schedules";

const SCHEDULE_COLUMNS: &[&str] = &[
    "id", "day", "start", "end", "subject", "section", "teacher", "room_tag",
];

/// Repository interface for schedule CRUD operations.
pub trait ScheduleRepository {
    /// Inserts every entry of every batch, tagged with its batch's
    /// `room_tag`, in input order. Returns the created rows.
    fn insert_schedules(&self, batches: &[ScheduleBatch]) -> RepoResult<Vec<Schedule>>;
    fn list_schedules(&self) -> RepoResult<Vec<Schedule>>;
    fn get_schedule(&self, id: ScheduleId) -> RepoResult<Option<Schedule>>;
    fn replace_schedule(&self, id: ScheduleId, draft: &ScheduleDraft) -> RepoResult<Schedule>;
    fn delete_schedule(&self, id: ScheduleId) -> RepoResult<()>;
    /// Returns all schedules whose stored `room_tag` equals `tag` exactly.
    fn find_by_room_tag(&self, tag: &str) -> RepoResult<Vec<Schedule>>;
}

/// SQLite-backed schedule repository.
pub struct SqliteScheduleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteScheduleRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "schedules", SCHEDULE_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl ScheduleRepository for SqliteScheduleRepository<'_> {
    fn insert_schedules(&self, batches: &[ScheduleBatch]) -> RepoResult<Vec<Schedule>> {
        for batch in batches {
            for entry in &batch.entries {
                entry.validate()?;
            }
        }

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let mut created = Vec::new();

        for batch in batches {
            for entry in &batch.entries {
                tx.execute(
                    "INSERT INTO schedules (
                        day,
                        start,
                        \"end\",
                        subject,
                        section,
                        teacher,
                        room_tag
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                    params![
                        entry.day.as_str(),
                        entry.start.as_str(),
                        entry.end.as_str(),
                        entry.subject.as_str(),
                        entry.section.as_str(),
                        entry.teacher.as_str(),
                        batch.room_tag.as_str(),
                    ],
                )?;
                created.push(load_required_schedule(&tx, tx.last_insert_rowid())?);
            }
        }

        tx.commit()?;
        Ok(created)
    }

    fn list_schedules(&self) -> RepoResult<Vec<Schedule>> {
        query_schedules(self.conn, &format!("{SCHEDULE_SELECT_SQL} ORDER BY id ASC;"), [])
    }

    fn get_schedule(&self, id: ScheduleId) -> RepoResult<Option<Schedule>> {
        load_schedule(self.conn, id)
    }

    fn replace_schedule(&self, id: ScheduleId, draft: &ScheduleDraft) -> RepoResult<Schedule> {
        draft.validate()?;

        let changed = self.conn.execute(
            "UPDATE schedules
             SET
                day = ?1,
                start = ?2,
                \"end\" = ?3,
                subject = ?4,
                section = ?5,
                teacher = ?6
             WHERE id = ?7;",
            params![
                draft.day.as_str(),
                draft.start.as_str(),
                draft.end.as_str(),
                draft.subject.as_str(),
                draft.section.as_str(),
                draft.teacher.as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::ScheduleNotFound(id));
        }

        load_required_schedule(self.conn, id)
    }

    fn delete_schedule(&self, id: ScheduleId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM schedules WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::ScheduleNotFound(id));
        }

        Ok(())
    }

    fn find_by_room_tag(&self, tag: &str) -> RepoResult<Vec<Schedule>> {
        query_schedules(
            self.conn,
            &format!("{SCHEDULE_SELECT_SQL} WHERE room_tag = ?1 ORDER BY id ASC;"),
            [tag],
        )
    }
}

fn query_schedules(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> RepoResult<Vec<Schedule>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut schedules = Vec::new();

    while let Some(row) = rows.next()? {
        schedules.push(parse_schedule_row(row)?);
    }

    Ok(schedules)
}

fn load_schedule(conn: &Connection, id: ScheduleId) -> RepoResult<Option<Schedule>> {
    let schedule = conn
        .query_row(
            &format!("{SCHEDULE_SELECT_SQL} WHERE id = ?1;"),
            [id],
            parse_schedule_row,
        )
        .optional()?;
    Ok(schedule)
}

fn load_required_schedule(conn: &Connection, id: ScheduleId) -> RepoResult<Schedule> {
    load_schedule(conn, id)?.ok_or(RepoError::ScheduleNotFound(id))
}

fn parse_schedule_row(row: &Row<'_>) -> rusqlite::Result<Schedule> {
    Ok(Schedule {
        id: row.get("id")?,
        day: row.get("day")?,
        start: row.get("start")?,
        end: row.get("end")?,
        subject: row.get("subject")?,
        section: row.get("section")?,
        teacher: row.get("teacher")?,
        room_tag: row.get("room_tag")?,
    })
}
