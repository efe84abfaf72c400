//! Room repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `rooms` table.
//! - Own the cascade rule: deleting a room deletes every schedule
//!   referencing its tag.
//!
//! # Invariants
//! - `insert_room` validates the draft before any SQL mutation.
//! - Patch application is partial: only supplied non-blank fields change.
//! - Cascade delete runs as one IMMEDIATE transaction: dependent schedules
//!   first, then the room row.

use crate::model::room::{Room, RoomDraft, RoomFilter, RoomId, RoomPatch};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

const ROOM_SELECT_SQL: &str = "SELECT
    id,
    tag,
    name,
    parent,
    type
FROM rooms";

const ROOM_COLUMNS: &[&str] = &["id", "tag", "name", "parent", "type"];

/// Repository interface for room CRUD operations.
pub trait RoomRepository {
    fn insert_room(&self, draft: &RoomDraft) -> RepoResult<Room>;
    fn get_room(&self, id: RoomId) -> RepoResult<Option<Room>>;
    fn list_rooms(&self, filter: &RoomFilter) -> RepoResult<Vec<Room>>;
    fn update_room(&self, id: RoomId, patch: &RoomPatch) -> RepoResult<Room>;
    /// Deletes the room and every schedule referencing its tag.
    /// Returns the number of cascaded schedule rows.
    fn delete_room(&self, id: RoomId) -> RepoResult<u64>;
}

/// SQLite-backed room repository.
pub struct SqliteRoomRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRoomRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "rooms", ROOM_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl RoomRepository for SqliteRoomRepository<'_> {
    fn insert_room(&self, draft: &RoomDraft) -> RepoResult<Room> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO rooms (tag, name, parent, type) VALUES (?1, ?2, ?3, ?4);",
            params![
                draft.tag.as_str(),
                draft.name.as_str(),
                draft.parent.as_str(),
                draft.kind.as_str(),
            ],
        )?;

        load_required_room(self.conn, self.conn.last_insert_rowid())
    }

    fn get_room(&self, id: RoomId) -> RepoResult<Option<Room>> {
        load_room(self.conn, id)
    }

    fn list_rooms(&self, filter: &RoomFilter) -> RepoResult<Vec<Room>> {
        let mut sql = format!("{ROOM_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(kind) = filter.kind.as_deref() {
            sql.push_str(" AND type = ?");
            bind_values.push(Value::Text(kind.to_string()));
        }

        if let Some(excluded) = filter.exclude_kind.as_deref() {
            sql.push_str(" AND type <> ?");
            bind_values.push(Value::Text(excluded.to_string()));
        }

        sql.push_str(" ORDER BY id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut rooms = Vec::new();

        while let Some(row) = rows.next()? {
            rooms.push(parse_room_row(row)?);
        }

        Ok(rooms)
    }

    fn update_room(&self, id: RoomId, patch: &RoomPatch) -> RepoResult<Room> {
        let mut assignments: Vec<&str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        for (assignment, value) in [
            ("tag = ?", RoomPatch::supplied(&patch.tag)),
            ("name = ?", RoomPatch::supplied(&patch.name)),
            ("parent = ?", RoomPatch::supplied(&patch.parent)),
            ("type = ?", RoomPatch::supplied(&patch.kind)),
        ] {
            if let Some(value) = value {
                assignments.push(assignment);
                bind_values.push(Value::Text(value.to_string()));
            }
        }

        if assignments.is_empty() {
            return load_required_room(self.conn, id);
        }

        let sql = format!("UPDATE rooms SET {} WHERE id = ?;", assignments.join(", "));
        bind_values.push(Value::Integer(id));

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        if changed == 0 {
            return Err(RepoError::RoomNotFound(id));
        }

        load_required_room(self.conn, id)
    }

    fn delete_room(&self, id: RoomId) -> RepoResult<u64> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let room = load_room(&tx, id)?.ok_or(RepoError::RoomNotFound(id))?;
        let cascaded = tx.execute(
            "DELETE FROM schedules WHERE room_tag = ?1;",
            [room.tag.as_str()],
        )? as u64;
        tx.execute("DELETE FROM rooms WHERE id = ?1;", [id])?;

        tx.commit()?;
        Ok(cascaded)
    }
}

fn load_room(conn: &Connection, id: RoomId) -> RepoResult<Option<Room>> {
    let room = conn
        .query_row(
            &format!("{ROOM_SELECT_SQL} WHERE id = ?1;"),
            [id],
            parse_room_row,
        )
        .optional()?;
    Ok(room)
}

fn load_required_room(conn: &Connection, id: RoomId) -> RepoResult<Room> {
    load_room(conn, id)?.ok_or(RepoError::RoomNotFound(id))
}

fn parse_room_row(row: &Row<'_>) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get("id")?,
        tag: row.get("tag")?,
        name: row.get("name")?,
        parent: row.get("parent")?,
        kind: row.get("type")?,
    })
}
