//! SQLite storage.
//!
//! A single `Database` wraps a mutexed connection; CRUD methods live in
//! `impl Database` blocks under `tables/`, one file per table. Timestamps are
//! stored as RFC3339 text and parsed back to `DateTime<Utc>`.

pub mod tables;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result as SqliteResult};
use std::sync::Mutex;

pub struct Database {
    pub(crate) conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the database at `path` and bootstrap the schema.
    pub fn open(path: &str) -> SqliteResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                name TEXT NOT NULL,
                bio TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS notes (
                id TEXT PRIMARY KEY,
                owner_id TEXT NOT NULL REFERENCES users(id),
                title TEXT NOT NULL,
                content TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_notes_owner_updated
                ON notes(owner_id, updated_at);",
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

/// Parse an RFC3339 timestamp column, surfacing bad data as a conversion
/// error instead of panicking inside a row mapper.
pub(crate) fn parse_rfc3339(idx: usize, value: String) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}
