//! Note table operations.
//!
//! Every query here filters by owner_id as well as id, in a single
//! statement, so ownership checks and existence checks are atomic: a
//! concurrent delete surfaces as zero rows affected, never as a silent
//! partial write. Concurrent updates to the same note are last-write-wins;
//! there is no conflict detection.

use chrono::Utc;
use rusqlite::{OptionalExtension, Result as SqliteResult, Row};
use uuid::Uuid;

use super::super::{Database, parse_rfc3339};
use crate::models::Note;

fn row_to_note(row: &Row) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        title: row.get(2)?,
        content: row.get(3)?,
        created_at: parse_rfc3339(4, row.get(4)?)?,
        updated_at: parse_rfc3339(5, row.get(5)?)?,
    })
}

const NOTE_COLUMNS: &str = "id, owner_id, title, content, created_at, updated_at";

impl Database {
    /// All notes owned by `owner_id`, most recently updated first.
    pub fn list_notes(&self, owner_id: &str) -> SqliteResult<Vec<Note>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM notes WHERE owner_id = ?1 ORDER BY updated_at DESC",
            NOTE_COLUMNS
        ))?;
        let notes = stmt
            .query_map([owner_id], row_to_note)?
            .collect::<SqliteResult<Vec<Note>>>()?;
        Ok(notes)
    }

    pub fn create_note(&self, owner_id: &str, title: &str, content: &str) -> SqliteResult<Note> {
        let conn = self.conn.lock().unwrap();
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        conn.execute(
            "INSERT INTO notes (id, owner_id, title, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            rusqlite::params![id, owner_id, title, content, now_str],
        )?;

        Ok(Note {
            id: id.clone(),
            owner_id: owner_id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn get_note(&self, owner_id: &str, note_id: &str) -> SqliteResult<Option<Note>> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            &format!(
                "SELECT {} FROM notes WHERE id = ?1 AND owner_id = ?2",
                NOTE_COLUMNS
            ),
            [note_id, owner_id],
            row_to_note,
        )
        .optional()
    }

    /// Partial update: a `None` field keeps the stored value. Returns the
    /// updated note, or `None` when no note with that id is owned by
    /// `owner_id`.
    pub fn update_note(
        &self,
        owner_id: &str,
        note_id: &str,
        title: Option<&str>,
        content: Option<&str>,
    ) -> SqliteResult<Option<Note>> {
        let conn = self.conn.lock().unwrap();
        let now_str = Utc::now().to_rfc3339();

        let rows = conn.execute(
            "UPDATE notes
             SET title = COALESCE(?1, title),
                 content = COALESCE(?2, content),
                 updated_at = ?3
             WHERE id = ?4 AND owner_id = ?5",
            rusqlite::params![title, content, now_str, note_id, owner_id],
        )?;
        if rows == 0 {
            return Ok(None);
        }

        conn.query_row(
            &format!(
                "SELECT {} FROM notes WHERE id = ?1 AND owner_id = ?2",
                NOTE_COLUMNS
            ),
            [note_id, owner_id],
            row_to_note,
        )
        .optional()
    }

    /// Ownership-scoped delete. Returns whether a row was removed.
    pub fn delete_note(&self, owner_id: &str, note_id: &str) -> SqliteResult<bool> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute(
            "DELETE FROM notes WHERE id = ?1 AND owner_id = ?2",
            [note_id, owner_id],
        )?;
        Ok(rows > 0)
    }
}
