//! User table operations

use chrono::Utc;
use rusqlite::{OptionalExtension, Result as SqliteResult, Row};
use uuid::Uuid;

use super::super::{Database, parse_rfc3339};
use crate::models::User;

fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        password_hash: row.get(2)?,
        name: row.get(3)?,
        bio: row.get(4)?,
        created_at: parse_rfc3339(5, row.get(5)?)?,
        updated_at: parse_rfc3339(6, row.get(6)?)?,
    })
}

const USER_COLUMNS: &str = "id, email, password_hash, name, bio, created_at, updated_at";

impl Database {
    /// Insert a new user. The email must already be normalized and the
    /// password already hashed; the UNIQUE column rejects duplicates.
    pub fn create_user(&self, email: &str, password_hash: &str, name: &str) -> SqliteResult<User> {
        let conn = self.conn.lock().unwrap();
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        conn.execute(
            "INSERT INTO users (id, email, password_hash, name, bio, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, '', ?5, ?5)",
            rusqlite::params![id, email, password_hash, name, now_str],
        )?;

        Ok(User {
            id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            name: name.to_string(),
            bio: String::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> SqliteResult<Option<User>> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            &format!("SELECT {} FROM users WHERE email = ?1", USER_COLUMNS),
            [email],
            row_to_user,
        )
        .optional()
    }

    pub fn get_user_by_id(&self, id: &str) -> SqliteResult<Option<User>> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            &format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS),
            [id],
            row_to_user,
        )
        .optional()
    }

    /// Replace the bio and refresh updated_at. Returns the updated row, or
    /// `None` if no such user exists.
    pub fn update_user_bio(&self, id: &str, bio: &str) -> SqliteResult<Option<User>> {
        let conn = self.conn.lock().unwrap();
        let now_str = Utc::now().to_rfc3339();

        let rows = conn.execute(
            "UPDATE users SET bio = ?1, updated_at = ?2 WHERE id = ?3",
            rusqlite::params![bio, now_str, id],
        )?;
        if rows == 0 {
            return Ok(None);
        }

        conn.query_row(
            &format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS),
            [id],
            row_to_user,
        )
        .optional()
    }
}
