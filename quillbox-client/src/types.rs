use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── API response types ──────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Note {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MeResponse {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeleteResponse {
    pub message: String,
}

// ── API request bodies ──────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct SignupBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SigninBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateNoteBody<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

/// Partial update: absent fields must not appear in the JSON at all, so the
/// server leaves them untouched.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateNoteBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateProfileBody<'a> {
    pub bio: &'a str,
}
