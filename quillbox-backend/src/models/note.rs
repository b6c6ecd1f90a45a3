use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// A note row. Every note is owned by exactly one user and all access is
/// scoped by (id, owner_id).
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl CreateNoteRequest {
    /// Returns the trimmed title, rejecting blank/whitespace-only titles.
    pub fn validated_title(&self) -> Result<&str, ServiceError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ServiceError::InvalidInput("Title is required".to_string()));
        }
        Ok(title)
    }
}

/// Partial update: only fields present in the body are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdateNoteRequest {
    /// Trimmed title if present. A present-but-blank title fails the same
    /// non-empty rule as create; content may be set to empty explicitly.
    pub fn validated_title(&self) -> Result<Option<&str>, ServiceError> {
        match &self.title {
            None => Ok(None),
            Some(title) => {
                let title = title.trim();
                if title.is_empty() {
                    return Err(ServiceError::InvalidInput("Title is required".to_string()));
                }
                Ok(Some(title))
            }
        }
    }
}
