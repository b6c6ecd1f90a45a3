use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Minimum accepted password length at signup
pub const MIN_PASSWORD_LEN: usize = 8;
/// Maximum bio length, in characters
pub const MAX_BIO_LEN: usize = 500;

/// A user row. Holds the password hash, so this type never serializes;
/// responses go through [`UserResponse`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User shape safe for client responses (no password hash)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            bio: user.bio,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl SignupRequest {
    /// Validate field shapes before any store access.
    pub fn validate(&self) -> Result<(), ServiceError> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ServiceError::InvalidInput(
                "A valid email is required".to_string(),
            ));
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(ServiceError::InvalidInput(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        if self.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput("Name is required".to_string()));
        }
        Ok(())
    }

    /// Emails are stored trimmed and lowercased, which makes the UNIQUE
    /// column on users.email effectively case-insensitive.
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

impl SigninRequest {
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    /// Absent means "leave the bio alone"; present replaces it.
    pub bio: Option<String>,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(bio) = &self.bio {
            if bio.chars().count() > MAX_BIO_LEN {
                return Err(ServiceError::InvalidInput(format!(
                    "Bio must be less than {} characters",
                    MAX_BIO_LEN
                )));
            }
        }
        Ok(())
    }
}
