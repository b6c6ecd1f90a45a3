//! Stateless session tokens.
//!
//! A session is an HS256 JWT carrying the user id and an expiry. The server
//! signs on signup/signin and verifies on every protected request; nothing is
//! persisted, so there is no logout endpoint - clients just drop the token.

use actix_web::HttpRequest;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No token was supplied with the request
    Missing,
    /// Bad signature, malformed token, or past expiry
    Invalid,
}

/// Sign a token asserting `user_id` for `ttl_hours` from now.
pub fn issue_token(
    user_id: &str,
    secret: &str,
    ttl_hours: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(ttl_hours)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a token and return the user id it asserts.
pub fn verify_token(token: Option<&str>, secret: &str) -> Result<String, AuthError> {
    let token = token.ok_or(AuthError::Missing)?;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims.sub)
    .map_err(|_| AuthError::Invalid)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}
