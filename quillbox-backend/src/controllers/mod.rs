pub mod auth;
pub mod health;
pub mod notes;
pub mod profile;

use actix_web::{HttpRequest, web};

use crate::AppState;
use crate::auth::{AuthError, bearer_token, verify_token};
use crate::error::ServiceError;

/// Resolve the authenticated user id from the request's bearer token.
/// Every protected handler calls this first; on failure the caller gets 401
/// and no store access happens.
pub fn require_user(
    state: &web::Data<AppState>,
    req: &HttpRequest,
) -> Result<String, ServiceError> {
    verify_token(bearer_token(req), &state.config.jwt_secret).map_err(|e| match e {
        AuthError::Missing => ServiceError::Unauthorized("No authorization token provided"),
        AuthError::Invalid => ServiceError::Unauthorized("Invalid or expired token"),
    })
}
