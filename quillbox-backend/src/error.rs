//! Service error taxonomy and its HTTP mapping.
//!
//! Every handler returns `Result<HttpResponse, ServiceError>`; the
//! `ResponseError` impl turns each variant into its fixed status code and a
//! `{"error": "..."}` JSON body. Internal failures are logged with detail at
//! the point of conversion and surface to clients as a generic message only.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Malformed or missing required field (400)
    #[error("{0}")]
    InvalidInput(String),

    /// Missing, invalid, or expired token (401)
    #[error("{0}")]
    Unauthorized(&'static str),

    /// Sign-in mismatch. Deliberately indistinguishable between an unknown
    /// email and a wrong password (401).
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Entity absent, or not owned by the caller (404)
    #[error("{0}")]
    NotFound(&'static str),

    /// Duplicate unique key (409)
    #[error("{0}")]
    Conflict(&'static str),

    /// Unexpected store/infra failure. Detail is logged server-side; clients
    /// only ever see this generic message (500).
    #[error("Internal server error")]
    Internal,
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unauthorized(_) | ServiceError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// JSON extractor config routing body-deserialization failures (malformed
/// JSON, missing required fields) through the same `{"error": ...}` shape as
/// every other 400, instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ServiceError::InvalidInput(err.to_string()).into())
}

impl From<rusqlite::Error> for ServiceError {
    fn from(e: rusqlite::Error) -> Self {
        // The only UNIQUE column in the schema is users.email, so a
        // constraint violation here is a signup race on a duplicate email.
        if let rusqlite::Error::SqliteFailure(err, _) = &e {
            if err.code == rusqlite::ErrorCode::ConstraintViolation {
                return ServiceError::Conflict("Email already registered");
            }
        }
        log::error!("Database error: {}", e);
        ServiceError::Internal
    }
}

impl From<jsonwebtoken::errors::Error> for ServiceError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        log::error!("Token signing error: {}", e);
        ServiceError::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServiceError::InvalidInput("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServiceError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServiceError::NotFound("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::Conflict("x").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServiceError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let err: ServiceError = rusqlite::Error::InvalidQuery.into();
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn test_unique_violation_maps_to_conflict() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE),
            Some("UNIQUE constraint failed: users.email".to_string()),
        );
        let err: ServiceError = sqlite_err.into();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }
}
