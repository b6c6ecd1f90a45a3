//! Profile REST API - read and bio update for the authenticated user.

use actix_web::{HttpRequest, HttpResponse, web};

use super::require_user;
use crate::AppState;
use crate::error::ServiceError;
use crate::models::{UpdateProfileRequest, UserResponse};

async fn get_profile(
    data: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ServiceError> {
    let user_id = require_user(&data, &req)?;

    let user = data
        .db
        .get_user_by_id(&user_id)?
        .ok_or(ServiceError::NotFound("User not found"))?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

async fn update_profile(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ServiceError> {
    let user_id = require_user(&data, &req)?;
    body.validate()?;

    // Bio absent means nothing to change; respond with the current profile.
    // A verified token for a user the store has never seen (users are never
    // deleted) means the store is broken, not that the resource is missing.
    let user = match &body.bio {
        Some(bio) => data.db.update_user_bio(&user_id, bio)?,
        None => data.db.get_user_by_id(&user_id)?,
    }
    .ok_or_else(|| {
        log::error!("Authenticated user {} missing from users table", user_id);
        ServiceError::Internal
    })?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/profile")
            .route("", web::get().to(get_profile))
            .route("", web::put().to(update_profile)),
    );
}
