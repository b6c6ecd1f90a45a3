//! Notes REST API - owner-scoped CRUD.
//!
//! Every handler authenticates first, then queries with the caller's user id
//! baked into the SQL, so a foreign note id behaves exactly like a missing
//! one.

use actix_web::{HttpRequest, HttpResponse, web};

use super::require_user;
use crate::AppState;
use crate::error::ServiceError;
use crate::models::{CreateNoteRequest, UpdateNoteRequest};

async fn list_notes(
    data: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ServiceError> {
    let user_id = require_user(&data, &req)?;
    let notes = data.db.list_notes(&user_id)?;
    Ok(HttpResponse::Ok().json(notes))
}

async fn create_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<CreateNoteRequest>,
) -> Result<HttpResponse, ServiceError> {
    let user_id = require_user(&data, &req)?;
    let title = body.validated_title()?;

    let note = data.db.create_note(&user_id, title, &body.content)?;
    Ok(HttpResponse::Created().json(note))
}

async fn update_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<UpdateNoteRequest>,
) -> Result<HttpResponse, ServiceError> {
    let user_id = require_user(&data, &req)?;
    let note_id = path.into_inner();
    let title = body.validated_title()?;

    let note = data
        .db
        .update_note(&user_id, &note_id, title, body.content.as_deref())?
        .ok_or(ServiceError::NotFound("Note not found"))?;
    Ok(HttpResponse::Ok().json(note))
}

async fn delete_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let user_id = require_user(&data, &req)?;
    let note_id = path.into_inner();

    if !data.db.delete_note(&user_id, &note_id)? {
        return Err(ServiceError::NotFound("Note not found"));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Note deleted successfully"
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::put().to(update_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}
