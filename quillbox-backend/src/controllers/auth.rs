//! Auth REST API - signup, signin, and current-user lookup.

use actix_web::{HttpRequest, HttpResponse, web};

use super::require_user;
use crate::AppState;
use crate::auth::issue_token;
use crate::error::ServiceError;
use crate::models::{AuthResponse, SigninRequest, SignupRequest, UserResponse};
use crate::password;

async fn signup(
    data: web::Data<AppState>,
    body: web::Json<SignupRequest>,
) -> Result<HttpResponse, ServiceError> {
    body.validate()?;
    let email = body.normalized_email();

    if data.db.get_user_by_email(&email)?.is_some() {
        return Err(ServiceError::Conflict("Email already registered"));
    }

    let hash = password::hash_password(&body.password)?;
    // A concurrent signup with the same email loses here: the UNIQUE
    // constraint fires and maps to the same Conflict as the pre-check.
    let user = data.db.create_user(&email, &hash, body.name.trim())?;

    log::info!("New user registered: {}", user.id);

    let token = issue_token(&user.id, &data.config.jwt_secret, data.config.token_ttl_hours)?;
    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        user: user.into(),
    }))
}

async fn signin(
    data: web::Data<AppState>,
    body: web::Json<SigninRequest>,
) -> Result<HttpResponse, ServiceError> {
    let email = body.normalized_email();

    // Unknown email and wrong password answer identically.
    let user = data
        .db
        .get_user_by_email(&email)?
        .filter(|u| password::verify_password(&body.password, &u.password_hash))
        .ok_or(ServiceError::InvalidCredentials)?;

    let token = issue_token(&user.id, &data.config.jwt_secret, data.config.token_ttl_hours)?;
    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: user.into(),
    }))
}

async fn me(data: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, ServiceError> {
    let user_id = require_user(&data, &req)?;

    let user = data
        .db
        .get_user_by_id(&user_id)?
        .ok_or(ServiceError::NotFound("User not found"))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "user": UserResponse::from(user)
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .route("/signup", web::post().to(signup))
            .route("/signin", web::post().to(signin))
            .route("/me", web::get().to(me)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_token;
    use crate::test_utils::test_state;
    use actix_web::{App, test};
    use tempfile::tempdir;

    #[actix_web::test]
    async fn test_signup_signin_scenario() {
        let dir = tempdir().unwrap();
        let state = test_state(&dir);
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(config)).await;

        // Signup succeeds
        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(serde_json::json!({
                "email": "a@x.com", "password": "pw123456", "name": "Ann"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["user"].get("password_hash").is_none());
        let user_id = body["user"]["id"].as_str().unwrap().to_string();

        // The issued token verifies to the same user id
        let token = body["token"].as_str().unwrap();
        assert_eq!(
            verify_token(Some(token), &state.config.jwt_secret).unwrap(),
            user_id
        );

        // Wrong password is a uniform 401
        let req = test::TestRequest::post()
            .uri("/api/auth/signin")
            .set_json(serde_json::json!({ "email": "a@x.com", "password": "wrong" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid credentials");

        // Unknown email answers identically
        let req = test::TestRequest::post()
            .uri("/api/auth/signin")
            .set_json(serde_json::json!({ "email": "nobody@x.com", "password": "pw123456" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid credentials");

        // Correct credentials sign in, case-insensitively on the email
        let req = test::TestRequest::post()
            .uri("/api/auth/signin")
            .set_json(serde_json::json!({ "email": "A@X.com", "password": "pw123456" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["user"]["id"], user_id.as_str());
        let token = body["token"].as_str().unwrap().to_string();

        // /me resolves the token back to the user
        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["user"]["id"], user_id.as_str());
        assert_eq!(body["user"]["email"], "a@x.com");
    }

    #[actix_web::test]
    async fn test_duplicate_signup_conflicts() {
        let dir = tempdir().unwrap();
        let app = test::init_service(
            App::new().app_data(test_state(&dir)).configure(config),
        )
        .await;

        let payload = serde_json::json!({
            "email": "a@x.com", "password": "pw123456", "name": "Ann"
        });
        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(&payload)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);

        // Same email, different case
        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(serde_json::json!({
                "email": "A@X.COM", "password": "pw123456", "name": "Ann Again"
            }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 409);
    }

    #[actix_web::test]
    async fn test_signup_validation_errors() {
        let dir = tempdir().unwrap();
        let app = test::init_service(
            App::new().app_data(test_state(&dir)).configure(config),
        )
        .await;

        for payload in [
            serde_json::json!({ "email": "", "password": "pw123456", "name": "Ann" }),
            serde_json::json!({ "email": "a@x.com", "password": "short", "name": "Ann" }),
            serde_json::json!({ "email": "a@x.com", "password": "pw123456", "name": "  " }),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/auth/signup")
                .set_json(&payload)
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), 400);
        }
    }

    #[actix_web::test]
    async fn test_malformed_body_gets_json_error() {
        let dir = tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(crate::error::json_config())
                .app_data(test_state(&dir))
                .configure(config),
        )
        .await;

        // Unparseable JSON
        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());

        // Well-formed JSON missing required fields
        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(serde_json::json!({ "email": "a@x.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_me_requires_token() {
        let dir = tempdir().unwrap();
        let app = test::init_service(
            App::new().app_data(test_state(&dir)).configure(config),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/auth/me").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 401);

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(("Authorization", "Bearer bogus"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 401);
    }
}
