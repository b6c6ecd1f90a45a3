//! Shared helpers for controller tests.

use std::sync::Arc;

use actix_web::web;

use crate::AppState;
use crate::auth::issue_token;
use crate::config::Config;
use crate::db::Database;
use crate::password;

pub const TEST_SECRET: &str = "test-secret";

/// App state over a scratch database living in `dir`.
pub fn test_state(dir: &tempfile::TempDir) -> web::Data<AppState> {
    let db_path = dir.path().join("test.db");
    let db = Database::open(db_path.to_str().unwrap()).expect("Failed to open database");

    web::Data::new(AppState {
        db: Arc::new(db),
        config: Config {
            port: 0,
            database_url: String::new(),
            jwt_secret: TEST_SECRET.to_string(),
            token_ttl_hours: 1,
        },
        started_at: std::time::Instant::now(),
    })
}

/// Register a user directly in the store and return (user id, valid token).
pub fn seed_user_token(state: &web::Data<AppState>, email: &str) -> (String, String) {
    let hash = password::hash_password("pw123456").expect("Failed to hash password");
    let user = state
        .db
        .create_user(email, &hash, "Test User")
        .expect("Failed to create user");
    let token = issue_token(&user.id, &state.config.jwt_secret, 1).expect("Failed to issue token");
    (user.id, token)
}
