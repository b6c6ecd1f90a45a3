use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenv::dotenv;
use std::sync::Arc;

mod auth;
mod config;
mod controllers;
mod db;
mod error;
mod models;
mod password;
#[cfg(test)]
mod test_utils;

use config::Config;
use db::Database;

pub struct AppState {
    pub db: Arc<Database>,
    pub config: Config,
    /// Server start time for uptime reporting
    pub started_at: std::time::Instant,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    log::info!("Quillbox backend v{}", env!("CARGO_PKG_VERSION"));

    if let Some(parent) = std::path::Path::new(&config.database_url).parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let db = Arc::new(Database::open(&config.database_url).map_err(|e| {
        std::io::Error::other(format!(
            "Failed to open database at {}: {}",
            config.database_url, e
        ))
    })?);
    log::info!("Database ready at {}", config.database_url);

    let port = config.port;
    let started_at = std::time::Instant::now();

    log::info!("Server running on port {}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(error::json_config())
            .app_data(web::Data::new(AppState {
                db: Arc::clone(&db),
                config: config.clone(),
                started_at,
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::auth::config)
            .configure(controllers::notes::config)
            .configure(controllers::profile::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
