use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// HS256 signing secret for session tokens. Set this in production;
    /// the dev fallback is only good for local testing.
    pub const JWT_SECRET: &str = "JWT_SECRET";
    pub const TOKEN_TTL_HOURS: &str = "TOKEN_TTL_HOURS";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 5000;
    pub const DATABASE_URL: &str = "./.db/quillbox.db";
    pub const JWT_SECRET: &str = "quillbox-dev-secret";
    /// 7 days
    pub const TOKEN_TTL_HOURS: i64 = 168;
}

/// Runtime configuration, built once from the environment at startup
/// and carried in `AppState`.
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var(env_vars::PORT)
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults::PORT);

        let database_url =
            env::var(env_vars::DATABASE_URL).unwrap_or_else(|_| defaults::DATABASE_URL.to_string());

        let jwt_secret = match env::var(env_vars::JWT_SECRET) {
            Ok(s) if !s.is_empty() => s,
            _ => {
                log::warn!(
                    "{} is not set, using the dev fallback secret. Tokens signed with it are \
                     forgeable; set a real secret in production.",
                    env_vars::JWT_SECRET
                );
                defaults::JWT_SECRET.to_string()
            }
        };

        let token_ttl_hours = env::var(env_vars::TOKEN_TTL_HOURS)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults::TOKEN_TTL_HOURS);

        Self {
            port,
            database_url,
            jwt_secret,
            token_ttl_hours,
        }
    }
}
