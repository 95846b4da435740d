use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;

pub struct AppConfig {
    pub database_url: SecretString,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    /// Origin of the landing page allowed to call the API from the browser.
    pub cors_origin: HeaderValue,
    /// Apply the bundled SQL migrations before serving.
    pub run_migrations: bool,
    /// Mount `GET /waitlist`. The listing has no access control.
    pub listing_enabled: bool,
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url: SecretString = SecretString::new(get_env::<String>("DATABASE_URL").into());
        let database_max_connections: u32 = get_env_default("DATABASE_MAX_CONNECTIONS", 5);

        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            SocketAddr::from(([127, 0, 0, 1], 3001)),
        );
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        let run_migrations: bool = get_env_default("RUN_MIGRATIONS", true);
        let listing_enabled: bool = get_env_default("WAITLIST_LISTING_ENABLED", true);
        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());

        Self {
            database_url,
            database_max_connections,
            bind_addr,
            cors_origin,
            run_migrations,
            listing_enabled,
            log_file,
        }
    }
}
