//! Application configuration loaded from environment variables.

use std::env;

use bloglist_infra::JwtConfig;

#[cfg(feature = "postgres")]
use bloglist_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    /// Registers `POST /api/testing/reset`.
    pub testing_routes: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        #[cfg(feature = "postgres")]
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(20),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(2),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(3003),
            #[cfg(feature = "postgres")]
            database,
            jwt: JwtConfig::from_env(),
            testing_routes: Self::testing_routes_enabled(),
        }
    }

    /// `ENABLE_TESTING_ROUTES=true|1`, or `RUST_ENV=test`.
    fn testing_routes_enabled() -> bool {
        let explicit = env::var("ENABLE_TESTING_ROUTES")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let test_env = env::var("RUST_ENV").map(|v| v == "test").unwrap_or(false);

        explicit || test_env
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
