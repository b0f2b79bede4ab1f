use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub port: u16,
    /// Log level the default tracing filter is built from.
    ///
    /// Valid values: "error", "warn", "info", "debug", "trace".
    pub level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: std::env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "subscription-service".to_string()),
            port: std::env::var("SERVICE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            level: std::env::var("SERVICE_LEVEL").unwrap_or_else(|_| "debug".to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub user: String,
    pub pass: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: std::env::var("DB_USER").unwrap_or_else(|_| "gymondo_user".to_string()),
            pass: std::env::var("DB_PASS").unwrap_or_else(|_| "gymondo_pass".to_string()),
            host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5432),
            name: std::env::var("DB_NAME").unwrap_or_else(|_| "gymondo".to_string()),
            max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}
