use std::env;

use crate::error::Result;

/// Runtime configuration, read from the environment once at startup and
/// carried in the application state. Handlers never touch `env::var`.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_url: String,
    pub db_ns: String,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub external_api_base_url: String,
    pub bind_host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            db_url: env::var("DB_URL")?,
            db_ns: env::var("DB_NS")?,
            db_name: env::var("DB_NAME")?,
            db_user: env::var("DB_USER")?,
            db_password: env::var("DB_PASSWORD")?,
            external_api_base_url: env::var("EXTERNAL_API_BASE_URL")?,
            bind_host: env::var("BIND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}
