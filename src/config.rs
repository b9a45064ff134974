// src/config.rs

use std::env;

/// Server configuration, read once by the process entry point.
///
/// Environment variables:
/// - `DATABASE_URL` — PostgreSQL connection string (required)
/// - `HOST` — bind address (default `127.0.0.1`)
/// - `PORT` — listen port (default `8080`)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Loads configuration from the environment. Fails only when
    /// `DATABASE_URL` is missing; everything else has a default.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        })
    }

    /// The `"host:port"` string handed to the HTTP server.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
