//! Server configuration read from the environment.

use seed_data::config::DatabaseConfig;
use std::env;

const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database: DatabaseConfig,
    pub port: u16,
}

impl ServerConfig {
    /// Reads `PORT` plus the database variables. Missing or invalid values
    /// fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            port: parse_port(env::var("PORT").ok()),
        }
    }
}

fn parse_port(value: Option<String>) -> u16 {
    value
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}
