//! Environment configuration for the seeder.

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::env;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database settings read from the process environment.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    /// Postgres connection string. `None` means seeding is skipped.
    pub url: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Reads `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
        )
    }

    fn from_vars(url: Option<String>, max_connections: Option<String>) -> Self {
        // A blank URL is as good as a missing one.
        let url = url.filter(|u| !u.trim().is_empty());
        let max_connections = max_connections
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Self {
            url,
            max_connections,
        }
    }

    /// Builds a lazily connecting pool, or `None` when no URL is configured.
    ///
    /// Fails only if the URL cannot be parsed; the first connection attempt
    /// happens when a query runs.
    pub fn connect_lazy(&self) -> Result<Option<PgPool>, sqlx::Error> {
        let Some(url) = self.url.as_deref() else {
            return Ok(None);
        };

        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .connect_lazy(url)?;

        Ok(Some(pool))
    }
}
