use sqlx::PgPool;

/// Handle to the dashboard database, if one is configured.
#[derive(Clone, Debug, Default)]
pub struct Database {
    pool: Option<PgPool>,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool: Some(pool) }
    }

    /// A handle with no backing database; seeding is skipped.
    pub fn disconnected() -> Self {
        Self { pool: None }
    }

    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }
}

impl From<Option<PgPool>> for Database {
    fn from(pool: Option<PgPool>) -> Self {
        Self { pool }
    }
}
