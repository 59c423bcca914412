//! Transactional seeding of the dashboard tables.

use futures::future::try_join_all;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{error, info, warn};

use super::schema;
use crate::fixtures::Fixtures;
use crate::models::User;
use crate::password::hash_password;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Hash(String),
    #[error("Password hashing task failed: {0}")]
    Task(#[from] JoinError),
}

/// Rows actually inserted per table. Rows skipped on conflict are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: u64,
    pub customers: u64,
    pub invoices: u64,
    pub revenue: u64,
}

/// Result of a seed request that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// No connection string was configured, nothing was touched.
    Skipped,
    Seeded(SeedSummary),
}

/// Seeds the placeholder data set, or skips when there is no database.
pub async fn seed_database(pool: Option<PgPool>) -> Result<SeedOutcome, SeedError> {
    let Some(pool) = pool else {
        info!("Database connection string is missing. Skipping database setup.");
        return Ok(SeedOutcome::Skipped);
    };

    let summary = Seeder::new(pool).seed().await?;
    Ok(SeedOutcome::Seeded(summary))
}

/// Creates the schema and inserts fixture rows inside one transaction.
#[derive(Debug, Clone)]
pub struct Seeder {
    pool: PgPool,
    fixtures: Fixtures,
}

impl Seeder {
    /// Creates a seeder for the placeholder data set.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            fixtures: Fixtures::placeholder(),
        }
    }

    /// Replaces the data set to insert.
    pub fn with_fixtures(mut self, fixtures: Fixtures) -> Self {
        self.fixtures = fixtures;
        self
    }

    /// Runs every step in one transaction.
    ///
    /// Commits only if all steps succeed. On error the transaction is rolled
    /// back and the first error is returned; if the future is dropped
    /// midway the transaction is rolled back when it goes out of scope.
    ///
    /// Concurrent first runs against an empty database can race on
    /// `CREATE EXTENSION` / `CREATE TABLE`; the loser fails and rolls back.
    pub async fn seed(&self) -> Result<SeedSummary, SeedError> {
        let mut tx = self.pool.begin().await?;

        match self.seed_all(&mut tx).await {
            Ok(summary) => {
                tx.commit().await?;
                info!(
                    "Seed committed: {} users, {} customers, {} invoices, {} revenue rows inserted",
                    summary.users, summary.customers, summary.invoices, summary.revenue
                );
                Ok(summary)
            }
            Err(e) => {
                error!("Seeding failed, rolling back: {e}");
                if let Err(rollback_err) = tx.rollback().await {
                    warn!("Rollback failed: {rollback_err}");
                }
                Err(e)
            }
        }
    }

    // Later tables reference ids from earlier ones, so the order is fixed.
    async fn seed_all(&self, conn: &mut PgConnection) -> Result<SeedSummary, SeedError> {
        schema::ensure(conn, schema::CREATE_UUID_EXTENSION).await?;

        Ok(SeedSummary {
            users: self.seed_users(conn).await?,
            customers: self.seed_customers(conn).await?,
            invoices: self.seed_invoices(conn).await?,
            revenue: self.seed_revenue(conn).await?,
        })
    }

    /// Seeds users with hashed passwords, skipping existing ids.
    async fn seed_users(&self, conn: &mut PgConnection) -> Result<u64, SeedError> {
        schema::ensure(conn, schema::CREATE_USERS).await?;

        let users = &self.fixtures.users;
        if users.is_empty() {
            return Ok(0);
        }
        info!("Seeding {} users...", users.len());

        let hashes = hash_passwords(users).await?;

        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO users (id, name, email, password) ");
        qb.push_values(users.iter().zip(&hashes), |mut row, (user, hash)| {
            row.push_bind(user.id)
                .push_bind(&user.name)
                .push_bind(&user.email)
                .push_bind(hash);
        });
        qb.push(" ON CONFLICT (id) DO NOTHING");

        let inserted = qb.build().execute(conn).await?.rows_affected();
        info!("Seeded {} users ({} new)", users.len(), inserted);
        Ok(inserted)
    }

    /// Seeds customers, skipping existing ids.
    async fn seed_customers(&self, conn: &mut PgConnection) -> Result<u64, SeedError> {
        schema::ensure(conn, schema::CREATE_CUSTOMERS).await?;

        let customers = &self.fixtures.customers;
        if customers.is_empty() {
            return Ok(0);
        }
        info!("Seeding {} customers...", customers.len());

        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO customers (id, name, email, image_url) ");
        qb.push_values(customers, |mut row, customer| {
            row.push_bind(customer.id)
                .push_bind(&customer.name)
                .push_bind(&customer.email)
                .push_bind(&customer.image_url);
        });
        qb.push(" ON CONFLICT (id) DO NOTHING");

        let inserted = qb.build().execute(conn).await?.rows_affected();
        info!("Seeded {} customers ({} new)", customers.len(), inserted);
        Ok(inserted)
    }

    /// Seeds invoices.
    ///
    /// Invoice ids are generated by the database, so an id conflict never
    /// fires on its own. A row is skipped when an invoice with the same
    /// customer, amount, status and date is already present.
    async fn seed_invoices(&self, conn: &mut PgConnection) -> Result<u64, SeedError> {
        schema::ensure(conn, schema::CREATE_INVOICES).await?;

        let invoices = &self.fixtures.invoices;
        if invoices.is_empty() {
            return Ok(0);
        }
        info!("Seeding {} invoices...", invoices.len());

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO invoices (customer_id, amount, status, date) \
             SELECT v.customer_id, v.amount, v.status, v.date FROM (",
        );
        qb.push_values(invoices, |mut row, invoice| {
            row.push_bind(invoice.customer_id)
                .push_unseparated("::uuid")
                .push_bind(invoice.amount)
                .push_unseparated("::int")
                .push_bind(invoice.status.as_str())
                .push_unseparated("::varchar")
                .push_bind(invoice.date)
                .push_unseparated("::date");
        });
        qb.push(
            r#") AS v (customer_id, amount, status, date)
            WHERE NOT EXISTS (
                SELECT 1 FROM invoices i
                WHERE i.customer_id = v.customer_id
                  AND i.amount = v.amount
                  AND i.status = v.status
                  AND i.date = v.date
            )
            ON CONFLICT (id) DO NOTHING"#,
        );

        let inserted = qb.build().execute(conn).await?.rows_affected();
        info!("Seeded {} invoices ({} new)", invoices.len(), inserted);
        Ok(inserted)
    }

    /// Seeds monthly revenue, skipping months already present.
    async fn seed_revenue(&self, conn: &mut PgConnection) -> Result<u64, SeedError> {
        schema::ensure(conn, schema::CREATE_REVENUE).await?;

        let revenue = &self.fixtures.revenue;
        if revenue.is_empty() {
            return Ok(0);
        }
        info!("Seeding {} revenue rows...", revenue.len());

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("INSERT INTO revenue (month, revenue) ");
        qb.push_values(revenue, |mut row, rev| {
            row.push_bind(&rev.month).push_bind(rev.revenue);
        });
        qb.push(" ON CONFLICT (month) DO NOTHING");

        let inserted = qb.build().execute(conn).await?.rows_affected();
        info!("Seeded {} revenue rows ({} new)", revenue.len(), inserted);
        Ok(inserted)
    }
}

/// Hashes every user's password concurrently on the blocking pool.
async fn hash_passwords(users: &[User]) -> Result<Vec<String>, SeedError> {
    let tasks = users.iter().map(|user| {
        let password = user.password.clone();
        tokio::task::spawn_blocking(move || hash_password(&password))
    });

    try_join_all(tasks).await?.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::verify_password;

    #[tokio::test]
    async fn test_skips_without_pool() {
        let outcome = seed_database(None).await.unwrap();
        assert_eq!(outcome, SeedOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_hash_passwords_keeps_order() {
        let users: Vec<User> = ["alpha-pass", "beta-pass", "gamma-pass"]
            .into_iter()
            .enumerate()
            .map(|(i, password)| User {
                id: uuid::Uuid::new_v4(),
                name: format!("User {i}"),
                email: format!("user{i}@example.com"),
                password: password.to_string(),
            })
            .collect();

        let hashes = hash_passwords(&users).await.unwrap();

        assert_eq!(hashes.len(), users.len());
        for (user, hash) in users.iter().zip(&hashes) {
            assert_ne!(hash, &user.password);
            assert!(verify_password(&user.password, hash).unwrap());
        }
    }

    #[test]
    fn test_database_error_message_is_raw() {
        let err = SeedError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.to_string(), sqlx::Error::RowNotFound.to_string());
    }
}
