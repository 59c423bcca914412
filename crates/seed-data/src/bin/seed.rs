//! Seeds the dashboard database from the command line
//!
//! Run with:
//! ```
//! DATABASE_URL=postgres://... cargo run -p seed-data --bin seed
//! ```

use seed_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DatabaseConfig::from_env();
    let pool = config.connect_lazy()?;

    match seed_database(pool).await? {
        SeedOutcome::Skipped => {
            tracing::info!("Nothing seeded: set DATABASE_URL to seed a database");
        }
        SeedOutcome::Seeded(summary) => {
            tracing::info!("Seed completed!");
            tracing::info!("  Users: {}", summary.users);
            tracing::info!("  Customers: {}", summary.customers);
            tracing::info!("  Invoices: {}", summary.invoices);
            tracing::info!("  Revenue: {}", summary.revenue);
        }
    }

    Ok(())
}
