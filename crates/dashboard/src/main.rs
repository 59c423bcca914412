use dashboard::{config::ServerConfig, database::Database, run_server};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = ServerConfig::from_env();

    let pool = config.database.connect_lazy()?;
    if pool.is_none() {
        tracing::warn!("DATABASE_URL is not set; /seed will skip seeding");
    }

    run_server(Database::from(pool), config.port).await
}
