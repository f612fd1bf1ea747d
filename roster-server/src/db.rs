use anyhow::{Context, Result, anyhow};
use sqlx::{
    PgPool,
    migrate::Migrator,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::str::FromStr;
use tracing::info;
use url::Url;

use crate::infra::config::DatabaseConfig;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub fn validate_database_url(raw: &str) -> Result<()> {
    let url = Url::parse(raw).context("invalid PostgreSQL URL")?;
    if !matches!(url.scheme(), "postgres" | "postgresql") {
        return Err(anyhow!(
            "unsupported database scheme `{}`; expected postgres",
            url.scheme()
        ));
    }
    if url.path().trim_start_matches('/').is_empty() {
        return Err(anyhow!("database URL must include database name"));
    }
    Ok(())
}

/// Open the pool. Connections are established lazily on first use so the
/// server can come up while the store is still starting.
pub fn connect_lazy(config: &DatabaseConfig) -> Result<PgPool> {
    validate_database_url(&config.url)?;
    let options = PgConnectOptions::from_str(&config.url)
        .context("failed to parse PostgreSQL connection options")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options);

    info!(
        max_connections = config.max_connections,
        acquire_timeout_secs = config.acquire_timeout.as_secs(),
        "database pool configured"
    );
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("failed to apply catalog migrations")?;
    info!("catalog migrations applied");
    Ok(())
}
