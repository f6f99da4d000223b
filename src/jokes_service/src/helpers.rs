use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, migrate::MigrateError, postgres::PgPoolOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseSetupError {
    #[error("Failed to connect to PostgreSQL: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] MigrateError),
}

/// Configure and return a PostgreSQL connection pool
///
/// Creates the pool for `url` and runs all pending migrations.
pub async fn configure_postgresql(url: &Secret<String>) -> Result<PgPool, DatabaseSetupError> {
    let pg_pool = get_postgres_pool(url.expose_secret()).await?;

    sqlx::migrate!("../../migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}
