//! Database connection management

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{config::DatabaseConfig, error::AppResult};

/// Connect the pool used by the participant and startblock stores
pub async fn create_pool(config: &DatabaseConfig) -> AppResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    Ok(pool)
}

/// Round trip to the database, failing early before any roster is loaded
pub async fn test_connection(pool: &PgPool) -> AppResult<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    tracing::info!(
        size = pool.size(),
        idle = pool.num_idle(),
        "Database connection verified"
    );
    Ok(())
}
