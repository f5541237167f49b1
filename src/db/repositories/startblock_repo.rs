//! Startblock repository

use sqlx::PgPool;

use crate::{error::AppResult, models::StartBlock};

/// Repository for startblock database operations
pub struct StartblockRepository;

impl StartblockRepository {
    /// Insert a new startblock
    pub async fn create(pool: &PgPool, start_time: &str, name: &str) -> AppResult<StartBlock> {
        let block = sqlx::query_as::<_, StartBlock>(
            r#"
            INSERT INTO startblocks (start_time, name)
            VALUES ($1, $2)
            RETURNING id, name, start_time
            "#,
        )
        .bind(start_time)
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(block)
    }

    /// All startblocks in creation order
    pub async fn list(pool: &PgPool) -> AppResult<Vec<StartBlock>> {
        let blocks = sqlx::query_as::<_, StartBlock>(
            r#"SELECT id, name, start_time FROM startblocks ORDER BY id"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(blocks)
    }

    /// Start times of all startblocks in creation order
    pub async fn start_times(pool: &PgPool) -> AppResult<Vec<String>> {
        let times = sqlx::query_scalar::<_, String>(
            r#"SELECT start_time FROM startblocks ORDER BY id"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(times)
    }
}
