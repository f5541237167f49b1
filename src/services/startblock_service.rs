//! Startblock service

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    constants::MAX_STARTBLOCK_NAME_LENGTH,
    db::repositories::StartblockRepository,
    error::AppResult,
    models::StartBlock,
};

static START_TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("start time pattern is valid"));

/// Input for a new startblock
#[derive(Debug, Deserialize, Validate)]
pub struct NewStartblock {
    #[validate(length(min = 1, max = MAX_STARTBLOCK_NAME_LENGTH))]
    pub name: String,

    /// Seconds, digits only
    #[validate(regex(path = *START_TIME_REGEX, message = "Start time must be a number of seconds"))]
    pub start_time: String,
}

/// Persistence for startblocks
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StartblockStore: Send + Sync {
    /// Store a new startblock
    async fn add(&self, start_time: &str, name: &str) -> AppResult<StartBlock>;

    /// All startblocks, in release order
    async fn get(&self) -> AppResult<Vec<StartBlock>>;

    /// Start times of all startblocks, in release order
    async fn times(&self) -> AppResult<Vec<String>>;
}

/// PostgreSQL backed startblock store
#[derive(Clone)]
pub struct PgStartblockStore {
    pool: PgPool,
}

impl PgStartblockStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StartblockStore for PgStartblockStore {
    async fn add(&self, start_time: &str, name: &str) -> AppResult<StartBlock> {
        let payload = NewStartblock {
            name: name.to_string(),
            start_time: start_time.to_string(),
        };
        payload.validate()?;

        let block = StartblockRepository::create(&self.pool, &payload.start_time, &payload.name).await?;
        tracing::info!(id = block.id, name = %block.name, "Startblock added");
        Ok(block)
    }

    async fn get(&self) -> AppResult<Vec<StartBlock>> {
        StartblockRepository::list(&self.pool).await
    }

    async fn times(&self) -> AppResult<Vec<String>> {
        StartblockRepository::start_times(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_block(name: &str, start_time: &str) -> NewStartblock {
        NewStartblock {
            name: name.to_string(),
            start_time: start_time.to_string(),
        }
    }

    #[test]
    fn test_valid_startblock() {
        assert!(new_block("My first startblock", "1479312647").validate().is_ok());
        assert!(new_block("Elite", "3600").validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_name() {
        assert!(new_block("", "3600").validate().is_err());
    }

    #[test]
    fn test_rejects_non_numeric_start_time() {
        assert!(new_block("Block", "10:30").validate().is_err());
        assert!(new_block("Block", "").validate().is_err());
    }

    #[test]
    fn test_rejects_overlong_name() {
        let name = "x".repeat(MAX_STARTBLOCK_NAME_LENGTH as usize + 1);
        assert!(new_block(&name, "0").validate().is_err());
    }
}
