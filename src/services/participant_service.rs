//! Participant service

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{db::repositories::ParticipantRepository, error::AppResult, models::Participant};

/// Where participants come from
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantSource: Send + Sync {
    /// Participants with a confirmed registration
    async fn confirmed(&self) -> AppResult<Vec<Participant>>;

    /// Participants that are registered but not confirmed
    async fn registered(&self) -> AppResult<Vec<Participant>>;
}

/// PostgreSQL backed participant source
#[derive(Clone)]
pub struct PgParticipantSource {
    pool: PgPool,
}

impl PgParticipantSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantSource for PgParticipantSource {
    async fn confirmed(&self) -> AppResult<Vec<Participant>> {
        ParticipantRepository::find_confirmed(&self.pool).await
    }

    async fn registered(&self) -> AppResult<Vec<Participant>> {
        ParticipantRepository::find_registered(&self.pool).await
    }
}
