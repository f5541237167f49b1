//! Participant repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Participant};

/// Repository for participant database operations
pub struct ParticipantRepository;

impl ParticipantRepository {
    /// Participants whose registration is confirmed
    pub async fn find_confirmed(pool: &PgPool) -> AppResult<Vec<Participant>> {
        Self::find_by_confirmation(pool, true).await
    }

    /// Participants that registered but are not confirmed yet
    pub async fn find_registered(pool: &PgPool) -> AppResult<Vec<Participant>> {
        Self::find_by_confirmation(pool, false).await
    }

    async fn find_by_confirmation(pool: &PgPool, confirmed: bool) -> AppResult<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, firstname, lastname, goal, confirmed
            FROM participants
            WHERE confirmed = $1
            ORDER BY id
            "#,
        )
        .bind(confirmed)
        .fetch_all(pool)
        .await?;

        Ok(participants)
    }
}
