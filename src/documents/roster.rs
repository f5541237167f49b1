//! Roster loading

use crate::{
    distribution::distribute,
    error::AppResult,
    models::{Participant, StartBlock},
    services::{ParticipantSource, StartblockStore},
};

use super::start_numbers::{StartNumberAssignment, StartNumberPolicy};

/// Everyone who gets a start number, plus the blocks they start in
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Confirmed participants first, then unconfirmed ones
    pub participants: Vec<Participant>,
    pub blocks: Vec<StartBlock>,
}

impl Roster {
    /// Fetch participants and startblocks concurrently.
    pub async fn load(
        source: &dyn ParticipantSource,
        store: &dyn StartblockStore,
    ) -> AppResult<Self> {
        let (confirmed, registered, blocks) =
            futures::try_join!(source.confirmed(), source.registered(), store.get())?;

        tracing::debug!(
            confirmed = confirmed.len(),
            registered = registered.len(),
            blocks = blocks.len(),
            "Roster loaded"
        );

        let mut participants = confirmed;
        participants.extend(registered);
        Ok(Self {
            participants,
            blocks,
        })
    }

    /// Start numbers for everyone, block by block.
    ///
    /// Without any startblock, participants are numbered in roster order.
    pub fn assignments(&self, policy: &StartNumberPolicy) -> AppResult<Vec<StartNumberAssignment<'_>>> {
        if self.blocks.is_empty() {
            tracing::warn!("No startblocks configured, numbering in registration order");
            return policy.assign_unblocked(&self.participants);
        }

        let distribution = distribute(&self.participants, &self.blocks)?;
        policy.assign(&distribution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::{MockParticipantSource, MockStartblockStore};

    fn participant(id: i64, goal: &str, confirmed: bool) -> Participant {
        Participant {
            id,
            firstname: format!("Runner{id}"),
            lastname: "Test".to_string(),
            goal: Some(goal.to_string()),
            confirmed,
        }
    }

    fn source() -> MockParticipantSource {
        let mut source = MockParticipantSource::new();
        source
            .expect_confirmed()
            .returning(|| Ok(vec![participant(1, "ambitious", true), participant(2, "relaxed", true)]));
        source
            .expect_registered()
            .returning(|| Ok(vec![participant(3, "relaxed", false)]));
        source
    }

    #[tokio::test]
    async fn test_load_puts_confirmed_first() {
        let mut store = MockStartblockStore::new();
        store.expect_get().returning(|| Ok(vec![]));

        let roster = Roster::load(&source(), &store).await.unwrap();
        let ids: Vec<_> = roster.participants.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(roster.blocks.is_empty());
    }

    #[test]
    fn test_load_propagates_source_errors() {
        let mut source = MockParticipantSource::new();
        source.expect_confirmed().returning(|| Ok(vec![]));
        source
            .expect_registered()
            .returning(|| Err(AppError::Database("connection reset".to_string())));
        let mut store = MockStartblockStore::new();
        store.expect_get().returning(|| Ok(vec![]));

        let err = tokio_test::block_on(Roster::load(&source, &store)).unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_assignments_follow_blocks() {
        let mut store = MockStartblockStore::new();
        store.expect_get().returning(|| {
            Ok(vec![StartBlock::new(1, "Relaxed", "0"), StartBlock::new(2, "Fast", "600")])
        });

        let roster = Roster::load(&source(), &store).await.unwrap();
        let assignments = roster.assignments(&StartNumberPolicy::default()).unwrap();
        let plan: Vec<_> = assignments
            .iter()
            .map(|a| (a.start_number, a.block.map(|b| b.id), a.participant.id))
            .collect();

        assert_eq!(plan, vec![(1, Some(1), 2), (2, Some(2), 3), (3, Some(2), 1)]);
    }

    #[test]
    fn test_assignments_without_blocks() {
        let roster = Roster {
            participants: vec![participant(5, "ambitious", true), participant(6, "relaxed", false)],
            blocks: vec![],
        };
        let assignments = roster.assignments(&StartNumberPolicy::new(1, [1])).unwrap();
        let numbers: Vec<_> = assignments.iter().map(|a| (a.start_number, a.participant.id)).collect();
        assert_eq!(numbers, vec![(2, 5), (3, 6)]);
    }
}
