//! Block distributor
//!
//! Splits a roster across an ordered list of startblocks. With more than one
//! block the roster is first ordered by ambition tier (stable), then cut into
//! consecutive slices: every block receives `N_p / N_b` participants and the
//! last block additionally takes the remainder. A later block therefore never
//! holds a less ambitious participant than an earlier one, and the per-block
//! amounts only depend on roster and block counts.
//!
//! A roster sharing a single tier is spread over all blocks like any other
//! roster; it does not collapse into one block.

use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::{HasGoal, StartBlock},
};

use super::classifier::group_by_tier;

/// One block of a distribution with the participants released from it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionEntry<'a, P> {
    pub block: &'a StartBlock,
    pub amount: usize,
    #[serde(skip)]
    pub participants: Vec<&'a P>,
}

/// Per-block split of a roster, in the order the blocks were supplied
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution<'a, P> {
    entries: Vec<DistributionEntry<'a, P>>,
}

impl<'a, P> Distribution<'a, P> {
    pub fn entries(&self) -> &[DistributionEntry<'a, P>] {
        &self.entries
    }

    /// Amount per block, in block order
    pub fn amounts(&self) -> Vec<usize> {
        self.entries.iter().map(|entry| entry.amount).collect()
    }

    /// Total number of distributed participants
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, P> IntoIterator for Distribution<'a, P> {
    type Item = DistributionEntry<'a, P>;
    type IntoIter = std::vec::IntoIter<DistributionEntry<'a, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Distribute `participants` over `blocks`.
///
/// Fails with [`AppError::InvalidInput`] when `blocks` is empty.
pub fn distribute<'a, P: HasGoal>(
    participants: &'a [P],
    blocks: &'a [StartBlock],
) -> AppResult<Distribution<'a, P>> {
    if blocks.is_empty() {
        return Err(AppError::InvalidInput(
            "At least one startblock is required".to_string(),
        ));
    }

    if let [block] = blocks {
        return Ok(Distribution {
            entries: vec![DistributionEntry {
                block,
                amount: participants.len(),
                participants: participants.iter().collect(),
            }],
        });
    }

    let mut ordered = group_by_tier(participants).into_values().flatten();

    let entries: Vec<_> = block_sizes(participants.len(), blocks.len())
        .into_iter()
        .zip(blocks)
        .map(|(amount, block)| DistributionEntry {
            block,
            amount,
            participants: ordered.by_ref().take(amount).collect(),
        })
        .collect();

    tracing::debug!(
        participants = participants.len(),
        blocks = blocks.len(),
        amounts = ?entries.iter().map(|e| e.amount).collect::<Vec<_>>(),
        "Distributed participants into startblocks"
    );

    Ok(Distribution { entries })
}

/// Even split with the remainder going to the last block.
fn block_sizes(participants: usize, blocks: usize) -> Vec<usize> {
    let base = participants / blocks;
    let mut sizes = vec![base; blocks];
    if let Some(last) = sizes.last_mut() {
        *last += participants % blocks;
    }
    sizes
}
