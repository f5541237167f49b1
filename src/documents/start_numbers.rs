//! Start number policy and assignment

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    constants::LONG_EXCLUDED_RUN,
    distribution::Distribution,
    error::{AppError, AppResult},
    models::{Participant, StartBlock},
};

/// Hands out start numbers, skipping the excluded ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartNumberPolicy {
    first: u32,
    excluded: BTreeSet<u32>,
}

impl StartNumberPolicy {
    pub fn new(first: u32, excluded: impl IntoIterator<Item = u32>) -> Self {
        Self {
            first,
            excluded: excluded.into_iter().collect(),
        }
    }

    pub fn is_excluded(&self, number: u32) -> bool {
        self.excluded.contains(&number)
    }

    /// The number following `current`, skipping every excluded number.
    ///
    /// `None` once the number range is used up.
    pub fn next(&self, current: u32) -> Option<u32> {
        let mut next = current.checked_add(1)?;
        while self.is_excluded(next) {
            next = next.checked_add(1)?;
        }

        let skipped = next - current - 1;
        if skipped >= LONG_EXCLUDED_RUN {
            tracing::warn!(current, next, skipped, "Skipped a long run of excluded start numbers");
        }
        Some(next)
    }

    /// The first number to hand out.
    pub fn first_number(&self) -> Option<u32> {
        if self.is_excluded(self.first) {
            self.next(self.first)
        } else {
            Some(self.first)
        }
    }
}

impl Default for StartNumberPolicy {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_FIRST_START_NUMBER, std::iter::empty())
    }
}

/// A participant with its start number and block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartNumberAssignment<'a> {
    pub start_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<&'a StartBlock>,
    pub participant: &'a Participant,
}

impl StartNumberPolicy {
    /// Number every participant of a distribution, block by block.
    pub fn assign<'a>(
        &self,
        distribution: &Distribution<'a, Participant>,
    ) -> AppResult<Vec<StartNumberAssignment<'a>>> {
        let grouped = distribution
            .entries()
            .iter()
            .flat_map(|entry| entry.participants.iter().map(move |p| (Some(entry.block), *p)));
        self.number(grouped)
    }

    /// Number participants in roster order, without any block.
    pub fn assign_unblocked<'a>(
        &self,
        participants: &'a [Participant],
    ) -> AppResult<Vec<StartNumberAssignment<'a>>> {
        self.number(participants.iter().map(|p| (None, p)))
    }

    fn number<'a>(
        &self,
        participants: impl Iterator<Item = (Option<&'a StartBlock>, &'a Participant)>,
    ) -> AppResult<Vec<StartNumberAssignment<'a>>> {
        let mut previous: Option<u32> = None;
        let mut assignments = Vec::new();

        for (block, participant) in participants {
            let start_number = match previous {
                None => self.first_number(),
                Some(number) => self.next(number),
            }
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "Ran out of start numbers after {} participants",
                    assignments.len()
                ))
            })?;

            previous = Some(start_number);
            assignments.push(StartNumberAssignment {
                start_number,
                block,
                participant,
            });
        }

        Ok(assignments)
    }
}
