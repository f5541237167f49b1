//! Participant distribution into startblocks
//!
//! The classifier turns free-form goals into ordered ambition tiers; the
//! distributor splits a tier-ordered roster across the available blocks.

pub mod classifier;
pub mod distributor;

pub use classifier::{classify, group_by_tier, tier_counts};
pub use distributor::{distribute, Distribution, DistributionEntry};
