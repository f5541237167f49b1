//! Business logic services
//!
//! Services put trait seams around the repositories so the document and
//! planning code can be exercised without a database.

pub mod participant_service;
pub mod startblock_service;

pub use participant_service::{ParticipantSource, PgParticipantSource};
pub use startblock_service::{NewStartblock, PgStartblockStore, StartblockStore};

#[cfg(test)]
pub use participant_service::MockParticipantSource;
#[cfg(test)]
pub use startblock_service::MockStartblockStore;
