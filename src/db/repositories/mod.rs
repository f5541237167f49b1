//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod participant_repo;
pub mod startblock_repo;

pub use participant_repo::ParticipantRepository;
pub use startblock_repo::StartblockRepository;
